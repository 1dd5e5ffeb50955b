use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents a todo list as stored in the database and returned by the API.
///
/// A list is owned by exactly one user; ownership is not transferable. Other
/// users gain access through [`Collaborator`] rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TodoList {
    /// Unique identifier for the list (UUID v4).
    pub id: Uuid,
    /// The title of the list.
    pub title: String,
    /// Free-form type tag, defaults to "simple".
    #[serde(rename = "type")]
    pub list_type: String,
    /// Identifier of the user who owns the list.
    pub owner_id: Uuid,
    /// Timestamp of when the list was created.
    pub created_at: DateTime<Utc>,
}

impl TodoList {
    /// Creates a new `TodoList` from `ListInput` and the owner's user id.
    /// Sets `created_at` to the current time and `id` to a new UUID.
    pub fn new(input: ListInput, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            list_type: input.list_type,
            owner_id,
            created_at: Utc::now(),
        }
    }
}

/// Input structure for creating a list.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ListInput {
    /// The title of the list. Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Free-form type tag; "simple" when omitted.
    #[serde(rename = "type", default = "default_list_type")]
    pub list_type: String,
}

fn default_list_type() -> String {
    "simple".to_string()
}

/// A sharing edge between a user and a list.
///
/// At most one row may exist per (user, list) pair; the store enforces this
/// with a uniqueness constraint in addition to the pre-insert existence check.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Collaborator {
    pub id: Uuid,
    pub user_id: Uuid,
    pub list_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Payload for inviting a user to a list by email.
#[derive(Debug, Deserialize, Validate)]
pub struct ShareRequest {
    #[validate(email)]
    pub email: String,
}
