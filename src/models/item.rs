use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents a todo item as stored in the database and returned by the API.
///
/// An item belongs to exactly one list and is removed when that list is
/// deleted. Its only lifecycle beyond creation is toggling `is_complete`
/// and deletion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TodoItem {
    /// Unique identifier for the item (UUID v4).
    pub id: Uuid,
    /// The title of the item.
    pub title: String,
    /// Completion flag, false on creation.
    pub is_complete: bool,
    /// Identifier of the parent list.
    pub list_id: Uuid,
    /// Timestamp of when the item was created.
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Creates a new `TodoItem` under the given list, incomplete by default.
    pub fn new(title: String, list_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            is_complete: false,
            list_id,
            created_at: Utc::now(),
        }
    }
}

/// Input structure for creating an item.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ItemInput {
    /// The title of the item. Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
}

/// Partial update for an item. Absent fields are left unchanged.
#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct ItemPatch {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub is_complete: Option<bool>,
}
