//!
//! # Authorization Guard
//!
//! The single place that decides whether a user may act on a list.
//!
//! The read/write guard ([`verify_access`]) answers `NotFound` both when the
//! list is missing and when the caller is neither owner nor collaborator, so
//! non-members cannot probe which list ids exist. The strict owner check
//! ([`require_owner`]) is used only for destructive operations the caller
//! could already see succeed or fail (list deletion); there a collaborator
//! gets `Forbidden` because the list's existence is not a secret to them.

use crate::db;
use crate::error::AppError;
use crate::models::TodoList;
use sqlx::PgConnection;
use uuid::Uuid;

/// Grants access to a list if the user owns it or collaborates on it.
///
/// Returns the list on success so callers do not have to fetch it again.
/// Both "no such list" and "no access" come back as `NotFound`.
pub async fn verify_access(
    conn: &mut PgConnection,
    list_id: Uuid,
    user_id: Uuid,
) -> Result<TodoList, AppError> {
    let list = db::lists::find(&mut *conn, list_id)
        .await?
        .ok_or_else(|| AppError::NotFound("List not found".into()))?;

    if list.owner_id == user_id {
        return Ok(list);
    }

    if db::collaborators::find(&mut *conn, list_id, user_id)
        .await?
        .is_some()
    {
        return Ok(list);
    }

    Err(AppError::NotFound("List not found or access denied".into()))
}

/// Grants access to a list only to its owner.
///
/// Unlike [`verify_access`] this distinguishes a missing list (`NotFound`)
/// from insufficient rights (`Forbidden`).
pub async fn require_owner(
    conn: &mut PgConnection,
    list_id: Uuid,
    user_id: Uuid,
) -> Result<TodoList, AppError> {
    let list = db::lists::find(&mut *conn, list_id)
        .await?
        .ok_or_else(|| AppError::NotFound("List not found".into()))?;

    if list.owner_id != user_id {
        return Err(AppError::Forbidden(
            "Only the owner can delete this list".into(),
        ));
    }

    Ok(list)
}
