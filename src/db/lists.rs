use crate::models::TodoList;
use sqlx::{PgConnection, PgExecutor};
use uuid::Uuid;

pub async fn insert(ex: impl PgExecutor<'_>, list: &TodoList) -> Result<TodoList, sqlx::Error> {
    sqlx::query_as::<_, TodoList>(
        "INSERT INTO todo_lists (id, title, list_type, owner_id, created_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, title, list_type, owner_id, created_at",
    )
    .bind(list.id)
    .bind(&list.title)
    .bind(&list.list_type)
    .bind(list.owner_id)
    .bind(list.created_at)
    .fetch_one(ex)
    .await
}

pub async fn find(ex: impl PgExecutor<'_>, id: Uuid) -> Result<Option<TodoList>, sqlx::Error> {
    sqlx::query_as::<_, TodoList>(
        "SELECT id, title, list_type, owner_id, created_at FROM todo_lists WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(ex)
    .await
}

/// Looks up a list only if the given user owns it. The sharing workflow uses
/// this so that non-owners cannot distinguish "no such list" from "not yours".
pub async fn find_owned(
    ex: impl PgExecutor<'_>,
    id: Uuid,
    owner_id: Uuid,
) -> Result<Option<TodoList>, sqlx::Error> {
    sqlx::query_as::<_, TodoList>(
        "SELECT id, title, list_type, owner_id, created_at
         FROM todo_lists WHERE id = $1 AND owner_id = $2",
    )
    .bind(id)
    .bind(owner_id)
    .fetch_optional(ex)
    .await
}

/// Lists visible to a user: owned ones plus those shared with them.
///
/// `UNION` has set semantics, so a user who somehow ends up both owner and
/// collaborator of the same list still sees it exactly once.
pub async fn for_user(
    ex: impl PgExecutor<'_>,
    user_id: Uuid,
) -> Result<Vec<TodoList>, sqlx::Error> {
    sqlx::query_as::<_, TodoList>(
        "SELECT l.id, l.title, l.list_type, l.owner_id, l.created_at
         FROM todo_lists l WHERE l.owner_id = $1
         UNION
         SELECT l.id, l.title, l.list_type, l.owner_id, l.created_at
         FROM todo_lists l
         JOIN collaborators c ON c.list_id = l.id
         WHERE c.user_id = $1
         ORDER BY created_at",
    )
    .bind(user_id)
    .fetch_all(ex)
    .await
}

/// Removes a list together with all of its items and collaborator links.
///
/// Must run inside a transaction owned by the caller so that the cascade is
/// all-or-nothing: a failure after the first delete rolls everything back and
/// no orphan row can reference a missing list.
pub async fn delete_cascade(conn: &mut PgConnection, list_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM todo_items WHERE list_id = $1")
        .bind(list_id)
        .execute(&mut *conn)
        .await?;

    sqlx::query("DELETE FROM collaborators WHERE list_id = $1")
        .bind(list_id)
        .execute(&mut *conn)
        .await?;

    sqlx::query("DELETE FROM todo_lists WHERE id = $1")
        .bind(list_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}
