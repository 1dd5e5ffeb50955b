use crate::models::TodoItem;
use sqlx::PgExecutor;
use uuid::Uuid;

pub async fn insert(ex: impl PgExecutor<'_>, item: &TodoItem) -> Result<TodoItem, sqlx::Error> {
    sqlx::query_as::<_, TodoItem>(
        "INSERT INTO todo_items (id, title, is_complete, list_id, created_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, title, is_complete, list_id, created_at",
    )
    .bind(item.id)
    .bind(&item.title)
    .bind(item.is_complete)
    .bind(item.list_id)
    .bind(item.created_at)
    .fetch_one(ex)
    .await
}

pub async fn find(ex: impl PgExecutor<'_>, id: Uuid) -> Result<Option<TodoItem>, sqlx::Error> {
    sqlx::query_as::<_, TodoItem>(
        "SELECT id, title, is_complete, list_id, created_at FROM todo_items WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(ex)
    .await
}

pub async fn for_list(
    ex: impl PgExecutor<'_>,
    list_id: Uuid,
) -> Result<Vec<TodoItem>, sqlx::Error> {
    sqlx::query_as::<_, TodoItem>(
        "SELECT id, title, is_complete, list_id, created_at
         FROM todo_items WHERE list_id = $1
         ORDER BY created_at",
    )
    .bind(list_id)
    .fetch_all(ex)
    .await
}

pub async fn update(
    ex: impl PgExecutor<'_>,
    id: Uuid,
    title: &str,
    is_complete: bool,
) -> Result<TodoItem, sqlx::Error> {
    sqlx::query_as::<_, TodoItem>(
        "UPDATE todo_items SET title = $1, is_complete = $2
         WHERE id = $3
         RETURNING id, title, is_complete, list_id, created_at",
    )
    .bind(title)
    .bind(is_complete)
    .bind(id)
    .fetch_one(ex)
    .await
}

pub async fn delete(ex: impl PgExecutor<'_>, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM todo_items WHERE id = $1")
        .bind(id)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}
