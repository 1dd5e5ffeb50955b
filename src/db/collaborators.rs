use crate::models::Collaborator;
use chrono::Utc;
use sqlx::PgExecutor;
use uuid::Uuid;

pub async fn find(
    ex: impl PgExecutor<'_>,
    list_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Collaborator>, sqlx::Error> {
    sqlx::query_as::<_, Collaborator>(
        "SELECT id, user_id, list_id, created_at
         FROM collaborators WHERE list_id = $1 AND user_id = $2",
    )
    .bind(list_id)
    .bind(user_id)
    .fetch_optional(ex)
    .await
}

/// Inserts a sharing edge. The (user_id, list_id) uniqueness constraint can
/// reject this under a concurrent duplicate share; callers treat that
/// violation as the idempotent "already shared" outcome.
pub async fn insert(
    ex: impl PgExecutor<'_>,
    list_id: Uuid,
    user_id: Uuid,
) -> Result<Collaborator, sqlx::Error> {
    sqlx::query_as::<_, Collaborator>(
        "INSERT INTO collaborators (id, user_id, list_id, created_at)
         VALUES ($1, $2, $3, $4)
         RETURNING id, user_id, list_id, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(list_id)
    .bind(Utc::now())
    .fetch_one(ex)
    .await
}
