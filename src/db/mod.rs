//!
//! # Repository Layer
//!
//! Plain repository-style functions per entity, replacing any notion of an
//! implicit relationship graph: every statement the store runs is visible
//! here, including the multi-statement cascade delete for lists.
//!
//! Single-statement functions take any `PgExecutor` so they run against the
//! pool or against a transaction connection interchangeably. Multi-statement
//! operations take `&mut PgConnection` and are expected to be called inside a
//! transaction owned by the request handler.

pub mod collaborators;
pub mod items;
pub mod lists;
pub mod users;

/// True when an insert failed against a uniqueness constraint. Used for the
/// duplicate-email check on signup and as the backstop for concurrent
/// duplicate share requests.
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .map(|e| e.is_unique_violation())
        .unwrap_or(false)
}
