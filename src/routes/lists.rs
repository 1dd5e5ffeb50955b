use crate::{
    access,
    auth::CurrentUser,
    db,
    error::AppError,
    models::{ListInput, ShareRequest, TodoList},
};
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Creates a new list owned by the authenticated user.
///
/// ## Request Body:
/// - `title`: The title of the list (required, 1-200 characters).
/// - `type` (optional): Free-form type tag, defaults to "simple".
///
/// ## Responses:
/// - `201 Created`: Returns the new `TodoList` as JSON.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `422 Unprocessable Entity`: If input validation fails.
#[post("")]
pub async fn create_list(
    pool: web::Data<PgPool>,
    list_data: web::Json<ListInput>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    list_data.validate()?;

    let list = TodoList::new(list_data.into_inner(), user.0.id);
    let created = db::lists::insert(&**pool, &list).await?;

    Ok(HttpResponse::Created().json(created))
}

/// Retrieves the lists visible to the authenticated user: lists they own
/// plus lists shared with them as a collaborator.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `TodoList` objects.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
#[get("")]
pub async fn get_lists(
    pool: web::Data<PgPool>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let lists = db::lists::for_user(&**pool, user.0.id).await?;
    Ok(HttpResponse::Ok().json(lists))
}

/// Shares a list with another registered user by email.
///
/// Only the owner may share; for anyone else the list appears not to exist.
/// Sharing twice is a no-op success rather than an error.
///
/// ## Responses:
/// - `200 OK`: `{"message": "List shared successfully"}` or
///   `{"message": "Already shared"}`.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the list does not exist, the caller is not its
///   owner, or no user is registered under the given email.
#[post("/{list_id}/share")]
pub async fn share_list(
    pool: web::Data<PgPool>,
    list_id: web::Path<Uuid>,
    share_data: web::Json<ShareRequest>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    share_data.validate()?;
    let list_id = list_id.into_inner();

    let mut tx = pool.begin().await?;

    // Owner-only: a missing list and a list owned by someone else are
    // indistinguishable to the caller.
    db::lists::find_owned(&mut *tx, list_id, user.0.id)
        .await?
        .ok_or_else(|| AppError::NotFound("List not found or you are not the owner".into()))?;

    let target_user = db::users::find_by_email(&mut *tx, &share_data.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User with this email does not exist".into()))?;

    if db::collaborators::find(&mut *tx, list_id, target_user.id)
        .await?
        .is_some()
    {
        tx.commit().await?;
        return Ok(HttpResponse::Ok().json(json!({ "message": "Already shared" })));
    }

    match db::collaborators::insert(&mut *tx, list_id, target_user.id).await {
        Ok(_) => {
            tx.commit().await?;
            Ok(HttpResponse::Ok().json(json!({ "message": "List shared successfully" })))
        }
        // A concurrent share slipped in between the check and the insert;
        // the uniqueness constraint keeps the edge single and we report the
        // same idempotent outcome.
        Err(e) if db::is_unique_violation(&e) => {
            Ok(HttpResponse::Ok().json(json!({ "message": "Already shared" })))
        }
        Err(e) => Err(e.into()),
    }
}

/// Deletes a list together with all of its items and collaborator links.
///
/// Strict owner check: a collaborator already knows the list exists, so the
/// refusal is an explicit 403 rather than the existence-hiding 404 used by
/// the read path.
///
/// ## Responses:
/// - `204 No Content`: On successful deletion.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `403 Forbidden`: If the caller is not the owner.
/// - `404 Not Found`: If no list with the given id exists.
#[delete("/{list_id}")]
pub async fn delete_list(
    pool: web::Data<PgPool>,
    list_id: web::Path<Uuid>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let list_id = list_id.into_inner();

    let mut tx = pool.begin().await?;

    access::require_owner(&mut tx, list_id, user.0.id).await?;
    db::lists::delete_cascade(&mut tx, list_id).await?;

    tx.commit().await?;

    Ok(HttpResponse::NoContent().finish())
}
