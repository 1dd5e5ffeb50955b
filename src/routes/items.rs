use crate::{
    access,
    auth::CurrentUser,
    db,
    error::AppError,
    models::{ItemInput, ItemPatch, TodoItem},
};
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Creates a new item under a list.
///
/// Guarded: the caller must own the list or collaborate on it; otherwise the
/// list appears not to exist.
///
/// ## Responses:
/// - `201 Created`: Returns the new `TodoItem` (incomplete) as JSON.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the list does not exist or the caller has no access.
/// - `422 Unprocessable Entity`: If input validation fails.
#[post("/{list_id}/items")]
pub async fn create_item(
    pool: web::Data<PgPool>,
    list_id: web::Path<Uuid>,
    item_data: web::Json<ItemInput>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    item_data.validate()?;
    let list_id = list_id.into_inner();

    let mut tx = pool.begin().await?;

    access::verify_access(&mut tx, list_id, user.0.id).await?;

    let item = TodoItem::new(item_data.into_inner().title, list_id);
    let created = db::items::insert(&mut *tx, &item).await?;

    tx.commit().await?;

    Ok(HttpResponse::Created().json(created))
}

/// Retrieves all items of a list in insertion order.
///
/// Guarded like `create_item`.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `TodoItem` objects.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the list does not exist or the caller has no access.
#[get("/{list_id}/items")]
pub async fn read_items(
    pool: web::Data<PgPool>,
    list_id: web::Path<Uuid>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let list_id = list_id.into_inner();

    let mut tx = pool.begin().await?;

    access::verify_access(&mut tx, list_id, user.0.id).await?;
    let items = db::items::for_list(&mut *tx, list_id).await?;

    tx.commit().await?;

    Ok(HttpResponse::Ok().json(items))
}

/// Applies a partial update to an item.
///
/// The item is looked up first; access is then checked against its parent
/// list. Only fields present in the patch are applied; absent fields are
/// left untouched.
///
/// ## Request Body:
/// - `title` (optional): New title, 1-200 characters.
/// - `is_complete` (optional): New completion flag.
///
/// ## Responses:
/// - `200 OK`: Returns the updated `TodoItem` as JSON.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the item does not exist or the caller has no access
///   to its parent list.
/// - `422 Unprocessable Entity`: If input validation fails.
#[patch("/{item_id}")]
pub async fn update_item(
    pool: web::Data<PgPool>,
    item_id: web::Path<Uuid>,
    item_update: web::Json<ItemPatch>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    item_update.validate()?;
    let item_id = item_id.into_inner();

    let mut tx = pool.begin().await?;

    let item = db::items::find(&mut *tx, item_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Item not found".into()))?;

    access::verify_access(&mut tx, item.list_id, user.0.id).await?;

    let patch = item_update.into_inner();
    let title = patch.title.unwrap_or(item.title);
    let is_complete = patch.is_complete.unwrap_or(item.is_complete);

    let updated = db::items::update(&mut *tx, item_id, &title, is_complete).await?;

    tx.commit().await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Deletes an item.
///
/// Same lookup and guard-via-parent-list pattern as `update_item`.
///
/// ## Responses:
/// - `204 No Content`: On successful deletion.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the item does not exist or the caller has no access
///   to its parent list.
#[delete("/{item_id}")]
pub async fn delete_item(
    pool: web::Data<PgPool>,
    item_id: web::Path<Uuid>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let item_id = item_id.into_inner();

    let mut tx = pool.begin().await?;

    let item = db::items::find(&mut *tx, item_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Item not found".into()))?;

    access::verify_access(&mut tx, item.list_id, user.0.id).await?;
    db::items::delete(&mut *tx, item_id).await?;

    tx.commit().await?;

    Ok(HttpResponse::NoContent().finish())
}
