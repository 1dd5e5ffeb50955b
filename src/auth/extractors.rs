use actix_web::dev::Payload;
use actix_web::{web, Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::token::Claims;
use crate::db;
use crate::error::AppError;
use crate::models::User;

/// Resolves the verified token claims into the authenticated user.
///
/// `AuthMiddleware` has already verified the token's signature and expiry and
/// inserted the [`Claims`] into request extensions. This extractor parses the
/// subject as a user id and loads the user row; a malformed subject or an
/// unknown user produces the same uniform unauthenticated outcome as a bad
/// token would.
pub struct CurrentUser(pub User);

fn credentials_error() -> AppError {
    AppError::Unauthorized("Could not validate credentials".into())
}

impl FromRequest for CurrentUser {
    type Error = ActixError; // AppError converts into ActixError via ResponseError
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let claims = req.extensions().get::<Claims>().cloned();
            let claims = match claims {
                Some(claims) => claims,
                None => return Err(credentials_error().into()),
            };

            let user_id = match Uuid::parse_str(&claims.sub) {
                Ok(id) => id,
                Err(_) => return Err(credentials_error().into()),
            };

            let pool = req
                .app_data::<web::Data<PgPool>>()
                .cloned()
                .ok_or_else(|| {
                    ActixError::from(AppError::InternalServerError(
                        "Database pool missing from app data".into(),
                    ))
                })?;

            let user = db::users::find_by_id(pool.get_ref(), user_id)
                .await
                .map_err(AppError::from)?;

            match user {
                Some(user) => Ok(CurrentUser(user)),
                None => Err(credentials_error().into()),
            }
        })
    }
}
