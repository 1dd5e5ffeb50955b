use crate::{
    auth::{
        generate_token, hash_password, verify_password, LoginRequest, SignupRequest, TokenResponse,
    },
    db,
    error::AppError,
    models::{User, UserResponse},
};
use actix_web::{post, web, HttpResponse, Responder};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns the public user record. The
/// password is bcrypt-hashed before it ever reaches the store.
#[post("/signup")]
pub async fn signup(
    pool: web::Data<PgPool>,
    signup_data: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    signup_data.validate()?;

    // Check if email already exists
    let existing_user = db::users::find_by_email(&**pool, &signup_data.email).await?;
    if existing_user.is_some() {
        return Err(AppError::BadRequest("Email already registered".into()));
    }

    // Hash password
    let password_hash = hash_password(&signup_data.password)?;

    let user = User {
        id: Uuid::new_v4(),
        email: signup_data.email.clone(),
        password_hash,
        created_at: Utc::now(),
    };

    // The unique index on email backstops a concurrent signup with the same
    // address slipping past the existence check above.
    let created = match db::users::insert(&**pool, &user).await {
        Ok(created) => created,
        Err(e) if db::is_unique_violation(&e) => {
            return Err(AppError::BadRequest("Email already registered".into()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(HttpResponse::Created().json(UserResponse::from(created)))
}

/// Login user
///
/// Authenticates a user and returns a bearer token. Unknown email and wrong
/// password produce the same response.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    let user = db::users::find_by_email(&**pool, &login_data.email).await?;

    match user {
        Some(user) => {
            if verify_password(&login_data.password, &user.password_hash)? {
                let token = generate_token(user.id)?;
                Ok(HttpResponse::Ok().json(TokenResponse::bearer(token)))
            } else {
                Err(AppError::Unauthorized("Incorrect email or password".into()))
            }
        }
        None => Err(AppError::Unauthorized("Incorrect email or password".into())),
    }
}
