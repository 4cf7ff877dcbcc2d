use crate::{
    auth::{
        generate_token, hash_password, verify_password, AuthResponse, LoginRequest,
        RegisterRequest,
    },
    error::AppError,
    models::{User, UserRecord},
};
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns the public user projection together
/// with an authentication token.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    // Check if email already exists
    let existing_user: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(&register_data.email)
        .fetch_optional(&**pool)
        .await?;

    if existing_user.is_some() {
        return Err(AppError::BadRequest("Email already registered".into()));
    }

    // Hash password
    let password_hash = hash_password(&register_data.password)?;

    // Insert new user
    let record: UserRecord = sqlx::query_as(
        "INSERT INTO users (id, email, name, password_hash, profile_avatar)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, email, name, password_hash, profile_avatar, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(&register_data.email)
    .bind(&register_data.name)
    .bind(&password_hash)
    .bind(&register_data.profile_avatar)
    .fetch_one(&**pool)
    .await?;

    // Generate token
    let token = generate_token(record.id)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        user: User::from(record),
        token,
    }))
}

/// Login user
///
/// Authenticates a user by email and password and returns the public user
/// projection together with an authentication token.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    // Get user from database
    let record: Option<UserRecord> = sqlx::query_as(
        "SELECT id, email, name, password_hash, profile_avatar, created_at
         FROM users WHERE email = $1",
    )
    .bind(&login_data.email)
    .fetch_optional(&**pool)
    .await?;

    match record {
        Some(record) => {
            // Verify password
            if verify_password(&login_data.password, &record.password_hash)? {
                let token = generate_token(record.id)?;
                Ok(HttpResponse::Ok().json(AuthResponse {
                    user: User::from(record),
                    token,
                }))
            } else {
                Err(AppError::Unauthorized("Invalid credentials".into()))
            }
        }
        None => Err(AppError::Unauthorized("Invalid credentials".into())),
    }
}
