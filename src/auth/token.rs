use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const TOKEN_TTL_HOURS: i64 = 24;

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The unique identifier of the authenticated user.
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: usize,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Generates a JWT for a given user ID.
///
/// The token is set to expire in 24 hours. It requires the `JWT_SECRET`
/// environment variable to be set for signing the token.
///
/// # Returns
/// A `Result` containing the JWT string if successful.
/// Returns `AppError::InternalServerError` if `JWT_SECRET` is not set or if
/// token encoding fails.
pub fn generate_token(user_id: Uuid) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expiration = now
        .checked_add_signed(chrono::Duration::hours(TOKEN_TTL_HOURS))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        user_id,
        iat: now.timestamp() as usize,
        exp: expiration,
    };

    let secret = jwt_secret()?;

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
}

/// Verifies a JWT string and decodes its claims.
///
/// It requires the `JWT_SECRET` environment variable to be set for verifying
/// the token signature. Default validation checks are applied (signature,
/// expiration).
///
/// # Returns
/// A `Result` containing the decoded `Claims` if the token is valid.
/// Returns `AppError::InternalServerError` if `JWT_SECRET` is not set; this is
/// a deployment-time misconfiguration, not a client fault.
/// Returns `AppError::Forbidden` (via the `From` conversion in `error`) if the
/// token is malformed, its signature is invalid, or it has expired.
pub fn verify_token(token: &str) -> Result<Claims, AppError> {
    let secret = jwt_secret()?;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Decodes a JWT's claims without verifying its signature or expiry.
///
/// This is the client-side expiry heuristic: callers inspect `exp` themselves
/// and compare against the local clock. Never use this to authenticate a
/// request on the server.
pub fn decode_token_unverified(token: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| AppError::BadRequest(format!("Malformed token: {}", e)))
}

fn jwt_secret() -> Result<String, AppError> {
    std::env::var("JWT_SECRET")
        .map_err(|_| AppError::InternalServerError("Server configuration error".into()))
}
