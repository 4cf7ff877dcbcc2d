use crate::error::AppError;
use bcrypt::{hash, verify};

// Bcrypt failures convert to AppError::InternalServerError through the From
// conversion in `error`.

pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(hash(password, 12)?) // bcrypt default cost is 12
}

pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    Ok(verify(password, hashed_password)?)
}
