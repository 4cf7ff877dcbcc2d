//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. It centralizes error management, providing a consistent way to
//! handle and represent the error taxonomy of the API: authentication failure,
//! authorization failure, validation failure, not-found, and unexpected
//! internal failure.
//!
//! `AppError` implements `actix_web::error::ResponseError` to seamlessly
//! convert application errors into appropriate HTTP responses with JSON
//! bodies. It also provides `From` trait implementations for common error
//! types like `sqlx::Error`, `validator::ValidationErrors`,
//! `jsonwebtoken::errors::Error`, and `bcrypt::BcryptError`, allowing for easy
//! conversion using the `?` operator.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
///
/// Each variant corresponds to a specific type of error, carrying a message
/// detailing the issue. These errors are then converted into appropriate HTTP
/// responses.
#[derive(Debug)]
pub enum AppError {
    /// Authentication failure: missing or malformed credentials (HTTP 401).
    Unauthorized(String),
    /// Authorization failure: the caller is authenticated but not allowed to
    /// act on the resource, or presented an invalid/expired token (HTTP 403).
    Forbidden(String),
    /// Represents a client-side error due to a malformed or invalid request (HTTP 400).
    BadRequest(String),
    /// Represents a situation where a requested resource was not found (HTTP 404).
    NotFound(String),
    /// Represents an unexpected server-side error (HTTP 500).
    InternalServerError(String),
    /// Represents an error originating from database operations (HTTP 500).
    /// The detail is logged server-side; clients see a generic message.
    DatabaseError(String),
    /// Represents an error due to failed input validation (HTTP 422 Unprocessable Entity).
    /// Carries the first offending field's message.
    ValidationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// This implementation allows Actix Web to automatically translate `AppError`
/// results from handlers into the correct HTTP status codes and JSON error
/// responses.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "error": msg
            })),
            AppError::Forbidden(msg) => HttpResponse::Forbidden().json(json!({
                "error": msg
            })),
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            AppError::InternalServerError(msg) => HttpResponse::InternalServerError().json(json!({
                "error": msg
            })),
            // Database detail stays server-side; the client only sees a
            // generic internal error.
            AppError::DatabaseError(msg) => {
                log::error!("database error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error"
                }))
            }
            AppError::ValidationError(msg) => HttpResponse::UnprocessableEntity().json(json!({
                "error": msg
            })),
        }
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// Specific cases like `sqlx::Error::RowNotFound` are mapped to `AppError::NotFound`,
/// while other database errors become `AppError::DatabaseError`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

/// Converts `validator::ValidationErrors` into `AppError::ValidationError`.
///
/// Only the first validation issue's message is surfaced to the client.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> AppError {
        let message = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{}: {}", field, msg),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .next()
            .unwrap_or_else(|| errors.to_string());
        AppError::ValidationError(message)
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AppError::Forbidden`.
///
/// An invalid or expired token is an authorization failure, distinct from a
/// missing one.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Forbidden(error.to_string())
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::InternalServerError`.
///
/// This handles errors during password hashing or verification.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_error_responses() {
        let error = AppError::Unauthorized("No token provided or invalid format.".into());
        let response = error.error_response();
        assert_eq!(response.status(), 401);

        let error = AppError::Forbidden("Invalid or expired token".into());
        let response = error.error_response();
        assert_eq!(response.status(), 403);

        let error = AppError::BadRequest("Invalid input".into());
        let response = error.error_response();
        assert_eq!(response.status(), 400);

        let error = AppError::NotFound("No board found".into());
        let response = error.error_response();
        assert_eq!(response.status(), 404);

        let error = AppError::InternalServerError("Server configuration error".into());
        let response = error.error_response();
        assert_eq!(response.status(), 500);

        let error = AppError::DatabaseError("connection refused".into());
        let response = error.error_response();
        assert_eq!(response.status(), 500);

        let error = AppError::ValidationError("name: too short".into());
        let response = error.error_response();
        assert_eq!(response.status(), 422);
    }

    #[test]
    fn test_jwt_error_maps_to_forbidden() {
        let jwt_err = jsonwebtoken::decode::<serde_json::Value>(
            "not.a.token",
            &jsonwebtoken::DecodingKey::from_secret(b"secret"),
            &jsonwebtoken::Validation::default(),
        )
        .unwrap_err();
        let error: AppError = jwt_err.into();
        match error {
            AppError::Forbidden(_) => {}
            other => panic!("Expected Forbidden, got {:?}", other),
        }
    }

    #[test]
    fn test_bcrypt_error_maps_to_internal() {
        let bcrypt_err = bcrypt::verify("password", "not-a-bcrypt-hash").unwrap_err();
        let error: AppError = bcrypt_err.into();
        match error {
            AppError::InternalServerError(_) => {}
            other => panic!("Expected InternalServerError, got {:?}", other),
        }
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error: AppError = sqlx::Error::RowNotFound.into();
        match error {
            AppError::NotFound(_) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_errors_surface_first_message() {
        #[derive(Validate)]
        struct Payload {
            #[validate(length(min = 1, max = 100))]
            name: String,
        }

        let payload = Payload {
            name: String::new(),
        };
        let error: AppError = payload.validate().unwrap_err().into();
        match error {
            AppError::ValidationError(msg) => assert!(msg.contains("name")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
