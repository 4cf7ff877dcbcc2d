pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::User;

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{decode_token_unverified, generate_token, verify_token, Claims};

/// Represents the payload for a user login request.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct LoginRequest {
    /// User's email address. Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// User's password. Must be at least 8 characters long.
    #[validate(length(min = 8))]
    pub password: String,
}

/// Represents the payload for a new user registration request.
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Email address for the new account. Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// Password for the new account. Must be at least 8 characters long.
    #[validate(length(min = 8))]
    pub password: String,
    /// Display name for the new account. Between 1 and 100 characters.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Optional avatar URL for the new account.
    pub profile_avatar: Option<String>,
}

/// Response structure after successful authentication (login or registration).
/// Contains the public user projection and the JWT access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user, without the password hash.
    pub user: User,
    /// The JWT (JSON Web Token) for session authentication.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_login_request_validation() {
        let valid_login = LoginRequest {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(valid_login.validate().is_ok());

        let invalid_email_login = LoginRequest {
            email: "testexample.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(invalid_email_login.validate().is_err());

        let short_password_login = LoginRequest {
            email: "test@example.com".to_string(),
            password: "1234567".to_string(),
        };
        assert!(short_password_login.validate().is_err());
    }

    #[test]
    fn test_register_request_validation() {
        let valid_register = RegisterRequest {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
            name: "Test User".to_string(),
            profile_avatar: None,
        };
        assert!(valid_register.validate().is_ok());

        let empty_name_register = RegisterRequest {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
            name: "".to_string(),
            profile_avatar: None,
        };
        assert!(empty_name_register.validate().is_err());

        let long_name_register = RegisterRequest {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
            name: "n".repeat(101),
            profile_avatar: None,
        };
        assert!(long_name_register.validate().is_err());

        let invalid_email_register = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
            name: "Test User".to_string(),
            profile_avatar: None,
        };
        assert!(invalid_email_register.validate().is_err());
    }

    #[test]
    fn test_register_request_accepts_camel_case_avatar() {
        let payload = serde_json::json!({
            "email": "avatar@example.com",
            "password": "password123",
            "name": "Avatar User",
            "profileAvatar": "https://example.com/a.png"
        });
        let request: RegisterRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(
            request.profile_avatar.as_deref(),
            Some("https://example.com/a.png")
        );
    }
}
