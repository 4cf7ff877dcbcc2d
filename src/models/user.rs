use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Public projection of a user, as returned to clients.
///
/// Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub profile_avatar: Option<String>,
}

/// A full user row as stored in the database.
///
/// Used internally by the auth routes; converted to [`User`] before anything
/// leaves the server.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub profile_avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email,
            name: record.name,
            profile_avatar: record.profile_avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_to_public_projection_drops_hash() {
        let record = UserRecord {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            profile_avatar: None,
            created_at: Utc::now(),
        };

        let user: User = record.clone().into();
        assert_eq!(user.id, record.id);
        assert_eq!(user.email, record.email);
        assert_eq!(user.name, record.name);

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("profileAvatar").is_some());
    }
}
