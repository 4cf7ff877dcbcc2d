use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents a board entity as stored in the database and returned by the API.
///
/// A board is a named container document owned by exactly one user; visibility
/// and deletion are scoped to `owner_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Unique identifier for the board (UUID v4).
    pub id: Uuid,
    /// The display name of the board.
    pub name: String,
    /// An optional description for the board.
    pub description: Option<String>,
    /// Identifier of the user who owns the board.
    pub owner_id: Uuid,
    /// Timestamp of when the board was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update to the board.
    pub updated_at: DateTime<Utc>,
}

/// Input structure for creating a board.
/// Contains validation rules for its fields.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct BoardInput {
    /// The name of the board. Must be between 1 and 100 characters.
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// An optional description for the board.
    pub description: Option<String>,
}

impl Board {
    /// Creates a new `Board` from `BoardInput` and the owner's id.
    /// Sets `created_at` and `updated_at` to the current time and `id` to a
    /// new UUID.
    pub fn new(input: BoardInput, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let input = BoardInput {
            name: "Untitled Board".to_string(),
            description: Some("".to_string()),
        };

        let owner_id = Uuid::new_v4();
        let board = Board::new(input, owner_id);
        assert_eq!(board.name, "Untitled Board");
        assert_eq!(board.owner_id, owner_id);
        assert_eq!(board.created_at, board.updated_at);
    }

    #[test]
    fn test_board_input_validation() {
        let valid_input = BoardInput {
            name: "Inspiration".to_string(),
            description: None,
        };
        assert!(valid_input.validate().is_ok());

        let empty_name = BoardInput {
            name: "".to_string(),
            description: Some("Mood board".to_string()),
        };
        assert!(empty_name.validate().is_err(), "empty name must fail");

        let long_name = BoardInput {
            name: "a".repeat(101),
            description: None,
        };
        assert!(long_name.validate().is_err(), "name over 100 chars must fail");
    }

    #[test]
    fn test_board_serializes_camel_case() {
        let board = Board::new(
            BoardInput {
                name: "X".to_string(),
                description: Some("Y".to_string()),
            },
            Uuid::new_v4(),
        );
        let json = serde_json::to_value(&board).unwrap();
        assert!(json.get("ownerId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("owner_id").is_none());
    }
}
