use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{Board, BoardInput},
};
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Retrieves all boards owned by the authenticated user.
///
/// No explicit ordering is applied; results come back in whatever order the
/// database returns them.
///
/// ## Responses:
/// - `200 OK`: `{"message": ..., "boards": [...]}` with only the caller's boards.
/// - `401 Unauthorized`: If the request lacks a token.
/// - `403 Forbidden`: If the token is invalid or expired.
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[get("")]
pub async fn get_boards(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let boards: Vec<Board> = sqlx::query_as(
        "SELECT id, name, description, owner_id, created_at, updated_at
         FROM boards WHERE owner_id = $1",
    )
    .bind(user.0)
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Boards fetched successfully",
        "boards": boards
    })))
}

/// Creates a new board owned by the authenticated user.
///
/// Board names are not unique; creating the same name twice yields two boards.
///
/// ## Request Body:
/// A JSON object matching [`BoardInput`]:
/// - `name`: The board name, 1 to 100 characters (required).
/// - `description` (optional): A free-form description.
///
/// ## Responses:
/// - `201 Created`: `{"message": ..., "board": {...}}` with server-assigned
///   id and timestamps.
/// - `401 Unauthorized` / `403 Forbidden`: Token missing or invalid.
/// - `422 Unprocessable Entity`: If input validation fails (e.g., empty name).
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[post("")]
pub async fn create_board(
    pool: web::Data<PgPool>,
    board_data: web::Json<BoardInput>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    // Validate input
    board_data.validate()?;

    let board = Board::new(board_data.into_inner(), user.0);

    let created: Board = sqlx::query_as(
        "INSERT INTO boards (id, name, description, owner_id, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, name, description, owner_id, created_at, updated_at",
    )
    .bind(board.id)
    .bind(&board.name)
    .bind(&board.description)
    .bind(board.owner_id)
    .bind(board.created_at)
    .bind(board.updated_at)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Board created successfully",
        "board": created
    })))
}

/// Deletes a board by its ID.
///
/// Only the owner of the board can delete it. A board owned by someone else
/// yields 403 rather than 404; this deliberately distinguishes "exists but
/// not yours" from "does not exist".
///
/// ## Path Parameters:
/// - `id`: The UUID of the board to delete.
///
/// ## Responses:
/// - `200 OK`: `{"message": ..., "board": {"id": ..., "ownerId": ...}}`.
/// - `401 Unauthorized` / `403 Forbidden`: Token missing or invalid, or the
///   board belongs to another user.
/// - `404 Not Found`: If no board with the given ID exists.
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[delete("/{id}")]
pub async fn delete_board(
    pool: web::Data<PgPool>,
    board_id: web::Path<Uuid>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let board_uuid = board_id.into_inner();

    let board: Option<Board> = sqlx::query_as(
        "SELECT id, name, description, owner_id, created_at, updated_at
         FROM boards WHERE id = $1",
    )
    .bind(board_uuid)
    .fetch_optional(&**pool)
    .await?;

    let board = match board {
        None => return Err(AppError::NotFound("No board found".into())),
        Some(board) if board.owner_id != user.0 => {
            return Err(AppError::Forbidden("Board does not belong to user".into()))
        }
        Some(board) => board,
    };

    sqlx::query("DELETE FROM boards WHERE id = $1")
        .bind(board.id)
        .execute(&**pool)
        .await?;

    // The delete response intentionally carries only the id and owner, not the
    // full board.
    Ok(HttpResponse::Ok().json(json!({
        "message": "Board successfully deleted",
        "board": {
            "id": board.id,
            "ownerId": board.owner_id
        }
    })))
}
