use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::client::session::SessionStore;
use crate::models::{Board, BoardInput};

/// Errors surfaced by the REST client.
#[derive(Debug)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, bad JSON).
    Http(reqwest::Error),
    /// The server answered with a non-success status and an error body.
    Api { status: u16, message: String },
    /// A request payload failed local validation before being sent.
    Validation(String),
    /// A board call was attempted without a stored session token.
    MissingToken,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::Http(e) => write!(f, "HTTP error: {}", e),
            ClientError::Api { status, message } => {
                write!(f, "API error ({}): {}", status, message)
            }
            ClientError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ClientError::MissingToken => write!(f, "No session token stored"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        ClientError::Http(error)
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ClientError::Validation(errors.to_string())
    }
}

/// Wire shape of `GET /api/boards`.
#[derive(Debug, Deserialize)]
struct BoardsResponse {
    boards: Vec<Board>,
}

/// Wire shape of `POST /api/boards`.
#[derive(Debug, Deserialize)]
struct BoardResponse {
    board: Board,
}

/// Wire shape of the error bodies produced by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Thin REST wrapper over the Moodlet API.
///
/// Auth calls persist the returned token into the shared [`SessionStore`];
/// board calls attach it as a bearer header.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Creates a client against `base_url` (e.g. `http://127.0.0.1:3000/api`).
    pub fn new(base_url: impl Into<String>, session: Arc<SessionStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Registers a new account and stores the returned token in the session.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        payload.validate()?;
        let response = self
            .http
            .post(format!("{}/auth/register", self.base_url))
            .json(payload)
            .send()
            .await?;
        let auth: AuthResponse = Self::parse(response).await?;
        self.session.set_token(auth.token.clone());
        Ok(auth)
    }

    /// Logs in and stores the returned token in the session.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ClientError> {
        payload.validate()?;
        let response = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(payload)
            .send()
            .await?;
        let auth: AuthResponse = Self::parse(response).await?;
        self.session.set_token(auth.token.clone());
        Ok(auth)
    }

    /// Removes the stored session token.
    pub fn logout(&self) {
        self.session.clear();
    }

    /// Fetches all boards owned by the authenticated user.
    pub async fn get_boards(&self) -> Result<Vec<Board>, ClientError> {
        let response = self
            .http
            .get(format!("{}/boards", self.base_url))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let body: BoardsResponse = Self::parse(response).await?;
        Ok(body.boards)
    }

    /// Creates a new board and returns it with server-assigned fields.
    pub async fn create_board(&self, input: &BoardInput) -> Result<Board, ClientError> {
        input.validate()?;
        let response = self
            .http
            .post(format!("{}/boards", self.base_url))
            .bearer_auth(self.bearer()?)
            .json(input)
            .send()
            .await?;
        let body: BoardResponse = Self::parse(response).await?;
        Ok(body.board)
    }

    /// Deletes a board by id.
    pub async fn delete_board(&self, board_id: Uuid) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/boards/{}", self.base_url, board_id))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let _: serde_json::Value = Self::parse(response).await?;
        Ok(())
    }

    fn bearer(&self) -> Result<String, ClientError> {
        self.session.token().ok_or(ClientError::MissingToken)
    }

    /// Deserializes a success body, or converts an error status plus its
    /// `{"error": ...}` body into `ClientError::Api`.
    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
