use std::sync::{Arc, Mutex, PoisonError};

use uuid::Uuid;

use crate::client::service::ApiClient;
use crate::models::{Board, BoardInput};

/// Snapshot of the board list plus the shared loading/error flags.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    pub boards: Vec<Board>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Reactive store for the board list.
///
/// Mirrors the server contract with three asynchronous operations. Server
/// error detail is discarded in favor of fixed messages. Operations are not
/// mutually exclusive: two concurrent calls race on the shared
/// `loading`/`error` flags and whichever resolves last wins. The internal
/// lock is only held while mutating state, never across an await.
pub struct BoardStore {
    client: Arc<ApiClient>,
    state: Mutex<BoardState>,
}

impl BoardStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: Mutex::new(BoardState::default()),
        }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> BoardState {
        self.lock().clone()
    }

    /// Replaces the board list with the server's copy.
    pub async fn fetch_boards(&self) {
        self.update(|state| state.loading = true);
        match self.client.get_boards().await {
            Ok(boards) => self.update(|state| {
                state.boards = boards;
                state.loading = false;
                state.error = None;
            }),
            Err(_) => self.update(|state| {
                state.error = Some("Failed to fetch boards".to_string());
                state.loading = false;
            }),
        }
    }

    /// Creates a board and appends it to the list, returning it to the caller.
    /// Returns `None` on failure.
    pub async fn create_board(&self, input: BoardInput) -> Option<Board> {
        self.update(|state| state.loading = true);
        match self.client.create_board(&input).await {
            Ok(board) => {
                self.update(|state| {
                    state.boards.push(board.clone());
                    state.loading = false;
                    state.error = None;
                });
                Some(board)
            }
            Err(_) => {
                self.update(|state| {
                    state.error = Some("Failed to create board".to_string());
                    state.loading = false;
                });
                None
            }
        }
    }

    /// Deletes a board and removes it from the list by id.
    ///
    /// Nothing is removed optimistically, so a failure leaves the list
    /// unchanged.
    pub async fn delete_board(&self, board_id: Uuid) {
        self.update(|state| state.loading = true);
        match self.client.delete_board(board_id).await {
            Ok(()) => self.update(|state| {
                state.boards.retain(|board| board.id != board_id);
                state.loading = false;
                state.error = None;
            }),
            Err(_) => self.update(|state| {
                state.error = Some("Failed to delete board".to_string());
                state.loading = false;
            }),
        }
    }

    fn update(&self, mutate: impl FnOnce(&mut BoardState)) {
        mutate(&mut self.lock());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
