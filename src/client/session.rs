use std::sync::{Mutex, PoisonError};

use crate::auth::decode_token_unverified;

/// Explicit client-side session state: the single auth token handed out at
/// login or registration.
///
/// Constructed once at application start and shared by reference, replacing
/// the browser's implicit `localStorage` slot.
#[derive(Debug, Default)]
pub struct SessionStore {
    token: Mutex<Option<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the token, replacing any previous one.
    pub fn set_token(&self, token: String) {
        *self.lock() = Some(token);
    }

    /// Returns the stored token, if any.
    pub fn token(&self) -> Option<String> {
        self.lock().clone()
    }

    /// Removes the stored token (logout).
    pub fn clear(&self) {
        *self.lock() = None;
    }

    /// Checks whether a token is present and not yet expired.
    ///
    /// The `exp` claim is decoded locally and compared to the current time;
    /// this is a heuristic, not a server round-trip, and is subject to client
    /// clock skew. A token that fails to decode counts as unauthenticated.
    pub fn is_authenticated(&self) -> bool {
        match self.token() {
            Some(token) => match decode_token_unverified(&token) {
                Ok(claims) => {
                    let now = chrono::Utc::now().timestamp();
                    // A token expiring exactly now still counts as valid.
                    claims.exp as i64 >= now
                }
                Err(_) => false,
            },
            None => false,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
