//! Typed REST client for the Moodlet API.
//!
//! Mirrors the server contract: [`service::ApiClient`] wraps the HTTP calls,
//! [`session::SessionStore`] holds the bearer token between calls, and
//! [`store::BoardStore`] keeps the board list plus loading/error flags in
//! sync with the server.

pub mod service;
pub mod session;
pub mod store;

pub use service::{ApiClient, ClientError};
pub use session::SessionStore;
pub use store::{BoardState, BoardStore};
