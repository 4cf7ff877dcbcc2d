pub mod board;
pub mod user;

pub use board::{Board, BoardInput};
pub use user::{User, UserRecord};
