//! The `moodlet` library crate.
//!
//! This crate contains the server-side logic for the Moodlet collaborative
//! board application: authentication, board CRUD, routing configuration, and
//! error handling. It also ships a typed REST client and a reactive board
//! store under [`client`], mirroring the server contract. The main binary
//! (`main.rs`) uses this crate to construct and run the HTTP server.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
