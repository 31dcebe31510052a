//! HTTP surface of the phonebook service.

pub mod access_log;
pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
