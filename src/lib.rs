//! Phonebook REST Service Library

pub mod config;
pub mod domain;
pub mod http;
pub mod observability;
pub mod store;

pub use config::ServiceConfig;
pub use domain::{Contact, ContactId};
pub use http::HttpServer;
