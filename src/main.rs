//! Phonebook REST service.
//!
//! A minimal contact CRUD API built with Tokio and Axum: list, fetch, add,
//! update, and delete name/number entries backed by a pluggable document
//! store. See `phonebook-seed` for the companion seeding/inspection helper.

use clap::Parser;
use tokio::net::TcpListener;

use phonebook::config::ServiceConfig;
use phonebook::http::HttpServer;
use phonebook::{observability, store};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::init_tracing("phonebook=debug,tower_http=info");

    let config = ServiceConfig::parse();
    config.validate()?;

    tracing::info!(
        bind_address = %config.bind_address,
        store_url = %config.store_url,
        "Configuration loaded"
    );

    let store = store::connect(&config.store_url)?;

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(store);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
