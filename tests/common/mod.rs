//! Shared utilities for integration tests.

use std::sync::Arc;

use phonebook::http::HttpServer;
use phonebook::store::memory::MemoryStore;
use phonebook::store::ContactStore;
use tokio::net::TcpListener;

/// Boot a server backed by a fresh in-memory store on an ephemeral port and
/// return its base URL.
pub async fn spawn_server() -> String {
    spawn_server_with(Arc::new(MemoryStore::new())).await
}

/// Boot a server over an arbitrary store implementation.
pub async fn spawn_server_with(store: Arc<dyn ContactStore>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(store);

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{addr}")
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
