//! Shared utilities for integration tests.

use std::net::SocketAddr;

use starter_gate::{AppState, GateConfig, HttpServer};
use tokio::net::TcpListener;

pub const SESSION_COOKIE: &str = "sb-access-token=test-session";

/// Start the gate on an ephemeral port and return its address.
pub async fn spawn_gate(config: GateConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(AppState::from_config(config).unwrap());

    tokio::spawn(async move {
        let _ = server.run_until(listener, std::future::pending()).await;
    });

    addr
}

/// Client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
