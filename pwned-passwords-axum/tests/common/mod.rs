//! Shared test servers that impersonate the range API.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tokio::net::TcpListener;

use pwned_passwords::{PwnedConfig, PwnedPasswords};

pub const SAMPLE_PASSWORD: &str = "swordfish";
pub const SAMPLE_SUFFIX: &str = "81DCAADE980555F2CE6755CA425F00658BE";

/// A client pointed at a test endpoint, with a generous timeout.
pub fn test_client(endpoint: String) -> PwnedPasswords {
    PwnedPasswords::new(PwnedConfig {
        api_endpoint: endpoint,
        api_timeout_seconds: 5.0,
        add_padding: true,
    })
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Serve `body` with `status` for every range request; returns the
/// endpoint URL to point a client at.
pub async fn serve_fixed(status: StatusCode, body: &str) -> String {
    let body = body.to_string();
    let app = Router::new().route(
        "/range/{prefix}",
        get(move || {
            let body = body.clone();
            async move { (status, body) }
        }),
    );
    let addr = spawn(app).await;
    format!("http://{addr}/range")
}

/// Like [`serve_fixed`], but counts how many requests arrive.
pub async fn serve_counting(status: StatusCode, body: &str) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let body = body.to_string();
    let app = Router::new().route(
        "/range/{prefix}",
        get(move || {
            let body = body.clone();
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (status, body)
            }
        }),
    );
    let addr = spawn(app).await;
    (format!("http://{addr}/range"), hits)
}

/// An endpoint nothing is listening on, for API-failure tests.
pub async fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/range")
}
