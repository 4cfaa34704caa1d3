//! Shared test servers that impersonate the range API.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use tokio::net::TcpListener;

use pwned_passwords::PwnedConfig;

pub const SAMPLE_PASSWORD: &str = "swordfish";
pub const SAMPLE_PREFIX: &str = "4F571";
pub const SAMPLE_SUFFIX: &str = "81DCAADE980555F2CE6755CA425F00658BE";

/// Config pointing at a test server, with a generous timeout.
pub fn test_config(endpoint: String) -> PwnedConfig {
    PwnedConfig {
        api_endpoint: endpoint,
        api_timeout_seconds: 5.0,
        add_padding: true,
    }
}

fn fixed_app(status: StatusCode, body: String) -> Router {
    Router::new().route(
        "/range/{prefix}",
        get(move || {
            let body = body.clone();
            async move { (status, body) }
        }),
    )
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
    let addr = spawn(fixed_app(status, body.to_string())).await;
    format!("http://{addr}/range")
}

/// Like [`serve_fixed`], but also records the request headers of the most
/// recent request for inspection.
pub async fn serve_recording(body: &str) -> (String, Arc<Mutex<Option<HeaderMap>>>) {
    let seen: Arc<Mutex<Option<HeaderMap>>> = Arc::default();
    let recorded = Arc::clone(&seen);
    let body = body.to_string();
    let app = Router::new().route(
        "/range/{prefix}",
        get(move |headers: HeaderMap| {
            let body = body.clone();
            let recorded = Arc::clone(&recorded);
            async move {
                *recorded.lock().unwrap() = Some(headers);
                body
            }
        }),
    );
    let addr = spawn(app).await;
    (format!("http://{addr}/range"), seen)
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

/// Serve `body` only after sleeping for `delay`, to trip client timeouts.
pub async fn serve_slow(delay: Duration, body: &str) -> String {
    let body = body.to_string();
    let app = Router::new().route(
        "/range/{prefix}",
        get(move || {
            let body = body.clone();
            async move {
                tokio::time::sleep(delay).await;
                body
            }
        }),
    );
    let addr = spawn(app).await;
    format!("http://{addr}/range")
}

/// An endpoint nothing is listening on, for transport-failure tests.
pub async fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/range")
}

/// Run a fixed-response server on a background thread with its own
/// runtime, for use from blocking (non-async) tests.
pub fn serve_fixed_blocking(status: StatusCode, body: &str) -> String {
    let body = body.to_string();
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let app = fixed_app(status, body);
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    format!("http://{}/range", rx.recv().unwrap())
}

/// Blocking variant of [`serve_slow`].
pub fn serve_slow_blocking(delay: Duration, body: &str) -> String {
    let body = body.to_string();
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let app = Router::new().route(
                "/range/{prefix}",
                get(move || {
                    let body = body.clone();
                    async move {
                        tokio::time::sleep(delay).await;
                        body
                    }
                }),
            );
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    format!("http://{}/range", rx.recv().unwrap())
}
