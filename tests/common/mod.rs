//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;
use swapi_explorer::Fetcher;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Build a fetcher pointed at `base_url` with the given deadline.
pub fn fetcher(base_url: &str, timeout_ms: u64) -> Fetcher {
    Fetcher::builder()
        .base_url(base_url)
        .timeout(Duration::from_millis(timeout_ms))
        .debug(true)
        .build()
        .expect("fetcher should build")
}

/// Start a one-connection HTTP stub that waits `delay` before answering
/// with `status` and `body`. Returns the base URL to point a fetcher at.
pub async fn delayed_stub(delay: Duration, status: u16, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf).await;
                tokio::time::sleep(delay).await;
                let response = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{}/api/", addr)
}

/// An address on which nothing is listening.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub const FILMS_BODY: &str = r#"{"results":[{"title":"A","release_date":"1977-05-25"},{"title":"B","release_date":"1980-05-21"}]}"#;
