//! Loopback HTTP responder for adapter tests.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves a single HTTP/1.1 response on a loopback port and returns its URL.
///
/// The body is written in `chunk_size` pieces; writing stops quietly once the
/// client hangs up.
pub async fn serve_once(status: &'static str, body: Vec<u8>, chunk_size: usize) -> String {
    serve_capturing(status, body, chunk_size).await.0
}

/// Declares `declared_len` bytes, sends `body` and hangs up early.
pub async fn serve_truncated(body: Vec<u8>, declared_len: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {declared_len}\r\nContent-Type: image/png\r\nConnection: close\r\n\r\n"
        );
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(&body).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}")
}

/// Like [`serve_once`], also yielding the raw request head once it was read.
pub async fn serve_capturing(
    status: &'static str,
    body: Vec<u8>,
    chunk_size: usize,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return String::new();
        };

        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => return String::from_utf8_lossy(&request).into_owned(),
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let request = String::from_utf8_lossy(&request).into_owned();

        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
            body.len()
        );
        if socket.write_all(head.as_bytes()).await.is_err() {
            return request;
        }
        for chunk in body.chunks(chunk_size) {
            if socket.write_all(chunk).await.is_err() {
                return request;
            }
        }
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{addr}"), handle)
}
