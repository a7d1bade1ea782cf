//! Test doubles shared by the behavioral tests
//!
//! The interesting behavior of this crate is two HTTP exchanges, so the
//! main double is a loopback server that serves exactly one request,
//! records everything the client sent before the blank line, and
//! answers with a canned response.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// What the one-shot server saw before replying.
pub struct SeenRequest {
    /// Raw request head, request line plus headers, without the body
    pub head: String,
}

#[allow(dead_code)] // each test file uses the subset it needs
impl SeenRequest {
    pub fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or("")
    }

    pub fn method(&self) -> &str {
        self.request_line().split_whitespace().next().unwrap_or("")
    }

    /// Request target, e.g. `/update?hostname=h&myip=1.2.3.4`
    pub fn target(&self) -> &str {
        self.request_line().split_whitespace().nth(1).unwrap_or("")
    }

    pub fn path(&self) -> &str {
        self.target().split('?').next().unwrap_or("")
    }

    /// Decoded query pairs, sorted by key for order-insensitive asserts
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = match self.target().split_once('?') {
            Some((_, query)) => query
                .split('&')
                .filter(|p| !p.is_empty())
                .map(|p| match p.split_once('=') {
                    Some((k, v)) => (k.to_string(), v.to_string()),
                    None => (p.to_string(), String::new()),
                })
                .collect(),
            None => Vec::new(),
        };
        pairs.sort();
        pairs
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.eq_ignore_ascii_case(name).then(|| value.trim())
        })
    }

    /// Declared body length; `None` when no content-length header was sent
    pub fn content_length(&self) -> Option<usize> {
        self.header("content-length")?.parse().ok()
    }
}

/// Spawn a server that accepts one connection, records the request
/// head, and answers with `status`/`body`. Returns the base URL and a
/// handle resolving to the recorded request.
pub async fn one_shot_server(
    status: u16,
    reason: &'static str,
    body: &str,
) -> (String, JoinHandle<SeenRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    // 204 responses carry no body, and must not declare one.
    let response = if status == 204 {
        format!("HTTP/1.1 {status} {reason}\r\nconnection: close\r\n\r\n")
    } else {
        format!(
            "HTTP/1.1 {status} {reason}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        )
    };

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept client");

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let head_end = loop {
            let n = stream.read(&mut chunk).await.expect("read request");
            assert!(n > 0, "client closed before sending a full request head");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break end;
            }
        };

        stream
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        stream.shutdown().await.ok();

        SeenRequest {
            head: String::from_utf8_lossy(&buf[..head_end]).into_owned(),
        }
    });

    (format!("http://{addr}"), handle)
}
