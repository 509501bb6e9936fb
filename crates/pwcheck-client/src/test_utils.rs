//! Mock scoring server for integration testing
//!
//! Serves scripted HTTP/1.1 responses from an in-process tokio listener and
//! records every request it receives. No external service is needed.
//!
//! Replies are consumed in order; once only one reply remains it is reused for
//! every further request. Each connection is handled on its own task, so
//! delayed replies can overlap.
//!
//! # Usage Example
//!
//! ```ignore
//! let server = MockScoringServer::start(vec![
//!     MockReply::json(200, r#"{"score":2,"suggestion":"Great job!"}"#),
//! ])
//! .await;
//! let client = ScoringClient::new(&server.endpoint(), None)?;
//! client.check("Tr0ub4dor&3").await?;
//! assert_eq!(server.request_count(), 1);
//! ```

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use pwcheck_core::prelude::*;
use pwcheck_core::StrengthResult;

use crate::service::ScoreService;

/// One scripted reply
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Respond with a status code and a JSON body
    Json { status: u16, body: String },
    /// Wait before sending the inner reply
    Delayed {
        delay: Duration,
        reply: Box<MockReply>,
    },
    /// Close the connection without responding
    Hangup,
}

impl MockReply {
    pub fn json(status: u16, body: &str) -> Self {
        MockReply::Json {
            status,
            body: body.to_string(),
        }
    }

    pub fn delayed(delay: Duration, reply: MockReply) -> Self {
        MockReply::Delayed {
            delay,
            reply: Box::new(reply),
        }
    }
}

/// A request as seen by the mock server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// In-process HTTP server replaying scripted replies
pub struct MockScoringServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    task: JoinHandle<()>,
}

impl MockScoringServer {
    /// Bind to an ephemeral localhost port and start serving
    pub async fn start(replies: Vec<MockReply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock scoring server");
        let addr = listener
            .local_addr()
            .expect("Failed to read mock server address");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let replies = Arc::new(Mutex::new(VecDeque::from(replies)));

        let requests_clone = requests.clone();
        let task = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let requests = requests_clone.clone();
                let replies = replies.clone();
                tokio::spawn(async move {
                    handle_connection(stream, requests, replies).await;
                });
            }
        });

        Self {
            addr,
            requests,
            task,
        }
    }

    /// Full URL of the scoring endpoint on this server
    pub fn endpoint(&self) -> String {
        format!("http://{}/check-password", self.addr)
    }

    /// Snapshot of the requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }
}

impl Drop for MockScoringServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn next_reply(replies: &Mutex<VecDeque<MockReply>>) -> MockReply {
    let mut replies = match replies.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if replies.len() > 1 {
        replies.pop_front().unwrap_or(MockReply::Hangup)
    } else {
        replies.front().cloned().unwrap_or(MockReply::Hangup)
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    replies: Arc<Mutex<VecDeque<MockReply>>>,
) {
    let Some(request) = read_request(&mut stream).await else {
        return;
    };
    if let Ok(mut log) = requests.lock() {
        log.push(request);
    }

    let mut reply = next_reply(&replies);
    loop {
        match reply {
            MockReply::Delayed { delay, reply: inner } => {
                tokio::time::sleep(delay).await;
                reply = *inner;
            }
            MockReply::Hangup => return,
            MockReply::Json { status, body } => {
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason_phrase(status),
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
                return;
            }
        }
    }
}

async fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_header_end(&buf) {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let mut content_length = 0usize;
    let mut content_type = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim();
            match name.as_str() {
                "content-length" => content_length = value.parse().unwrap_or(0),
                "content-type" => content_type = Some(value.to_string()),
                _ => {}
            }
        }
    }

    let body_start = header_end + 4;
    while buf.len() < body_start + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body_end = (body_start + content_length).min(buf.len());
    let body = String::from_utf8_lossy(&buf[body_start..body_end]).to_string();

    Some(RecordedRequest {
        method,
        path,
        content_type,
        body,
    })
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

// ─────────────────────────────────────────────────────────────────
// Scripted in-memory service
// ─────────────────────────────────────────────────────────────────

/// In-memory [`ScoreService`] that answers from a fixed script.
///
/// Records every password it is asked about. Useful for controller tests that
/// should not touch the network at all.
#[derive(Debug, Clone)]
pub struct ScriptedScoreService {
    outcome: std::result::Result<StrengthResult, String>,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedScoreService {
    /// Always succeed with `result`
    pub fn succeeding(result: StrengthResult) -> Self {
        Self {
            outcome: Ok(result),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always fail with a network error carrying `message`
    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sleep before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Passwords received, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl ScoreService for ScriptedScoreService {
    async fn check(&self, password: &str) -> Result<StrengthResult> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(password.to_string());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.outcome {
            Ok(result) => Ok(result.clone()),
            Err(message) => Err(Error::network(message.clone())),
        }
    }
}
