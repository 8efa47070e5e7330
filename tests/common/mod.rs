// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

/// One canned response, matched by the full request target (path + query).
pub struct Route {
    pub target: String,
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Route {
    pub fn json(target: &str, body: &str) -> Self {
        Route {
            target: target.to_string(),
            status: 200,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn png(target: &str, body: Vec<u8>) -> Self {
        Route {
            target: target.to_string(),
            status: 200,
            content_type: "image/png",
            body,
        }
    }
}

pub struct TestServer {
    pub base_url: Url,
    hits: Arc<AtomicUsize>,
}

impl TestServer {
    /// Number of requests the fixture has answered so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn url_for(&self, target: &str) -> String {
        format!("{}{}", self.base_url, target.trim_start_matches('/'))
    }
}

/// Spawn a minimal HTTP/1.1 fixture on an ephemeral local port. Unmatched
/// targets get the GitHub-style 404 body.
pub async fn serve(routes: Vec<Route>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test server");
    let addr = listener.local_addr().expect("no local addr");
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&hits);
    let routes = Arc::new(routes);
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            counter.fetch_add(1, Ordering::SeqCst);

            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap_or(0);
            let head = String::from_utf8_lossy(&buf[..n]).into_owned();
            let target = head.split_whitespace().nth(1).unwrap_or("/").to_string();

            let (status, reason, content_type, body) =
                match routes.iter().find(|r| r.target == target) {
                    Some(r) => (r.status, reason_for(r.status), r.content_type, r.body.clone()),
                    None => (
                        404,
                        "Not Found",
                        "application/json",
                        br#"{"message":"Not Found"}"#.to_vec(),
                    ),
                };

            let header = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                reason,
                content_type,
                body.len()
            );
            let _ = socket.write_all(header.as_bytes()).await;
            let _ = socket.write_all(&body).await;
            let _ = socket.shutdown().await;
        }
    });

    let base_url = Url::parse(&format!("http://{}/", addr)).expect("bad base url");
    TestServer { base_url, hits }
}

fn reason_for(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "",
    }
}

/// The follower-listing target for a username and page, as the client
/// builds it.
pub fn followers_target(username: &str, page: u32) -> String {
    format!("/users/{}/followers?per_page=100&page={}", username, page)
}

/// JSON array of `count` follower records with logins `prefix0..prefixN`.
pub fn followers_json(prefix: &str, count: usize) -> String {
    let records: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"login":"{prefix}{i}","avatar_url":"https://avatars.example/{prefix}{i}.png","id":{i}}}"#
            )
        })
        .collect();
    format!("[{}]", records.join(","))
}

/// A well-formed PNG header followed by junk, enough to pass image sniffing.
pub fn png_bytes() -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    bytes.extend_from_slice(&[0u8; 64]);
    bytes
}
