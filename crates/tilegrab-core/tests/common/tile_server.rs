//! Minimal blocking HTTP/1.1 server for fetch integration tests.
//!
//! Serves a fixed name-to-body map from the root path. Unknown names get
//! 404. Optionally rejects requests missing a cookie with 403, and counts
//! every connection so tests can assert that skips stay off the network.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub struct TileServer {
    base_url: String,
    requests: Arc<AtomicUsize>,
}

impl TileServer {
    /// URL for `name` under the server root.
    pub fn url(&self, name: &str) -> String {
        format!("{}{}", self.base_url, name)
    }

    /// Connections answered so far (any status).
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `routes`. The server
/// runs until the process exits.
pub fn start(routes: HashMap<String, Vec<u8>>) -> TileServer {
    start_with_cookie(routes, None)
}

/// Like `start`, but answers 403 unless the request's `Cookie` header
/// contains `required_cookie`.
pub fn start_with_cookie(
    routes: HashMap<String, Vec<u8>>,
    required_cookie: Option<&str>,
) -> TileServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&requests);
    let routes = Arc::new(routes);
    let required = required_cookie.map(str::to_owned);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            counter.fetch_add(1, Ordering::SeqCst);
            let routes = Arc::clone(&routes);
            let required = required.clone();
            thread::spawn(move || handle(stream, &routes, required.as_deref()));
        }
    });
    TileServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Vec<u8>>, required_cookie: Option<&str>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (path, cookie) = parse_request(request);

    if let Some(required) = required_cookie {
        if !cookie.as_deref().unwrap_or("").contains(required) {
            let _ = stream
                .write_all(b"HTTP/1.1 403 Forbidden\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
            return;
        }
    }

    match routes.get(path.trim_start_matches('/')) {
        Some(body) => {
            let header = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(body);
        }
        None => {
            let _ = stream
                .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        }
    }
}

/// Returns (request path, Cookie header value if any).
fn parse_request(request: &str) -> (String, Option<String>) {
    let mut path = String::new();
    let mut cookie = None;
    for (i, line) in request.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if i == 0 {
            path = line.split_whitespace().nth(1).unwrap_or("/").to_string();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("cookie") {
                cookie = Some(value.trim().to_string());
            }
        }
    }
    (path, cookie)
}
