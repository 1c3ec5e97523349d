//! HTTP content source against a one-shot local server.

use site_hydrate::content::{ContentSource, HttpSource, load_content};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Serve exactly one request with `status` and `body`. The raw request
/// head arrives on the returned channel.
fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        let _ = tx.send(String::from_utf8_lossy(&head).into_owned());
        let response = format!(
            "HTTP/1.1 {status}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    (format!("http://{addr}/programmes.html"), rx)
}

fn source(page_url: &str) -> HttpSource {
    HttpSource::new(page_url, Duration::from_secs(5)).unwrap()
}

#[test]
fn not_found_yields_empty_document() {
    let (url, _rx) = serve_once("404 Not Found", "");
    let doc = load_content(&source(&url), "data/content.json");
    assert!(doc.is_empty());
}

#[test]
fn document_is_fetched_relative_to_page() {
    let (url, rx) = serve_once(
        "200 OK",
        r#"{"site":{"name":"Riverside Growers"},"legal":{"scio":"SC049876"}}"#,
    );
    let doc = load_content(&source(&url), "data/content.json");
    assert_eq!(doc.site_name(), Some("Riverside Growers"));
    assert_eq!(doc.scio(), Some("SC049876"));

    let request = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(request.starts_with("GET /data/content.json "));
}

#[test]
fn requests_bypass_caches() {
    let (url, rx) = serve_once("200 OK", "{}");
    let fetched = source(&url).fetch("data/content.json").unwrap();
    assert_eq!(fetched.status, 200);

    let request = rx.recv_timeout(Duration::from_secs(5)).unwrap().to_lowercase();
    assert!(request.contains("cache-control: no-store"));
    assert!(request.contains("pragma: no-cache"));
}

#[test]
fn unreachable_server_yields_empty_document() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let doc = load_content(
        &source(&format!("http://{addr}/index.html")),
        "data/content.json",
    );
    assert!(doc.is_empty());
}
