//! Exercises [`ReqwestClient`] against a throwaway HTTP server on localhost.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use hallen_fetch::error::ErrorKind;
use hallen_fetch::{ClientOptions, HttpClient, ReqwestClient};

/// Serves exactly one request with `status` and `body`, returning the request
/// line and headers it received.
fn serve_once(status: &'static str, body: &'static str) -> (SocketAddr, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut head = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end().to_string();
            if line.is_empty() {
                break;
            }
            head.push(line);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        head
    });
    (addr, handle)
}

fn client() -> ReqwestClient {
    ReqwestClient::new(&ClientOptions {
        user_agent: "hallen-test/1.0".to_string(),
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[test]
fn returns_status_and_body() {
    let (addr, server) = serve_once("200 OK", "<h1>Hallo</h1>");
    let response = client().get(&format!("http://{addr}/suchergebnis-detail/medium/T1.html")).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, "<h1>Hallo</h1>");

    let head = server.join().unwrap();
    assert_eq!(head[0], "GET /suchergebnis-detail/medium/T1.html HTTP/1.1");
    assert!(head.iter().any(|h| h.eq_ignore_ascii_case("user-agent: hallen-test/1.0")));
}

#[test]
fn error_status_is_not_a_transport_error() {
    let (addr, server) = serve_once("404 Not Found", "nope");
    let response = client().get(&format!("http://{addr}/missing.html")).unwrap();
    assert_eq!(response.status, 404);
    assert!(!response.is_success());
    server.join().unwrap();
}

#[test]
fn refused_connection_is_network_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let url = format!("http://{addr}/gone.html");
    let err = client().get(&url).unwrap_err();
    assert_eq!(*err, ErrorKind::Network(url));
    assert!(err.is_retryable());
}
