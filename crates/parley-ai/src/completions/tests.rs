//! Tests for request building, response parsing, and the HTTP round trip
//! against an in-process server.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use super::client::parse_response;
use super::*;
use crate::{AiError, CompletionClient, Message};

const OK_BODY: &str = r#"{
  "id": "cmpl-1",
  "object": "chat.completion",
  "model": "mistral-large-latest",
  "choices": [
    {"index": 0, "message": {"role": "assistant", "content": "What are ye doin' in my swamp?"}, "finish_reason": "stop"}
  ],
  "usage": {"prompt_tokens": 12, "completion_tokens": 9, "total_tokens": 21}
}"#;

fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Read one full HTTP request (headers plus `Content-Length` body).
async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = find_header_end(&buf) {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let len = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Serve a single canned response; the handle yields the raw request.
async fn serve_once(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;
        request
    });
    (format!("http://{addr}/v1/chat/completions"), handle)
}

/// Build a client that ignores any proxy settings in the environment.
fn client_with_timeout(endpoint: &str, timeout: Duration) -> CompletionsClient {
    let config = CompletionConfig::new("test-token")
        .with_endpoint(endpoint)
        .with_timeout(timeout);
    let http = reqwest::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .unwrap();
    CompletionsClient::with_http_client(config, http)
}

fn client_for(endpoint: &str) -> CompletionsClient {
    client_with_timeout(endpoint, Duration::from_secs(5))
}

fn window() -> Vec<Message> {
    vec![Message::system("You are Shrek."), Message::user("Hello")]
}

#[test]
fn request_body_has_fixed_sampling_parameters() {
    let client = client_for("http://localhost/unused");
    let messages = window();
    let body = serde_json::to_value(client.build_request_body(&messages)).unwrap();

    assert_eq!(body["model"], "mistral-large-latest");
    assert_eq!(body["max_tokens"], 1024);
    assert_eq!(body["temperature"], 0.7);
    assert_eq!(body["top_p"], 1.0);
    assert_eq!(body["stream"], false);
    assert_eq!(
        body["messages"],
        serde_json::json!([
            {"role": "system", "content": "You are Shrek."},
            {"role": "user", "content": "Hello"}
        ])
    );
}

#[test]
fn parse_response_takes_first_choice() {
    assert_eq!(
        parse_response(OK_BODY).unwrap(),
        "What are ye doin' in my swamp?"
    );
}

#[test]
fn parse_response_rejects_missing_fields() {
    for body in [
        "{}",
        r#"{"choices": []}"#,
        r#"{"choices": [{"message": {}}]}"#,
        r#"{"choices": [{"message": {"content": null}}]}"#,
        r#"{"choices": [{"text": "legacy"}]}"#,
        "not json at all",
    ] {
        assert!(
            matches!(parse_response(body), Err(AiError::InvalidResponse)),
            "body {body:?} should be rejected"
        );
    }
}

#[test]
fn new_config_uses_stock_defaults() {
    use parley_common::defaults;

    let config = CompletionConfig::new("t");
    assert_eq!(config.endpoint, defaults::DEFAULT_ENDPOINT);
    assert_eq!(config.model, defaults::DEFAULT_MODEL);
    assert_eq!(config.max_tokens, defaults::DEFAULT_MAX_TOKENS);
    assert_eq!(
        config.timeout,
        Duration::from_secs(u64::from(defaults::DEFAULT_TIMEOUT_SECS))
    );
}

#[test]
fn config_debug_redacts_token() {
    let config = CompletionConfig::new("super-secret");
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("[REDACTED]"));
}

#[test]
fn blank_token_is_missing_credential() {
    let err = CompletionConfig::from_token("MISTRAL_API_KEY", "  ").unwrap_err();
    assert!(matches!(err, AiError::MissingCredential(ref v) if v == "MISTRAL_API_KEY"));
}

#[test]
fn token_is_trimmed() {
    let config = CompletionConfig::from_token("MISTRAL_API_KEY", " abc123\n").unwrap();
    assert_eq!(config.token, "abc123");
}

#[test]
fn unset_variable_is_missing_credential() {
    let err = CompletionConfig::from_env("PARLEY_TEST_SURELY_UNSET_VARIABLE").unwrap_err();
    assert!(matches!(err, AiError::MissingCredential(_)));
}

#[tokio::test]
async fn successful_round_trip() {
    let (url, server) = serve_once(http_response("200 OK", OK_BODY)).await;
    let client = client_for(&url);

    let reply = client.complete(&window()).await.unwrap();
    assert_eq!(reply, "What are ye doin' in my swamp?");

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /v1/chat/completions"));
    assert!(request
        .to_lowercase()
        .contains("authorization: bearer test-token"));

    let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["stream"], false);
    assert_eq!(json["messages"][0]["role"], "system");
    assert_eq!(json["messages"][1]["content"], "Hello");
}

#[tokio::test]
async fn non_success_status_is_network_error() {
    let (url, server) = serve_once(http_response(
        "401 Unauthorized",
        r#"{"message":"Unauthorized"}"#,
    ))
    .await;
    let client = client_for(&url);

    let err = client.complete(&window()).await.unwrap_err();
    server.await.unwrap();

    match err {
        AiError::Network(msg) => {
            assert!(msg.contains("401"));
            assert!(msg.contains("Unauthorized"));
        }
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let (url, server) =
        serve_once(http_response("200 OK", r#"{"object":"error","detail":"nope"}"#)).await;
    let client = client_for(&url);

    let err = client.complete(&window()).await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, AiError::InvalidResponse));
}

#[tokio::test]
async fn silent_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let _server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let _ = read_request(&mut stream).await;
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let client = client_with_timeout(
        &format!("http://{addr}/v1/chat/completions"),
        Duration::from_millis(200),
    );

    let err = client.complete(&window()).await.unwrap_err();
    assert!(matches!(err, AiError::Timeout), "got {err:?}");
}

#[tokio::test]
async fn built_client_enforces_configured_timeout() {
    // Loopback must bypass any proxy picked up from the environment.
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let _server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let _ = read_request(&mut stream).await;
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let config = CompletionConfig::new("test-token")
        .with_endpoint(format!("http://{addr}/v1/chat/completions"))
        .with_timeout(Duration::from_millis(300));
    let client = CompletionsClient::new(config).unwrap();

    let started = std::time::Instant::now();
    let err = client.complete(&window()).await.unwrap_err();

    assert!(matches!(err, AiError::Timeout), "got {err:?}");
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{addr}/v1/chat/completions"));
    let err = client.complete(&window()).await.unwrap_err();
    assert!(matches!(err, AiError::Network(_)), "got {err:?}");
}
