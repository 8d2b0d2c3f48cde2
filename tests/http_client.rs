//! End-to-end tests for the request pipeline against a local server that
//! speaks just enough HTTP/1.1 to answer one canned response per test.

use krystal_cli::{ConfigStore, Error, Params, RequestClient};
use serde_json::json;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Bind an ephemeral port, answer exactly one request with the given status
/// line and JSON body, and hand back the raw request bytes for assertions.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.expect("read");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).to_string()
    });

    (format!("http://{}", addr), handle)
}

fn store_with_base_url(base_url: &str) -> (TempDir, ConfigStore) {
    let dir = TempDir::new().expect("tempdir");
    let store = ConfigStore::at(dir.path().join("config.json"));
    store.set_base_url(base_url).expect("set base url");
    (dir, store)
}

#[tokio::test]
async fn success_body_passes_through_unchanged() {
    let (base_url, server) = serve_once("200 OK", r#"{"chains":[{"id":1,"name":"Ethereum"}]}"#).await;
    let (_dir, store) = store_with_base_url(&base_url);

    let client = RequestClient::public(&store).expect("client");
    let response = client.get("/v1/chains", None).await.expect("response");

    assert_eq!(response, json!({"chains": [{"id": 1, "name": "Ethereum"}]}));

    let request = server.await.expect("server");
    assert!(request.starts_with("GET /v1/chains HTTP/1.1"));
    // No query string when params are absent.
    assert!(!request.lines().next().unwrap_or_default().contains('?'));
}

#[tokio::test]
async fn params_reach_the_wire_with_omission_rules_applied() {
    let (base_url, server) = serve_once("200 OK", "{}").await;
    let (_dir, store) = store_with_base_url(&base_url);
    store.set_api_key("integration-test-key").expect("set key");

    let client = RequestClient::authenticated(&store).expect("client");
    let params = Params::new()
        .opt("chainId", Some("1"))
        .opt("limit", None::<String>)
        .flag("withIncentives", true);
    client.get("/v1/pools", Some(&params)).await.expect("response");

    let request = server.await.expect("server");
    let request_line = request.lines().next().unwrap_or_default().to_string();
    assert!(request_line.contains("/v1/pools?"));
    assert!(request_line.contains("chainId=1"));
    assert!(request_line.contains("withIncentives=true"));
    assert!(!request_line.contains("limit"));
}

#[tokio::test]
async fn authenticated_client_sends_the_api_key_header() {
    let (base_url, server) = serve_once("200 OK", "{}").await;
    let (_dir, store) = store_with_base_url(&base_url);
    store.set_api_key("integration-test-key").expect("set key");

    let client = RequestClient::authenticated(&store).expect("client");
    client.get("/v1/positions", None).await.expect("response");

    let request = server.await.expect("server").to_ascii_lowercase();
    assert!(request.contains("kc-apikey: integration-test-key"));
}

#[tokio::test]
async fn public_client_sends_no_api_key_header() {
    let (base_url, server) = serve_once("200 OK", "{}").await;
    let (_dir, store) = store_with_base_url(&base_url);
    store.set_api_key("integration-test-key").expect("set key");

    let client = RequestClient::public(&store).expect("client");
    client.get("/v1/chains", None).await.expect("response");

    let request = server.await.expect("server").to_ascii_lowercase();
    assert!(!request.contains("kc-apikey"));
}

#[tokio::test]
async fn missing_api_key_fails_before_any_request() {
    let (_dir, store) = store_with_base_url("http://127.0.0.1:1");

    let client = RequestClient::authenticated(&store).expect("constructible without a key");
    let err = client.get("/v1/positions", None).await.expect_err("must fail");

    match err {
        Error::Auth(message) => assert!(message.contains("krystal login")),
        other => panic!("expected Auth error, got: {:?}", other),
    }
}

#[tokio::test]
async fn http_error_carries_the_body_message() {
    let (base_url, _server) = serve_once(
        "500 Internal Server Error",
        r#"{"message":"internal error"}"#,
    )
    .await;
    let (_dir, store) = store_with_base_url(&base_url);

    let client = RequestClient::public(&store).expect("client");
    let err = client.get("/v1/chains", None).await.expect_err("must fail");

    assert_eq!(err.status_code(), Some(500));
    assert_eq!(err.to_string(), "internal error");
}

#[tokio::test]
async fn http_error_with_unparseable_body_is_generic() {
    let (base_url, _server) = serve_once("404 Not Found", "no such route").await;
    let (_dir, store) = store_with_base_url(&base_url);

    let client = RequestClient::public(&store).expect("client");
    let err = client.get("/v1/chains/999", None).await.expect_err("must fail");

    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.to_string(), "HTTP 404");
}

#[tokio::test]
async fn transport_failure_has_no_status_code() {
    // Reserve a port, then close it so the connection is refused.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let (_dir, store) = store_with_base_url(&format!("http://{}", addr));
    let client = RequestClient::public(&store).expect("client");
    let err = client.get("/v1/chains", None).await.expect_err("must fail");

    assert_eq!(err.status_code(), None);
    assert!(matches!(err, Error::Transport(_)));
}
