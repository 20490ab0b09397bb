//! Watch mode against a mocked game client

use std::fs;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bitburner_sync::config::ServerAddress;
use bitburner_sync::watch::watch;
use bitburner_sync::{BitburnerClient, SyncConfig};
use serde_json::Value;
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const WAIT: Duration = Duration::from_secs(10);

/// `(filename, code)` of a request body
fn body_of(request: &Request) -> (String, Option<String>) {
    let body: Value = serde_json::from_slice(&request.body).unwrap();
    (
        body["filename"].as_str().unwrap().to_string(),
        body["code"].as_str().map(ToString::to_string),
    )
}

async fn wait_for_request<F>(server: &MockServer, verb: &str, check: F)
where
    F: Fn(&str, Option<&str>) -> bool,
{
    let deadline = tokio::time::Instant::now() + WAIT;

    loop {
        let found = server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .filter(|r| r.method.as_str() == verb)
            .map(body_of)
            .any(|(filename, code)| check(&filename, code.as_deref()));

        if found {
            return;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "no matching {verb} request within {WAIT:?}"
        );
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_watch_uploads_changes_and_deletes_removals() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    fs::write(root.join("a.js"), "a").unwrap();

    let server = MockServer::start().await;
    for verb in ["POST", "DELETE"] {
        Mock::given(method(verb))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
    }

    let addr = server.address();
    let config = SyncConfig::new(&root, "secret")
        .with_allow_delete(true)
        .with_server(ServerAddress::new(addr.ip().to_string(), addr.port()));
    let client = BitburnerClient::new(&config.server, &config.auth_token).unwrap();
    let task = tokio::spawn(async move { watch(&config, &client).await });

    // Existing scripts are uploaded on startup
    let initial = STANDARD.encode("a");
    wait_for_request(&server, "POST", |name, code| {
        name == "a.js" && code == Some(initial.as_str())
    })
    .await;

    // A directory with a script extension is not uploaded
    fs::create_dir(root.join("dir.js")).unwrap();

    fs::write(root.join("a.js"), "updated").unwrap();
    let updated = STANDARD.encode("updated");
    wait_for_request(&server, "POST", |name, code| {
        name == "a.js" && code == Some(updated.as_str())
    })
    .await;

    fs::write(root.join("c.js"), "c").unwrap();
    wait_for_request(&server, "POST", |name, _| name == "c.js").await;

    fs::remove_file(root.join("c.js")).unwrap();
    wait_for_request(&server, "DELETE", |name, _| name == "c.js").await;

    assert!(!task.is_finished());
    task.abort();

    let posted: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.method.as_str() == "POST")
        .map(|r| body_of(r).0)
        .collect();
    assert!(!posted.iter().any(|name| name == "dir.js"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_watch_ignores_removals_without_allow_delete() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    fs::write(root.join("keep.js"), "k").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let addr = server.address();
    let config = SyncConfig::new(&root, "secret")
        .with_server(ServerAddress::new(addr.ip().to_string(), addr.port()));
    let client = BitburnerClient::new(&config.server, &config.auth_token).unwrap();
    let task = tokio::spawn(async move { watch(&config, &client).await });

    wait_for_request(&server, "POST", |name, _| name == "keep.js").await;

    fs::remove_file(root.join("keep.js")).unwrap();
    fs::write(root.join("marker.js"), "m").unwrap();
    wait_for_request(&server, "POST", |name, _| name == "marker.js").await;

    task.abort();

    let deletes = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.method.as_str() == "DELETE")
        .count();
    assert_eq!(deletes, 0);
}
