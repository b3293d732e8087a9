//! Route group and static file tests.

use std::time::Duration;

use uuid::Uuid;

mod common;

#[tokio::test]
async fn public_status_route() {
    let (running, url) = common::start_server(common::test_config()).await;

    let response = common::client()
        .get(format!("{url}/api/v1/status"))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["status"], "operational");

    running.shutdown(Duration::ZERO).await;
}

#[tokio::test]
async fn private_route_requires_api_key() {
    let mut config = common::test_config();
    config.auth.api_key = "test-key".into();
    let (running, url) = common::start_server(config).await;
    let client = common::client();

    let unauthorized = client
        .get(format!("{url}/api/v1/server/info"))
        .send()
        .await
        .unwrap();
    assert_eq!(unauthorized.status(), 401);

    let wrong_key = client
        .get(format!("{url}/api/v1/server/info"))
        .header("Authorization", "Bearer other-key")
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_key.status(), 401);

    let authorized = client
        .get(format!("{url}/api/v1/server/info"))
        .header("Authorization", "Bearer test-key")
        .send()
        .await
        .unwrap();
    assert_eq!(authorized.status(), 200);

    let body: serde_json::Value = authorized.json().await.unwrap();
    assert_eq!(body["host"], "127.0.0.1");
    assert_eq!(body["static_files"], false);

    running.shutdown(Duration::ZERO).await;
}

#[tokio::test]
async fn openapi_document_served() {
    let (running, url) = common::start_server(common::test_config()).await;

    let response = common::client()
        .get(format!("{url}/api-docs/openapi.json"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let doc: serde_json::Value = response.json().await.unwrap();
    assert!(doc["paths"]["/api/v1/status"].is_object());
    assert!(doc["paths"]["/api/v1/server/info"].is_object());

    running.shutdown(Duration::ZERO).await;
}

#[tokio::test]
async fn static_files_win_their_prefix() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hello.txt"), "static hello").unwrap();

    let mut config = common::test_config();
    config.static_files.prefix = Some("/static".into());
    config.static_files.path = Some(dir.path().to_path_buf());
    let (running, url) = common::start_server(config).await;
    let client = common::client();

    let found = client
        .get(format!("{url}/static/hello.txt"))
        .send()
        .await
        .unwrap();
    assert_eq!(found.status(), 200);
    assert_eq!(found.text().await.unwrap(), "static hello");

    // The mount owns its prefix: misses are file-handler 404s, not API routes.
    let missing = client
        .get(format!("{url}/static/missing.txt"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);

    // API routes still reachable next to the mount.
    let api = client
        .get(format!("{url}/api/v1/status"))
        .send()
        .await
        .unwrap();
    assert_eq!(api.status(), 200);

    running.shutdown(Duration::ZERO).await;
}

#[tokio::test]
async fn no_static_mount_when_half_configured() {
    let mut config = common::test_config();
    config.static_files.prefix = Some("/static".into());
    let (running, url) = common::start_server(config).await;

    let response = common::client()
        .get(format!("{url}/static/hello.txt"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    running.shutdown(Duration::ZERO).await;
}

#[tokio::test]
async fn responses_carry_request_id() {
    let (running, url) = common::start_server(common::test_config()).await;
    let client = common::client();

    let generated = client
        .get(format!("{url}/api/v1/status"))
        .send()
        .await
        .unwrap();
    let id = generated
        .headers()
        .get("x-request-id")
        .expect("response should carry a request id");
    assert!(Uuid::parse_str(id.to_str().unwrap()).is_ok());

    let echoed = client
        .get(format!("{url}/api/v1/status"))
        .header("x-request-id", "test-correlation-id")
        .send()
        .await
        .unwrap();
    assert_eq!(
        echoed.headers().get("x-request-id").unwrap(),
        "test-correlation-id"
    );

    running.shutdown(Duration::ZERO).await;
}
