use axum::http::StatusCode;
use axum::{routing::post, Json, Router};

use bkvm::api::{ApiClient, ApiError};
use bkvm::models::Credentials;
use bkvm::session::{AuthStatus, SessionStore, TokenFile, SESSION_TOKEN};

/// Stand-in for the management service, bound to an ephemeral port.
async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn accepting_stub() -> Router {
    Router::new()
        .route(
            "/api/auth/login",
            post(|| async { Json(serde_json::json!({"ok": true, "role": "Admin"})) }),
        )
        .route("/api/auth/logout", post(|| async { StatusCode::OK }))
}

fn rejecting_stub() -> Router {
    Router::new().route(
        "/api/auth/login",
        post(|| async { Json(serde_json::json!({"ok": false})) }),
    )
}

fn broken_logout_stub() -> Router {
    Router::new()
        .route(
            "/api/auth/login",
            post(|| async { Json(serde_json::json!({"ok": true})) }),
        )
        .route(
            "/api/auth/logout",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
}

fn credentials() -> Credentials {
    Credentials {
        username: "admin".to_string(),
        password: "admin".to_string(),
    }
}

#[tokio::test]
async fn test_login_success_sets_and_persists_token() {
    let base_url = spawn_stub(accepting_stub()).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let api = ApiClient::new(&base_url);
    let mut store = SessionStore::restore(TokenFile::new(&path), &api);
    assert!(!store.is_logged());
    assert_eq!(store.status(), AuthStatus::Idle);

    let payload = store.login(&api, &credentials()).await.unwrap();
    assert_eq!(payload.get("ok").and_then(|v| v.as_bool()), Some(true));
    assert!(store.is_logged());
    assert_eq!(store.token(), SESSION_TOKEN);
    assert_eq!(store.status(), AuthStatus::Success);
    // token persisted and mirrored into the API client
    assert_eq!(TokenFile::new(&path).load(), Some(SESSION_TOKEN.to_string()));
    assert_eq!(api.token(), SESSION_TOKEN);
}

#[tokio::test]
async fn test_rejected_login_leaves_token_untouched() {
    let base_url = spawn_stub(rejecting_stub()).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let api = ApiClient::new(&base_url);
    let mut store = SessionStore::restore(TokenFile::new(&path), &api);

    let err = store.login(&api, &credentials()).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));
    assert!(!store.is_logged());
    assert_eq!(store.status(), AuthStatus::Error);
    assert_eq!(TokenFile::new(&path).load(), None);
}

#[tokio::test]
async fn test_network_failure_during_login_propagates() {
    // discard port: nothing listens there
    let api = ApiClient::new("http://127.0.0.1:9");
    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::restore(TokenFile::new(dir.path().join("session.json")), &api);

    let err = store.login(&api, &credentials()).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(store.status(), AuthStatus::Error);
    assert!(!store.is_logged());
}

#[tokio::test]
async fn test_logout_clears_session_even_when_endpoint_fails() {
    let base_url = spawn_stub(broken_logout_stub()).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let api = ApiClient::new(&base_url);
    let mut store = SessionStore::restore(TokenFile::new(&path), &api);
    store.login(&api, &credentials()).await.unwrap();
    assert!(store.is_logged());

    store.logout(&api).await;
    assert!(!store.is_logged());
    assert_eq!(store.status(), AuthStatus::Idle);
    assert_eq!(TokenFile::new(&path).load(), None);
    assert!(api.token().is_empty());
}

#[tokio::test]
async fn test_logout_clears_session_with_no_network_at_all() {
    let api = ApiClient::new("http://127.0.0.1:9");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let storage = TokenFile::new(&path);
    storage.save(SESSION_TOKEN).unwrap();
    let mut store = SessionStore::restore(storage, &api);
    assert!(store.is_logged());

    store.logout(&api).await;
    assert!(!store.is_logged());
    assert_eq!(TokenFile::new(&path).load(), None);
}

#[tokio::test]
async fn test_restore_seeds_session_from_persisted_token() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    TokenFile::new(&path).save(SESSION_TOKEN).unwrap();

    let api = ApiClient::new("http://127.0.0.1:9");
    let store = SessionStore::restore(TokenFile::new(&path), &api);
    assert!(store.is_logged());
    assert_eq!(store.token(), SESSION_TOKEN);
    // the restored token rides along on API requests again
    assert_eq!(api.token(), SESSION_TOKEN);
}
