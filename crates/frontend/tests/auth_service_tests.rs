//! Auth service integration tests against a mock identity backend.
//!
//! These run natively; the memory storage backend stands in for
//! localStorage.

#![cfg(not(target_arch = "wasm32"))]

use playforge_frontend::storage::StorageBackend;
use playforge_frontend::AuthService;
use playforge_http::types::{LoginRequest, SignupRequest};
use playforge_http::{ClientError, StoreClient};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> AuthService {
    let client = StoreClient::new(server.uri()).unwrap();
    AuthService::with_parts(client, StorageBackend::memory())
}

fn auth_body(token: &str) -> serde_json::Value {
    json!({
        "token": token,
        "tokenType": "Bearer",
        "userId": 1,
        "username": "alice",
        "email": "a@x.com",
        "role": "user"
    })
}

#[tokio::test]
async fn signup_persists_token_and_profile_before_returning() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("abc")))
        .mount(&server)
        .await;

    let auth = service_for(&server);
    let request = SignupRequest {
        username: "alice".to_string(),
        email: "a@x.com".to_string(),
        password: "p".to_string(),
        country: None,
    };

    let response = auth.signup(request).await.unwrap();

    assert_eq!(response.token, "abc");
    assert_eq!(auth.tokens().get(), Some("abc".to_string()));
    let profile = auth.cached_profile().expect("profile cached at signup");
    assert_eq!(profile.user_id, 1);
    assert_eq!(profile.username, "alice");
    assert!(auth.is_authenticated());
}

#[tokio::test]
async fn login_persists_token_before_returning() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("tok-7")))
        .mount(&server)
        .await;

    let auth = service_for(&server);
    let request = LoginRequest {
        username_or_email: "alice".to_string(),
        password: "p".to_string(),
    };

    auth.login(request).await.unwrap();
    assert_eq!(auth.tokens().get(), Some("tok-7".to_string()));
}

#[tokio::test]
async fn failed_login_leaves_token_slot_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid credentials"
        })))
        .mount(&server)
        .await;

    let auth = service_for(&server);
    // Whatever the slot held before the call stays put
    auth.tokens().set("pre-existing");

    let request = LoginRequest {
        username_or_email: "alice".to_string(),
        password: "wrong".to_string(),
    };

    let result = auth.login(request).await;
    match result {
        Err(ClientError::AuthenticationFailed(message)) => {
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected AuthenticationFailed, got {other:?}"),
    }
    assert_eq!(auth.tokens().get(), Some("pre-existing".to_string()));
}

#[tokio::test]
async fn notify_logout_swallows_server_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let auth = service_for(&server);
    auth.tokens().set("abc");

    let revoked = auth.sign_out_local();
    assert_eq!(auth.tokens().get(), None);

    // Completes without error even though the server said 500
    auth.notify_logout(revoked).await;
    assert_eq!(auth.tokens().get(), None);
}

#[tokio::test]
async fn notify_logout_presents_the_revoked_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let auth = service_for(&server);
    auth.tokens().set("abc");

    let revoked = auth.sign_out_local();
    auth.notify_logout(revoked).await;
}

#[tokio::test]
async fn is_authenticated_never_touches_the_network() {
    // No server at all; a presence check must still work
    let client = StoreClient::new("http://127.0.0.1:9").unwrap();
    let auth = AuthService::with_parts(client, StorageBackend::memory());

    assert!(!auth.is_authenticated());
    auth.tokens().set("abc");
    assert!(auth.is_authenticated());
}
