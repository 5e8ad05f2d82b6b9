//! Integration tests for the Playforge HTTP client

use playforge_http::client::error::ClientError;
use playforge_http::types::{LoginRequest, SignupRequest};
use playforge_http::StoreClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn signup_request() -> SignupRequest {
    SignupRequest {
        username: "alice".to_string(),
        email: "a@x.com".to_string(),
        password: "p".to_string(),
        country: None,
    }
}

#[tokio::test]
async fn test_client_builder() {
    let client = StoreClient::builder()
        .base_url("http://localhost:8080/")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    // Trailing slash is normalized away
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = StoreClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_signup_returns_issued_token() {
    let mock_server = MockServer::start().await;

    let response_body = json!({
        "token": "abc",
        "tokenType": "Bearer",
        "userId": 1,
        "username": "alice",
        "email": "a@x.com",
        "role": "user"
    });

    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "username": "alice",
            "email": "a@x.com",
            "password": "p"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(mock_server.uri()).unwrap();
    let response = client.signup(&signup_request()).await.unwrap();

    assert_eq!(response.token, "abc");
    assert_eq!(response.token_type, "Bearer");
    assert_eq!(response.user_id, 1);
    assert_eq!(response.username, "alice");
}

#[tokio::test]
async fn test_login_sends_username_or_email_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "usernameOrEmail": "alice",
            "password": "p"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "tokenType": "Bearer",
            "userId": 7,
            "username": "alice",
            "email": "a@x.com",
            "role": "user"
        })))
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(mock_server.uri()).unwrap();
    let request = LoginRequest {
        username_or_email: "alice".to_string(),
        password: "p".to_string(),
    };

    let response = client.login(&request).await.unwrap();
    assert_eq!(response.token, "tok-1");
    assert_eq!(response.user_id, 7);
}

#[tokio::test]
async fn test_login_401_surfaces_body_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "timestamp": "2026-08-29T12:00:00Z",
            "status": 401,
            "error": "Unauthorized",
            "message": "Invalid credentials",
            "path": "/auth/login"
        })))
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(mock_server.uri()).unwrap();
    let request = LoginRequest {
        username_or_email: "alice".to_string(),
        password: "wrong".to_string(),
    };

    let result = client.login(&request).await;
    match result {
        Err(ClientError::AuthenticationFailed(message)) => {
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected AuthenticationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_without_json_body_falls_back_to_status_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(mock_server.uri()).unwrap();
    let result = client.signup(&signup_request()).await;

    match result {
        Err(ClientError::ServerError { status, message }) => {
            assert_eq!(status, 500);
            assert!(!message.is_empty());
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_logout_carries_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(mock_server.uri()).unwrap();
    let result = client.logout(Some("abc")).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_logout_without_token_still_posts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(mock_server.uri()).unwrap();
    assert!(client.logout(None).await.is_ok());
}

#[tokio::test]
async fn test_malformed_success_body_is_a_request_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = StoreClient::new(mock_server.uri()).unwrap();
    let request = LoginRequest {
        username_or_email: "alice".to_string(),
        password: "p".to_string(),
    };

    let result = client.login(&request).await;
    assert!(matches!(result, Err(ClientError::Request(_))));
}
