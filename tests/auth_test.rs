use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header_exists, method, path},
};

use spotirelay::{
    config::Config,
    error::RelayError,
    server::{self, AppState},
    spotify::auth::{build_authorize_url, exchange_code, generate_state_token},
};

// Helper function to create a configuration with full credentials
fn test_config() -> Config {
    Config {
        client_id: Some("test_client_id".to_string()),
        client_secret: Some("test_client_secret".to_string()),
        redirect_uri: Some("http://localhost:3000/callback".to_string()),
        ..Config::default()
    }
}

// Helper function to assemble the full router around a configuration
fn test_app(config: Config) -> Router {
    server::router(AppState {
        config: Arc::new(config),
        http: reqwest::Client::new(),
    })
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn test_generate_state_token() {
    let state = generate_state_token();

    // Should be exactly 16 characters
    assert_eq!(state.len(), 16);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated tokens should be different
    let state2 = generate_state_token();
    assert_ne!(state, state2);
}

#[test]
fn test_build_authorize_url_contains_required_components() {
    let url = build_authorize_url(&test_config()).unwrap();

    // Well-formed against the configured authorization endpoint
    assert!(url.starts_with("https://accounts.spotify.com/authorize?"));

    // The four required query components
    assert!(url.contains("response_type=code"));
    assert!(url.contains("client_id=test_client_id"));
    assert!(url.contains(
        "scope=user-read-private%20user-read-email%20user-top-read%20user-read-recently-played"
    ));

    // Redirect URI must be URL-encoded
    assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcallback"));

    // Anti-forgery state token is embedded
    assert!(url.contains("&state="));
}

#[test]
fn test_build_authorize_url_requires_configuration() {
    // Missing client ID
    let config = Config {
        redirect_uri: Some("http://localhost:3000/callback".to_string()),
        ..Config::default()
    };
    assert!(matches!(
        build_authorize_url(&config),
        Err(RelayError::Configuration(_))
    ));

    // Missing redirect URI
    let config = Config {
        client_id: Some("test_client_id".to_string()),
        ..Config::default()
    };
    assert!(matches!(
        build_authorize_url(&config),
        Err(RelayError::Configuration(_))
    ));
}

#[tokio::test]
async fn test_login_route_returns_auth_url() {
    let app = test_app(test_config());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/auth/login")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let auth_url = body["authUrl"].as_str().unwrap();
    assert!(auth_url.starts_with("https://accounts.spotify.com/authorize?"));
}

#[tokio::test]
async fn test_login_route_without_configuration_is_500() {
    // No credentials configured at all
    let app = test_app(Config::default());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/auth/login")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_callback_requires_code() {
    // Token endpoint that must never be hit
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = Config {
        token_url: format!("{}/api/token", mock_server.uri()),
        ..test_config()
    };

    for payload in [json!({}), json!({ "code": "" })] {
        let app = test_app(config.clone());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/callback")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        // Missing or empty code fails validation without an upstream call
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Authorization code is required");
    }
}

#[tokio::test]
async fn test_callback_exchanges_code_for_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header_exists("authorization"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=test_auth_code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "X",
            "token_type": "Bearer",
            "scope": "user-read-private",
            "expires_in": 3600,
            "refresh_token": "refresh_me"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config {
        token_url: format!("{}/api/token", mock_server.uri()),
        ..test_config()
    };

    let app = test_app(config);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/callback")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "code": "test_auth_code" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // Reply is reshaped to exactly the fields the web client stores
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "access_token": "X",
            "expires_in": 3600,
            "token_type": "Bearer"
        })
    );
}

#[tokio::test]
async fn test_callback_upstream_failure_is_generic_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid authorization code"
        })))
        .mount(&mock_server)
        .await;

    let config = Config {
        token_url: format!("{}/api/token", mock_server.uri()),
        ..test_config()
    };

    let app = test_app(config);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/callback")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "code": "expired_code" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    // Token exchange failures are always 500, never the upstream status
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The upstream error detail must not leak into the reply
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to exchange code for token");
    assert!(!body.to_string().contains("invalid_grant"));
}

#[tokio::test]
async fn test_exchange_code_tolerates_minimal_token_response() {
    let mock_server = MockServer::start().await;

    // Some grant responses omit scope and refresh_token
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "X",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(&mock_server)
        .await;

    let config = Config {
        token_url: format!("{}/api/token", mock_server.uri()),
        ..test_config()
    };

    let client = reqwest::Client::new();
    let token = exchange_code(&client, &config, "test_auth_code")
        .await
        .unwrap();

    assert_eq!(token.access_token, "X");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3600);
    assert_eq!(token.scope, None);
    assert_eq!(token.refresh_token, None);
}
