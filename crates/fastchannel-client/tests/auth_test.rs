//! Tests for the OAuth2 client-credentials token flow: form body on the
//! wire, token storage, error surfacing, and the authenticate-before-call
//! requirement.

use fastchannel_client::credentials::FastchannelCredentials;
use fastchannel_client::http::HttpClient;
use fastchannel_client::http::error::FastchannelHttpError;
use httpmock::prelude::*;
use reqwest::Url;

fn token_json(token: &str, expires_in: u64) -> String {
    format!(r#"{{"access_token":"{token}","expires_in":{expires_in},"token_type":"Bearer"}}"#)
}

fn test_credentials() -> FastchannelCredentials {
    FastchannelCredentials::new("demo-client", "demo-secret", "stock.read")
}

fn server_url(server: &MockServer, path: &str) -> Url {
    Url::parse(&server.url(path)).unwrap()
}

#[test]
fn authenticate_posts_client_credentials_form() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/oauth2/v2.0/token")
            .header("content-type", "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials&scope=stock.read&client_id=demo-client&client_secret=demo-secret");
        then.status(200)
            .header("content-type", "application/json")
            .body(token_json("demo-token", 3600));
    });

    let mut client = HttpClient::new(server_url(&server, "/"), "sub-key");
    client
        .authenticate(server_url(&server, "/oauth2/v2.0/token"), &test_credentials())
        .expect("authentication should succeed");

    token_mock.assert();
    assert_eq!(client.access_token(), Some("demo-token"));
}

#[test]
fn authenticate_surfaces_token_endpoint_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/token");
        then.status(401).body("invalid_client");
    });

    let mut client = HttpClient::new(server_url(&server, "/"), "sub-key");
    let error = client
        .authenticate(server_url(&server, "/token"), &test_credentials())
        .expect_err("authentication should fail");

    match error {
        FastchannelHttpError::HttpError { status, body } => {
            assert_eq!(status, reqwest::StatusCode::UNAUTHORIZED);
            assert_eq!(body, "invalid_client");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(client.access_token(), None);
}

#[test]
fn authenticate_rejects_malformed_token_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/token");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"token_type":"Bearer"}"#);
    });

    let mut client = HttpClient::new(server_url(&server, "/"), "sub-key");
    let error = client
        .authenticate(server_url(&server, "/token"), &test_credentials())
        .expect_err("authentication should fail without an access_token field");

    assert!(matches!(error, FastchannelHttpError::UnknownError(_)));
    assert_eq!(client.access_token(), None);
}

#[test]
fn calls_require_authentication() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/stock-management/v1/stock/32004210");
        then.status(200).body("{}");
    });

    let client = HttpClient::new(server_url(&server, "/"), "sub-key");
    let error = client
        .get("stock-management/v1/stock/32004210")
        .expect_err("unauthenticated call should fail");

    assert!(matches!(error, FastchannelHttpError::MissingAccessToken));
    // The request must not go on the wire at all.
    api_mock.assert_calls(0);
}
