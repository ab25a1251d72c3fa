// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, the recorded Yahoo profile fixture, and a mocked Yahoo API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `oauth_profiles`

use oauth_profiles::{ProviderConfig, ProviderDescriptor, YahooDescriptor, YahooProvider};
use std::sync::Once;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT_LOGGER: Once = Once::new();

/// Yahoo GUID of the recorded test account
pub const TEST_GUID: &str = "PCSXZCYSWC6XUJNMZKRGWVPHNU";

/// Request token issued by the mock
pub const REQUEST_TOKEN: &str = "hh5s93j4hdidpola";

/// Access token issued by the mock
pub const ACCESS_TOKEN: &str = "nnch734d00sl2jdk";

/// Consumer key from the original test account
pub const CONSUMER_KEY: &str =
    "dj0yJmk9QUlLcTVINlBpdm5VJmQ9WVdrOVUxaE5Za3R0TmpJbWNHbzlOVEUyTmpFME1EWXkmcz1jb25zdW1lcnNlY3JldCZ4PTJm";

/// Consumer secret from the original test account
pub const CONSUMER_SECRET: &str = "95220809156c027c0a10c959a04b099da5510b66";

/// Callback URL registered for the test consumer
pub const CALLBACK_URL: &str = "http://www.google.com/";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Recorded Yahoo profile document
pub fn yahoo_profile_fixture() -> &'static str {
    include_str!("fixtures/yahoo_profile.json")
}

/// GUID document as served by `/v1/me/guid?format=xml`
pub fn guid_document(guid: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<guid xmlns="http://social.yahooapis.com/v1/schema.rng" xmlns:yahoo="http://www.yahooapis.com/v1/base.rng" yahoo:uri="http://social.yahooapis.com/v1/me/guid">
    <value>{guid}</value>
</guid>"#
    )
}

/// Provider configuration with every endpoint on `server`
pub fn mock_config(server: &MockServer) -> ProviderConfig {
    let base = server.uri();
    let mut config = YahooDescriptor.to_config(CONSUMER_KEY, CONSUMER_SECRET, CALLBACK_URL);
    config.request_token_url = format!("{base}/oauth/v2/get_request_token");
    config.authorization_url = format!("{base}/oauth/v2/request_auth");
    config.access_token_url = format!("{base}/oauth/v2/get_token");
    config.api_base_url = format!("{base}/v1");
    config
}

/// Initialized provider talking to `server`
pub fn mock_provider(server: &MockServer) -> YahooProvider {
    use oauth_profiles::OAuthProvider;

    let mut provider = YahooProvider::with_config(mock_config(server));
    provider.init().unwrap();
    provider
}

/// Mount the request-token endpoint
pub async fn mount_request_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/v2/get_request_token"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "oauth_token={REQUEST_TOKEN}&oauth_token_secret=hdhd0244k9j7ao03&oauth_expires_in=3600&oauth_callback_confirmed=true"
        )))
        .mount(server)
        .await;
}

/// Mount the access-token endpoint
pub async fn mount_access_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/v2/get_token"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "oauth_token={ACCESS_TOKEN}&oauth_token_secret=pfkkdhi9sl3r4s00&oauth_expires_in=3600&oauth_session_handle=AKd&oauth_authorization_expires_in=770477963&xoauth_yahoo_guid={TEST_GUID}"
        )))
        .mount(server)
        .await;
}

/// Mount the GUID and profile endpoints serving `profile_body`
pub async fn mount_profile(server: &MockServer, profile_body: &str) {
    Mock::given(method("GET"))
        .and(path("/v1/me/guid"))
        .and(query_param("format", "xml"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_string(guid_document(TEST_GUID)))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/user/{TEST_GUID}/profile")))
        .and(query_param("format", "json"))
        .and(header_exists("authorization"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(profile_body.to_owned()),
        )
        .mount(server)
        .await;
}

/// Mock server with the whole Yahoo flow mounted
pub async fn yahoo_mock_server() -> MockServer {
    init_test_logging();
    let server = MockServer::start().await;
    mount_request_token(&server).await;
    mount_access_token(&server).await;
    mount_profile(&server, yahoo_profile_fixture()).await;
    server
}
