// ABOUTME: Tests for environment-based configuration of providers, HTTP client, and logging
// ABOUTME: Mutates process environment, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use oauth_profiles::constants::oauth_providers;
use oauth_profiles::logging::{LogFormat, LoggingConfig, DEFAULT_SERVICE_NAME};
use oauth_profiles::{
    CallbackParameters, ClientConfig, HttpClientConfig, OAuthProviderConfig, ProviderError,
    YahooDescriptor,
};
use serial_test::serial;
use std::env;

const MANAGED_VARS: &[&str] = &[
    "BASE_URL",
    "YAHOO_CONSUMER_KEY",
    "YAHOO_CONSUMER_SECRET",
    "YAHOO_CALLBACK_URL",
    "YAHOO_ENABLED",
    "HTTP_CLIENT_TIMEOUT_SECS",
    "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
];

fn clear_env() {
    for name in MANAGED_VARS {
        env::remove_var(name);
    }
}

fn set_yahoo_credentials() {
    env::set_var("YAHOO_CONSUMER_KEY", common::CONSUMER_KEY);
    env::set_var("YAHOO_CONSUMER_SECRET", common::CONSUMER_SECRET);
}

#[test]
#[serial]
fn test_load_yahoo_from_env() {
    clear_env();
    set_yahoo_credentials();
    env::set_var("YAHOO_CALLBACK_URL", common::CALLBACK_URL);

    let config = OAuthProviderConfig::load_yahoo();
    assert_eq!(config.consumer_key.as_deref(), Some(common::CONSUMER_KEY));
    assert_eq!(config.consumer_secret.as_deref(), Some(common::CONSUMER_SECRET));
    assert_eq!(config.callback_url.as_deref(), Some(common::CALLBACK_URL));
    assert!(config.enabled);
    assert!(config.validate_and_log("yahoo"));

    let provider_config = config.into_provider_config(&YahooDescriptor);
    assert_eq!(provider_config.name, "yahoo");
    assert_eq!(provider_config.callback_url, common::CALLBACK_URL);
    assert!(provider_config.validate().is_ok());
    clear_env();
}

#[test]
#[serial]
fn test_callback_url_defaults_to_base_url() {
    clear_env();
    env::set_var("BASE_URL", "https://app.example.com");

    let config = OAuthProviderConfig::load_yahoo();
    assert_eq!(
        config.callback_url.as_deref(),
        Some("https://app.example.com/auth/yahoo/callback")
    );
    assert!(!config.enabled);
    clear_env();
}

#[test]
#[serial]
fn test_enabled_flag_overrides_credentials() {
    clear_env();
    set_yahoo_credentials();
    env::set_var("YAHOO_ENABLED", "false");
    assert!(!OAuthProviderConfig::load_yahoo().enabled);

    env::remove_var("YAHOO_CONSUMER_SECRET");
    env::set_var("YAHOO_ENABLED", "true");
    let config = OAuthProviderConfig::load_yahoo();
    assert!(config.enabled);
    assert!(!config.validate_and_log("yahoo"));
    clear_env();
}

#[test]
#[serial]
fn test_http_client_config_from_env() {
    clear_env();
    assert_eq!(HttpClientConfig::from_env(), HttpClientConfig::default());

    env::set_var("HTTP_CLIENT_TIMEOUT_SECS", "5");
    env::set_var("HTTP_CLIENT_CONNECT_TIMEOUT_SECS", "not-a-number");
    let config = HttpClientConfig::from_env();
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.connect_timeout_secs, 10);
    clear_env();
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
    assert!(!config.include_location);

    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "JSON");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "login-gateway");
    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);
    assert_eq!(config.service_name, "login-gateway");
    clear_env();
}

#[test]
#[serial]
fn test_build_registry_from_env() {
    clear_env();
    set_yahoo_credentials();
    env::set_var("YAHOO_CALLBACK_URL", common::CALLBACK_URL);

    let registry = ClientConfig::from_env().build_registry().unwrap();
    assert_eq!(registry.supported_providers(), oauth_providers::ALL);
    let yahoo = registry.find("yahoo").unwrap();
    assert!(yahoo.is_initialized());
    assert_eq!(
        yahoo.config().callback_url,
        "http://www.google.com/?provider=yahoo"
    );
    clear_env();
}

#[test]
#[serial]
fn test_registry_from_env_routes_its_own_callbacks() {
    clear_env();
    set_yahoo_credentials();
    env::set_var("BASE_URL", "https://app.example.com");

    let registry = ClientConfig::from_env().build_registry().unwrap();
    let callback_url = registry.find("yahoo").unwrap().config().callback_url.clone();
    assert_eq!(
        callback_url,
        "https://app.example.com/auth/yahoo/callback?provider=yahoo"
    );

    let params =
        CallbackParameters::from_url(&format!("{callback_url}&oauth_token=t&oauth_verifier=v"))
            .unwrap();
    let routed = registry.find_for_callback(&params).unwrap();
    assert_eq!(routed.name(), "yahoo");
    clear_env();
}

#[test]
#[serial]
fn test_build_registry_skips_disabled_provider() {
    clear_env();
    let registry = ClientConfig::from_env().build_registry().unwrap();
    assert!(registry.is_empty());
}

#[test]
#[serial]
fn test_build_registry_rejects_enabled_provider_without_secret() {
    clear_env();
    env::set_var("YAHOO_CONSUMER_KEY", common::CONSUMER_KEY);
    env::set_var("YAHOO_ENABLED", "1");

    let err = ClientConfig::from_env().build_registry().unwrap_err();
    assert!(matches!(err, ProviderError::ConfigurationError { .. }));
    clear_env();
}
