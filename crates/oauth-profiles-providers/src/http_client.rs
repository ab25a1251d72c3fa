// ABOUTME: HTTP client construction for provider API calls
// ABOUTME: Timeouts and user agent loaded from the environment, client injected into providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, ClientBuilder};
use std::env;
use std::time::Duration;
use tracing::warn;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Timeouts and identification for the provider HTTP client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: concat!("oauth-profiles/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl HttpClientConfig {
    /// Load from `HTTP_CLIENT_TIMEOUT_SECS` and `HTTP_CLIENT_CONNECT_TIMEOUT_SECS`,
    /// keeping defaults for unset or unparsable values
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout_secs: env_secs("HTTP_CLIENT_TIMEOUT_SECS", defaults.timeout_secs),
            connect_timeout_secs: env_secs(
                "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            ),
            user_agent: defaults.user_agent,
        }
    }

    /// Build a pooled client with the configured timeouts
    ///
    /// Falls back to a default client if the TLS backend cannot be set up.
    #[must_use]
    pub fn build_client(&self) -> Client {
        ClientBuilder::new()
            .timeout(Duration::from_secs(self.timeout_secs))
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .user_agent(self.user_agent.clone())
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build configured HTTP client, using defaults: {e}");
                Client::new()
            })
    }
}

fn env_secs(name: &str, default: u64) -> u64 {
    match env::var(name) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid {name}={value:?}, using default {default}s");
            default
        }),
        Err(_) => default,
    }
}
