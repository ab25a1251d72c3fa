// ABOUTME: OAuth consumer configuration for login providers
// ABOUTME: Loads Yahoo consumer key, secret, and callback URL from the environment with diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use oauth_profiles_core::constants::oauth_providers;
use oauth_profiles_providers::{ProviderConfig, ProviderDescriptor};
use sha2::{Digest, Sha256};
use std::env;
use std::fmt;
use tracing::{info, warn};

/// Secrets shorter than this are reported as suspicious
const MIN_SECRET_LENGTH: usize = 20;

/// OAuth configuration for every supported provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OAuthConfig {
    /// Yahoo consumer configuration
    pub yahoo: OAuthProviderConfig,
}

impl OAuthConfig {
    /// Load OAuth configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            yahoo: OAuthProviderConfig::load_yahoo(),
        }
    }
}

/// Consumer credentials for one provider
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OAuthProviderConfig {
    /// OAuth consumer key
    pub consumer_key: Option<String>,
    /// OAuth consumer secret
    pub consumer_secret: Option<String>,
    /// Callback URL the provider redirects to
    pub callback_url: Option<String>,
    /// Enable this provider
    pub enabled: bool,
}

impl OAuthProviderConfig {
    /// Compute SHA256 fingerprint of consumer secret for debugging (first 8 hex chars)
    /// This allows comparing secrets without logging actual values
    #[must_use]
    pub fn secret_fingerprint(&self) -> Option<String> {
        self.consumer_secret.as_ref().map(|secret| {
            let mut hasher = Sha256::new();
            hasher.update(secret.as_bytes());
            let result = hasher.finalize();
            format!("{result:x}").chars().take(8).collect()
        })
    }

    /// Validate consumer credentials and log diagnostics
    /// Returns true if credentials appear valid, false otherwise
    pub fn validate_and_log(&self, provider_name: &str) -> bool {
        if !self.enabled {
            info!("OAuth provider {provider_name} is disabled");
            return true; // Disabled is valid state
        }

        let Some(consumer_key) = non_empty(self.consumer_key.as_deref()) else {
            warn!("OAuth provider {provider_name}: consumer_key is missing or empty");
            return false;
        };

        let Some(consumer_secret) = non_empty(self.consumer_secret.as_deref()) else {
            warn!("OAuth provider {provider_name}: consumer_secret is missing or empty");
            return false;
        };

        let fingerprint = self
            .secret_fingerprint()
            .unwrap_or_else(|| "none".to_owned());
        info!(
            "OAuth provider {provider_name}: enabled=true, consumer_key={consumer_key}, \
             secret_length={}, secret_fingerprint={fingerprint}",
            consumer_secret.len()
        );

        if consumer_secret.len() < MIN_SECRET_LENGTH {
            warn!(
                "OAuth provider {provider_name}: consumer_secret is unusually short ({} chars) - \
                 this may indicate a configuration error",
                consumer_secret.len()
            );
            return false;
        }
        true
    }

    /// Load Yahoo OAuth configuration from environment
    ///
    /// `YAHOO_ENABLED` overrides the default, which is enabled when both key
    /// and secret are set.
    #[must_use]
    pub fn load_yahoo() -> Self {
        Self::load("YAHOO", oauth_providers::YAHOO)
    }

    fn load(prefix: &str, provider_name: &str) -> Self {
        let base_url = env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8081".to_owned());
        let consumer_key = env::var(format!("{prefix}_CONSUMER_KEY")).ok();
        let consumer_secret = env::var(format!("{prefix}_CONSUMER_SECRET")).ok();
        let enabled = env::var(format!("{prefix}_ENABLED")).map_or_else(
            |_| consumer_key.is_some() && consumer_secret.is_some(),
            |value| matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1"),
        );

        Self {
            consumer_key,
            consumer_secret,
            callback_url: Some(
                env::var(format!("{prefix}_CALLBACK_URL"))
                    .unwrap_or_else(|_| format!("{base_url}/auth/{provider_name}/callback")),
            ),
            enabled,
        }
    }

    /// Provider configuration using the descriptor's endpoints.
    ///
    /// Missing values become empty strings, which the provider rejects at
    /// `init`.
    #[must_use]
    pub fn into_provider_config(self, descriptor: &dyn ProviderDescriptor) -> ProviderConfig {
        descriptor.to_config(
            self.consumer_key.as_deref().unwrap_or_default(),
            self.consumer_secret.as_deref().unwrap_or_default(),
            self.callback_url.as_deref().unwrap_or_default(),
        )
    }
}

impl fmt::Debug for OAuthProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthProviderConfig")
            .field("consumer_key", &self.consumer_key)
            .field(
                "consumer_secret",
                &self.consumer_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("callback_url", &self.callback_url)
            .field("enabled", &self.enabled)
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
