// ABOUTME: Environment-based client configuration aggregating HTTP and OAuth settings
// ABOUTME: Builds an initialized provider registry from the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::oauth::OAuthConfig;
#[cfg(feature = "provider-yahoo")]
use crate::registry::callback_url_for;
use crate::registry::ProviderRegistry;
use oauth_profiles_core::constants::oauth_providers;
use oauth_profiles_core::ProviderResult;
use oauth_profiles_providers::HttpClientConfig;
#[cfg(feature = "provider-yahoo")]
use oauth_profiles_providers::{OAuthProvider, YahooDescriptor, YahooProvider};
use reqwest::Client;
#[cfg(feature = "provider-yahoo")]
use tracing::warn;
use tracing::info;

/// Everything needed to stand up the providers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// HTTP client timeouts
    pub http_client: HttpClientConfig,
    /// Consumer credentials per provider
    pub oauth: OAuthConfig,
}

impl ClientConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            http_client: HttpClientConfig::from_env(),
            oauth: OAuthConfig::from_env(),
        };
        info!(
            "Loaded client configuration: timeout={}s, connect_timeout={}s",
            config.http_client.timeout_secs, config.http_client.connect_timeout_secs
        );
        config
    }

    /// Create and initialize every enabled provider.
    ///
    /// Providers share one HTTP client built from [`Self::http_client`]. Each
    /// keeps its own configured callback URL with `provider=<name>` appended,
    /// so [`ProviderRegistry::find_for_callback`] can route it.
    ///
    /// # Errors
    ///
    /// Returns [`oauth_profiles_core::ProviderError::ConfigurationError`] if an
    /// enabled provider is missing its key or secret, or its callback URL is
    /// missing or not absolute.
    pub fn build_registry(&self) -> ProviderResult<ProviderRegistry> {
        let client = self.http_client.build_client();
        let mut registry = ProviderRegistry::new();
        self.register_yahoo(&mut registry, &client)?;
        Ok(registry)
    }

    /// Register the Yahoo provider if it is enabled
    #[cfg(feature = "provider-yahoo")]
    fn register_yahoo(&self, registry: &mut ProviderRegistry, client: &Client) -> ProviderResult<()> {
        let yahoo = &self.oauth.yahoo;
        if !yahoo.enabled {
            info!("OAuth provider {} is disabled", oauth_providers::YAHOO);
            return Ok(());
        }
        if !yahoo.validate_and_log(oauth_providers::YAHOO) {
            warn!("Yahoo credentials look suspicious; initializing anyway");
        }

        let mut config = yahoo.clone().into_provider_config(&YahooDescriptor);
        config.callback_url = callback_url_for(&config.callback_url, oauth_providers::YAHOO)?;
        let mut provider = YahooProvider::with_config(config).with_client(client.clone());
        provider.init()?;
        registry.register(Box::new(provider));
        Ok(())
    }

    /// No-op when Yahoo support is not compiled in
    #[cfg(not(feature = "provider-yahoo"))]
    #[allow(clippy::unused_self, clippy::unnecessary_wraps)]
    fn register_yahoo(&self, _registry: &mut ProviderRegistry, _client: &Client) -> ProviderResult<()> {
        Ok(())
    }
}
