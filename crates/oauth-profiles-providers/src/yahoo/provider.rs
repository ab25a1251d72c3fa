// ABOUTME: Yahoo OAuth 1.0a provider with Social API profile retrieval
// ABOUTME: Configures the consumer, drives the login flow, and maps the user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::attributes::map_profile;
use super::constants::{profile_path, GUID_PATH, GUID_VALUE_CLOSE, GUID_VALUE_OPEN};
use crate::core::{
    AccessToken, CallbackParameters, OAuthCredential, OAuthProvider, ProviderConfig,
};
use crate::flow::OAuth1Flow;
use crate::http_client::HttpClientConfig;
use crate::session::UserSession;
use crate::spi::{ProviderDescriptor, YahooDescriptor};
use async_trait::async_trait;
use oauth_profiles_core::constants::oauth_providers;
use oauth_profiles_core::models::{UserProfile, YahooProfile};
use oauth_profiles_core::{ProviderError, ProviderResult};
use reqwest::Client;
use tracing::{debug, info};

/// Yahoo provider.
///
/// # Examples
///
/// ```rust
/// use oauth_profiles_providers::core::OAuthProvider;
/// use oauth_profiles_providers::yahoo::YahooProvider;
///
/// let mut provider = YahooProvider::new();
/// assert!(provider.init().is_err());
///
/// provider.configure("consumer-key", "consumer-secret", "https://app.example.com/callback");
/// provider.init().unwrap();
/// assert!(provider.is_initialized());
/// ```
#[derive(Debug, Clone)]
pub struct YahooProvider {
    flow: OAuth1Flow,
    initialized: bool,
}

impl YahooProvider {
    /// Unconfigured provider using Yahoo's endpoints and a default HTTP client
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(YahooDescriptor.to_config("", "", ""))
    }

    /// Provider with an explicit configuration (e.g. endpoints on a mock server)
    #[must_use]
    pub fn with_config(config: ProviderConfig) -> Self {
        Self {
            flow: OAuth1Flow::new(config, HttpClientConfig::default().build_client()),
            initialized: false,
        }
    }

    /// Send requests through `client`
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.flow.set_client(client);
        self
    }

    /// Set consumer key, consumer secret and callback URL.
    ///
    /// The provider must be initialized again afterwards.
    pub fn configure(
        &mut self,
        key: impl Into<String>,
        secret: impl Into<String>,
        callback_url: impl Into<String>,
    ) {
        let config = self.flow.config_mut();
        config.consumer_key = key.into();
        config.consumer_secret = secret.into();
        config.callback_url = callback_url.into();
        self.initialized = false;
    }

    fn ensure_initialized(&self) -> ProviderResult<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(ProviderError::configuration(
                oauth_providers::YAHOO,
                "provider used before init",
            ))
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!(
            "{}{path}",
            self.flow.config().api_base_url.trim_end_matches('/')
        )
    }

    /// Look up the GUID of the access token's owner
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ProfileFetchFailed`] if the call fails or the
    /// document carries no GUID.
    pub async fn fetch_guid(&self, access_token: &AccessToken) -> ProviderResult<String> {
        self.ensure_initialized()?;
        let response = self
            .flow
            .signed_get(&self.api_url(GUID_PATH), access_token)
            .await?;

        extract_guid(&response.body).ok_or_else(|| {
            ProviderError::profile_fetch(
                oauth_providers::YAHOO,
                Some(response.status),
                "GUID document has no value",
            )
        })
    }

    /// Fetch and map the access token owner's profile
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ProfileFetchFailed`] on transport or HTTP
    /// failure and [`ProviderError::MalformedProfile`] if the document lacks
    /// the profile GUID.
    pub async fn fetch_profile(&self, access_token: &AccessToken) -> ProviderResult<YahooProfile> {
        let guid = self.fetch_guid(access_token).await?;
        debug!("Fetching Yahoo profile for {guid}");

        let response = self
            .flow
            .signed_get(&self.api_url(&profile_path(&guid)), access_token)
            .await?;
        let profile = map_profile(&response.body)?;

        info!(
            provider = oauth_providers::YAHOO,
            attributes = profile.attributes().len(),
            "Fetched user profile"
        );
        Ok(profile)
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Text between the first `<value>` and the following `</value>`
fn extract_guid(document: &str) -> Option<String> {
    let start = document.find(GUID_VALUE_OPEN)? + GUID_VALUE_OPEN.len();
    let rest = &document[start..];
    let end = rest.find(GUID_VALUE_CLOSE)?;
    let guid = rest[..end].trim();
    (!guid.is_empty()).then(|| guid.to_owned())
}

#[async_trait]
impl OAuthProvider for YahooProvider {
    fn name(&self) -> &'static str {
        oauth_providers::YAHOO
    }

    fn config(&self) -> &ProviderConfig {
        self.flow.config()
    }

    fn set_callback_url(&mut self, callback_url: String) {
        self.flow.config_mut().callback_url = callback_url;
        self.initialized = false;
    }

    fn init(&mut self) -> ProviderResult<()> {
        self.flow.config().validate()?;
        self.initialized = true;
        info!(
            provider = oauth_providers::YAHOO,
            callback_url = %self.flow.config().callback_url,
            "Provider initialized"
        );
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    async fn authorization_url(&self, session: &mut dyn UserSession) -> ProviderResult<String> {
        self.ensure_initialized()?;
        self.flow.authorization_url(session).await
    }

    fn credential(
        &self,
        session: &mut dyn UserSession,
        parameters: &CallbackParameters,
    ) -> ProviderResult<OAuthCredential> {
        self.ensure_initialized()?;
        self.flow.credential(session, parameters)
    }

    async fn access_token(&self, credential: OAuthCredential) -> ProviderResult<AccessToken> {
        self.ensure_initialized()?;
        self.flow.access_token(credential).await
    }

    async fn user_profile(&self, access_token: &AccessToken) -> ProviderResult<UserProfile> {
        self.fetch_profile(access_token).await.map(UserProfile::from)
    }
}
