// ABOUTME: Core provider trait and the values threaded through an OAuth 1.0a login
// ABOUTME: Defines OAuthProvider, ProviderConfig, tokens, credentials, and callback parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Provider Contract
//!
//! Every provider drives the same linear flow, and each step takes the
//! previous step's output:
//!
//! 1. [`OAuthProvider::authorization_url`] obtains a request token, stores it
//!    in the [`UserSession`] and returns the URL to redirect the user to.
//! 2. [`OAuthProvider::credential`] checks the callback parameters against the
//!    session and yields an [`OAuthCredential`].
//! 3. [`OAuthProvider::access_token`] consumes the credential and returns an
//!    [`AccessToken`].
//! 4. [`OAuthProvider::user_profile`] fetches and maps the user's profile.
//!
//! ## Example
//!
//! ```rust,no_run
//! use oauth_profiles_providers::core::{CallbackParameters, OAuthProvider};
//! use oauth_profiles_providers::session::InMemorySession;
//! use oauth_profiles_core::ProviderResult;
//!
//! async fn login(provider: &dyn OAuthProvider, callback_url: &str) -> ProviderResult<()> {
//!     let mut session = InMemorySession::new();
//!     let redirect = provider.authorization_url(&mut session).await?;
//!     println!("send the user to {redirect}");
//!
//!     let params = CallbackParameters::from_url(callback_url).unwrap_or_default();
//!     let credential = provider.credential(&mut session, &params)?;
//!     let token = provider.access_token(credential).await?;
//!     let profile = provider.user_profile(&token).await?;
//!     println!("logged in as {}", profile.typed_id());
//!     Ok(())
//! }
//! ```

use crate::session::UserSession;
use async_trait::async_trait;
use oauth_profiles_core::constants::session::REQUEST_TOKEN_SUFFIX;
use oauth_profiles_core::models::UserProfile;
use oauth_profiles_core::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use url::Url;

/// Provider configuration: consumer credentials plus endpoints
///
/// Endpoints default to the provider's descriptor and can be pointed at a
/// different host, which is how tests redirect the flow to a mock server.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name (e.g., "yahoo")
    pub name: String,
    /// Consumer key issued by the provider
    pub consumer_key: String,
    /// Consumer secret issued by the provider
    pub consumer_secret: String,
    /// Where the provider redirects the user after consent
    pub callback_url: String,
    /// OAuth 1.0a request-token endpoint
    pub request_token_url: String,
    /// User authorization endpoint
    pub authorization_url: String,
    /// OAuth 1.0a access-token endpoint
    pub access_token_url: String,
    /// Base URL for profile API calls
    pub api_base_url: String,
}

impl ProviderConfig {
    /// Check that every field needed by the flow is present and that the
    /// endpoints are absolute URLs
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ConfigurationError`] naming the first field
    /// that is empty or not a valid URL.
    pub fn validate(&self) -> ProviderResult<()> {
        let required = [
            ("key", &self.consumer_key),
            ("secret", &self.consumer_secret),
            ("callback URL", &self.callback_url),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ProviderError::configuration(
                    &self.name,
                    format!("{field} cannot be blank"),
                ));
            }
        }

        let endpoints = [
            ("callback URL", &self.callback_url),
            ("request token URL", &self.request_token_url),
            ("authorization URL", &self.authorization_url),
            ("access token URL", &self.access_token_url),
            ("API base URL", &self.api_base_url),
        ];
        for (field, value) in endpoints {
            Url::parse(value).map_err(|e| {
                ProviderError::configuration(&self.name, format!("invalid {field} {value:?}: {e}"))
            })?;
        }
        Ok(())
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("name", &self.name)
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("callback_url", &self.callback_url)
            .field("request_token_url", &self.request_token_url)
            .field("authorization_url", &self.authorization_url)
            .field("access_token_url", &self.access_token_url)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

/// Unauthorized request token, kept in the session until the callback
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestToken {
    /// Token identifier, echoed back by the provider in the callback
    pub token: String,
    /// Token secret, used to sign the access-token request
    pub secret: String,
}

impl fmt::Debug for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestToken")
            .field("token", &self.token)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Session key under which a provider's pending request token is stored
#[must_use]
pub fn request_token_key(provider: &str) -> String {
    format!("{provider}{REQUEST_TOKEN_SUFFIX}")
}

/// Proof that the user authorized the request token.
///
/// Produced only by [`OAuthProvider::credential`] and consumed by value by
/// [`OAuthProvider::access_token`], so it can be exchanged at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct OAuthCredential {
    provider: String,
    request_token: RequestToken,
    verifier: String,
}

impl OAuthCredential {
    /// Bundle a verified callback with its pending request token
    #[must_use]
    pub fn new(
        provider: impl Into<String>,
        request_token: RequestToken,
        verifier: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            request_token,
            verifier: verifier.into(),
        }
    }

    /// Provider that issued the request token
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// The authorized request token
    #[must_use]
    pub const fn request_token(&self) -> &RequestToken {
        &self.request_token
    }

    /// Request token identifier
    #[must_use]
    pub fn token(&self) -> &str {
        &self.request_token.token
    }

    /// Verifier returned in the callback
    #[must_use]
    pub fn verifier(&self) -> &str {
        &self.verifier
    }
}

/// Access token returned by the token exchange
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    token: String,
    secret: String,
    raw_parameters: BTreeMap<String, String>,
}

impl AccessToken {
    /// Build from the token endpoint's response fields
    #[must_use]
    pub fn new(
        token: impl Into<String>,
        secret: impl Into<String>,
        raw_parameters: BTreeMap<String, String>,
    ) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
            raw_parameters,
        }
    }

    /// Token identifier
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Token secret for signing API calls
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Every field of the token response, including provider extensions
    /// such as `xoauth_yahoo_guid`
    #[must_use]
    pub const fn raw_parameters(&self) -> &BTreeMap<String, String> {
        &self.raw_parameters
    }

    /// Single raw response field
    #[must_use]
    pub fn raw_parameter(&self, name: &str) -> Option<&str> {
        self.raw_parameters.get(name).map(String::as_str)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &self.token)
            .field("secret", &"[REDACTED]")
            .field("raw_parameters", &self.raw_parameters.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Query parameters received on the callback URL.
///
/// Keeps every value of repeated parameters so that ambiguous callbacks can
/// be rejected instead of silently picking one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParameters {
    values: HashMap<String, Vec<String>>,
}

impl CallbackParameters {
    /// Parameters from a full callback URL
    ///
    /// # Errors
    ///
    /// Returns the URL parse error when `callback_url` is not an absolute URL.
    pub fn from_url(callback_url: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(callback_url)?;
        Ok(url.query_pairs().into_owned().collect())
    }

    /// Parameters from a raw query string, with or without the leading `?`
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    /// Every value sent for `name`
    #[must_use]
    pub fn values(&self, name: &str) -> &[String] {
        self.values
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First value sent for `name`
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values(name).first().map(String::as_str)
    }

    /// Whether `name` was sent at all
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

impl FromIterator<(String, String)> for CallbackParameters {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in iter {
            values.entry(name).or_default().push(value);
        }
        Self { values }
    }
}

/// An OAuth 1.0a login provider.
///
/// Implementations hold configuration and an HTTP client but no per-user
/// state: everything that belongs to one login lives in the session passed to
/// each call.
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Provider name (e.g., "yahoo")
    fn name(&self) -> &'static str;

    /// Provider configuration
    fn config(&self) -> &ProviderConfig;

    /// Replace the callback URL; the provider must be initialized again
    fn set_callback_url(&mut self, callback_url: String);

    /// Validate the configuration and make the provider usable
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ConfigurationError`] if the key, secret or
    /// callback URL is missing.
    fn init(&mut self) -> ProviderResult<()>;

    /// Whether [`Self::init`] has succeeded since the last configuration change
    fn is_initialized(&self) -> bool;

    /// Obtain a request token, store it in the session and return the URL
    /// the user must visit to grant access
    async fn authorization_url(&self, session: &mut dyn UserSession) -> ProviderResult<String>;

    /// Match the callback against the pending request token in the session
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::AccessDenied`] when the user refused consent
    /// and [`ProviderError::InvalidState`] when the callback does not match
    /// the session.
    fn credential(
        &self,
        session: &mut dyn UserSession,
        parameters: &CallbackParameters,
    ) -> ProviderResult<OAuthCredential>;

    /// Exchange an authorized credential for an access token
    async fn access_token(&self, credential: OAuthCredential) -> ProviderResult<AccessToken>;

    /// Fetch and map the authenticated user's profile
    async fn user_profile(&self, access_token: &AccessToken) -> ProviderResult<UserProfile>;
}
