// ABOUTME: Main library entry point for OAuth profile provider clients
// ABOUTME: Re-exports providers and profile models, plus configuration, logging, and the provider registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # OAuth Profiles
//!
//! Third-party login through OAuth 1.0a, ending in a typed user profile.
//!
//! ## Features
//!
//! - **OAuth 1.0a flow**: request token, user authorization, verifier
//!   callback, access token, with HMAC-SHA1 request signing
//! - **Session-bound state**: the pending request token lives in the caller's
//!   session and is checked against the callback
//! - **Typed profiles**: provider payloads mapped to attributes with dates,
//!   gender, locale and nested entities kept as real types
//! - **Registry**: several providers behind one callback endpoint
//!
//! ## Architecture
//!
//! - **`oauth_profiles_core`**: errors, profile models, attribute converters
//! - **`oauth_profiles_providers`**: provider trait, signer, session, Yahoo
//! - **this crate**: environment configuration, logging, provider registry
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use oauth_profiles::{CallbackParameters, InMemorySession, OAuthProvider, YahooProvider};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut provider = YahooProvider::new();
//!     provider.configure("consumer-key", "consumer-secret", "https://app.example.com/callback");
//!     provider.init()?;
//!
//!     let mut session = InMemorySession::new();
//!     let redirect = provider.authorization_url(&mut session).await?;
//!     println!("Visit {redirect}");
//!
//!     // ...the provider redirects the user back to the callback URL
//!     let params = CallbackParameters::from_url(
//!         "https://app.example.com/callback?oauth_token=abc&oauth_verifier=xyz",
//!     )?;
//!     let credential = provider.credential(&mut session, &params)?;
//!     let token = provider.access_token(credential).await?;
//!     let profile = provider.fetch_profile(&token).await?;
//!     println!("Hello {:?}", profile.nickname());
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Logging setup for applications
pub mod logging;

/// Provider registry with callback routing
pub mod registry;

pub use oauth_profiles_core::{constants, converters, errors, models};
pub use oauth_profiles_core::{ProviderError, ProviderResult};

pub use oauth_profiles_providers::{
    AccessToken, CallbackParameters, HttpClientConfig, InMemorySession, OAuth1Endpoints,
    OAuth1Flow, OAuthCredential, OAuthProvider, ProviderCapabilities, ProviderConfig,
    ProviderDescriptor, RequestToken, UserSession,
};
#[cfg(feature = "provider-yahoo")]
pub use oauth_profiles_providers::{yahoo, YahooDescriptor, YahooProvider};
pub use oauth_profiles_providers::{oauth1, session, spi};

pub use config::{ClientConfig, OAuthConfig, OAuthProviderConfig};
pub use registry::ProviderRegistry;
