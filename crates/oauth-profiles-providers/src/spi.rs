// ABOUTME: Service Provider Interface describing each provider's identity, endpoints, and capabilities
// ABOUTME: ProviderDescriptor trait, capability flags, OAuth 1.0a endpoints, and built-in descriptors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Provider Service Provider Interface (SPI)
//!
//! A descriptor is static metadata about a provider: its name, the OAuth 1.0a
//! endpoints it exposes, its API base URL, and what its profiles contain.
//! Providers build their default [`ProviderConfig`] from their descriptor.
//!
//! ## Example: Describing a Provider
//!
//! ```rust
//! use oauth_profiles_providers::spi::{OAuth1Endpoints, ProviderCapabilities, ProviderDescriptor};
//!
//! pub struct ExampleDescriptor;
//!
//! impl ProviderDescriptor for ExampleDescriptor {
//!     fn name(&self) -> &'static str {
//!         "example"
//!     }
//!
//!     fn display_name(&self) -> &'static str {
//!         "Example"
//!     }
//!
//!     fn capabilities(&self) -> ProviderCapabilities {
//!         ProviderCapabilities::OAUTH1 | ProviderCapabilities::USER_PROFILE
//!     }
//!
//!     fn oauth_endpoints(&self) -> OAuth1Endpoints {
//!         OAuth1Endpoints {
//!             request_token_url: "https://example.com/oauth/request_token",
//!             authorization_url: "https://example.com/oauth/authorize",
//!             access_token_url: "https://example.com/oauth/access_token",
//!         }
//!     }
//!
//!     fn api_base_url(&self) -> &'static str {
//!         "https://api.example.com/v1"
//!     }
//! }
//!
//! let config = ExampleDescriptor.to_config("key", "secret", "https://app.example.com/callback");
//! assert_eq!(config.name, "example");
//! assert!(config.validate().is_ok());
//! ```

use crate::core::ProviderConfig;

/// OAuth 1.0a endpoint set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OAuth1Endpoints {
    /// Temporary credential (request token) endpoint
    pub request_token_url: &'static str,
    /// Resource owner authorization endpoint
    pub authorization_url: &'static str,
    /// Token credential (access token) endpoint
    pub access_token_url: &'static str,
}

bitflags::bitflags! {
    /// What a provider's profile exposes
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ProviderCapabilities: u8 {
        /// Provider authenticates with OAuth 1.0a
        const OAUTH1 = 0b0000_0001;
        /// Provider returns a user profile
        const USER_PROFILE = 0b0000_0010;
        /// Profile includes email addresses
        const EMAIL = 0b0000_0100;
        /// Profile includes postal addresses
        const ADDRESSES = 0b0000_1000;
        /// Profile includes a picture
        const PICTURE = 0b0001_0000;
    }
}

impl ProviderCapabilities {
    /// Capabilities of a provider returning a full social profile
    #[must_use]
    pub const fn social_profile() -> Self {
        Self::OAUTH1
            .union(Self::USER_PROFILE)
            .union(Self::EMAIL)
            .union(Self::ADDRESSES)
            .union(Self::PICTURE)
    }

    /// Check if email addresses are available
    #[must_use]
    pub const fn supports_email(&self) -> bool {
        self.contains(Self::EMAIL)
    }

    /// Check if a picture is available
    #[must_use]
    pub const fn supports_picture(&self) -> bool {
        self.contains(Self::PICTURE)
    }
}

/// Describes a provider's identity and endpoints
pub trait ProviderDescriptor: Send + Sync {
    /// Unique provider identifier (e.g., "yahoo")
    ///
    /// Lowercase; matches the `provider` callback parameter and the
    /// configuration prefix.
    fn name(&self) -> &'static str;

    /// Human-readable display name (e.g., "Yahoo!")
    fn display_name(&self) -> &'static str;

    /// What the provider's profile contains
    fn capabilities(&self) -> ProviderCapabilities;

    /// OAuth 1.0a endpoints
    fn oauth_endpoints(&self) -> OAuth1Endpoints;

    /// Base URL for profile API calls
    fn api_base_url(&self) -> &'static str;

    /// Build a [`ProviderConfig`] from this descriptor's endpoints
    fn to_config(&self, consumer_key: &str, consumer_secret: &str, callback_url: &str) -> ProviderConfig {
        let endpoints = self.oauth_endpoints();
        ProviderConfig {
            name: self.name().to_owned(),
            consumer_key: consumer_key.to_owned(),
            consumer_secret: consumer_secret.to_owned(),
            callback_url: callback_url.to_owned(),
            request_token_url: endpoints.request_token_url.to_owned(),
            authorization_url: endpoints.authorization_url.to_owned(),
            access_token_url: endpoints.access_token_url.to_owned(),
            api_base_url: self.api_base_url().to_owned(),
        }
    }
}

// ============================================================================
// Built-in Provider Descriptors (conditionally compiled)
// ============================================================================

/// Yahoo provider descriptor
#[cfg(feature = "provider-yahoo")]
pub struct YahooDescriptor;

#[cfg(feature = "provider-yahoo")]
impl ProviderDescriptor for YahooDescriptor {
    fn name(&self) -> &'static str {
        oauth_profiles_core::constants::oauth_providers::YAHOO
    }

    fn display_name(&self) -> &'static str {
        "Yahoo!"
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities::social_profile()
    }

    fn oauth_endpoints(&self) -> OAuth1Endpoints {
        OAuth1Endpoints {
            request_token_url: "https://api.login.yahoo.com/oauth/v2/get_request_token",
            authorization_url: "https://api.login.yahoo.com/oauth/v2/request_auth",
            access_token_url: "https://api.login.yahoo.com/oauth/v2/get_token",
        }
    }

    fn api_base_url(&self) -> &'static str {
        "https://social.yahooapis.com/v1"
    }
}
