// ABOUTME: OAuth 1.0a provider implementations and the plumbing they share
// ABOUTME: Provider trait, request signing, session storage, HTTP client, descriptors, and Yahoo
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! OAuth provider implementations and core abstractions.
//!
//! Each provider drives the OAuth 1.0a three-legged flow and maps the
//! provider's profile document into an
//! [`oauth_profiles_core::models::UserProfile`].

// Re-export core modules so provider code reads `crate::errors` etc.
pub use oauth_profiles_core::constants;
pub use oauth_profiles_core::errors;
pub use oauth_profiles_core::models;

/// Core provider trait and flow values
pub mod core;
/// Provider-independent OAuth 1.0a flow
pub mod flow;
/// HTTP client construction for provider API calls
pub mod http_client;
/// OAuth 1.0a request signing
pub mod oauth1;
/// Per-user session storage
pub mod session;
/// Service Provider Interface for provider metadata
pub mod spi;

// Provider implementations (conditionally compiled)

/// Yahoo provider with Social API profiles
#[cfg(feature = "provider-yahoo")]
pub mod yahoo;

// Re-export key types for convenience

pub use crate::core::{
    AccessToken, CallbackParameters, OAuthCredential, OAuthProvider, ProviderConfig, RequestToken,
};
pub use flow::OAuth1Flow;
pub use http_client::HttpClientConfig;
pub use oauth_profiles_core::errors::{ProviderError, ProviderResult};
pub use session::{InMemorySession, UserSession};
#[cfg(feature = "provider-yahoo")]
pub use spi::YahooDescriptor;
pub use spi::{OAuth1Endpoints, ProviderCapabilities, ProviderDescriptor};
#[cfg(feature = "provider-yahoo")]
pub use yahoo::YahooProvider;
