// ABOUTME: Configuration management module for provider clients
// ABOUTME: Environment-only settings for HTTP timeouts and OAuth consumer credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables:
//!
//! - **Environment**: `ClientConfig` aggregating everything below, plus the
//!   registry builder
//! - **OAuth**: consumer key, secret and callback URL per provider
//! - **HTTP client**: request and connect timeouts (`HTTP_CLIENT_*`)

/// Aggregated client configuration and registry construction
pub mod environment;
/// OAuth consumer credentials per provider
pub mod oauth;

pub use environment::ClientConfig;
pub use oauth::{OAuthConfig, OAuthProviderConfig};
pub use oauth_profiles_providers::HttpClientConfig;
