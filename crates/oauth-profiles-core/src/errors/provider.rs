// ABOUTME: Structured error types for OAuth provider operations
// ABOUTME: Covers configuration, callback state, token exchange, and profile mapping failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised by OAuth providers during the authentication flow.
///
/// Every variant names the provider that raised it so that callers routing
/// several providers through one code path can report the origin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Key, secret or callback URL missing, or the provider was used before `init`
    #[error("Provider {provider} configuration error: {details}")]
    ConfigurationError {
        /// Provider name
        provider: String,
        /// What is missing or invalid
        details: String,
    },

    /// Callback parameters do not match any pending request token in the session
    #[error("Provider {provider} invalid callback state: {reason}")]
    InvalidState {
        /// Provider name
        provider: String,
        /// Why the callback was rejected
        reason: String,
    },

    /// The user refused to grant access on the provider's consent page
    #[error("Provider {provider} access denied: {reason}")]
    AccessDenied {
        /// Provider name
        provider: String,
        /// Value reported by the provider in the callback
        reason: String,
    },

    /// Request-token or access-token exchange rejected by the provider
    #[error("Provider {provider} token exchange failed{}: {message}", format_status(*.status_code))]
    AuthExchangeFailed {
        /// Provider name
        provider: String,
        /// HTTP status, `None` for transport failures
        status_code: Option<u16>,
        /// Error details
        message: String,
    },

    /// Transport failure, non-success status or unparsable body on a profile call
    #[error("Provider {provider} profile fetch failed{}: {reason}", format_status(*.status_code))]
    ProfileFetchFailed {
        /// Provider name
        provider: String,
        /// HTTP status, `None` for transport and parse failures
        status_code: Option<u16>,
        /// Error details
        reason: String,
    },

    /// Profile payload lacks a required field
    #[error("Provider {provider} returned a malformed profile: {details}")]
    MalformedProfile {
        /// Provider name
        provider: String,
        /// Which field is missing
        details: String,
    },

    /// No provider registered under this name
    #[error("Provider not supported: {provider}")]
    UnsupportedProvider {
        /// Requested provider name
        provider: String,
    },
}

fn format_status(status_code: Option<u16>) -> String {
    status_code.map_or_else(String::new, |code| format!(" (status {code})"))
}

impl ProviderError {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(provider: impl Into<String>, details: impl Into<String>) -> Self {
        Self::ConfigurationError {
            provider: provider.into(),
            details: details.into(),
        }
    }

    /// Create an invalid callback state error
    #[must_use]
    pub fn invalid_state(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidState {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// Create a user-refused-access error
    #[must_use]
    pub fn access_denied(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AccessDenied {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// Create a token exchange error
    #[must_use]
    pub fn auth_exchange(
        provider: impl Into<String>,
        status_code: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self::AuthExchangeFailed {
            provider: provider.into(),
            status_code,
            message: message.into(),
        }
    }

    /// Create a profile fetch error
    #[must_use]
    pub fn profile_fetch(
        provider: impl Into<String>,
        status_code: Option<u16>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ProfileFetchFailed {
            provider: provider.into(),
            status_code,
            reason: reason.into(),
        }
    }

    /// Create a malformed profile error
    #[must_use]
    pub fn malformed_profile(provider: impl Into<String>, details: impl Into<String>) -> Self {
        Self::MalformedProfile {
            provider: provider.into(),
            details: details.into(),
        }
    }

    /// Name of the provider that raised this error
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::ConfigurationError { provider, .. }
            | Self::InvalidState { provider, .. }
            | Self::AccessDenied { provider, .. }
            | Self::AuthExchangeFailed { provider, .. }
            | Self::ProfileFetchFailed { provider, .. }
            | Self::MalformedProfile { provider, .. }
            | Self::UnsupportedProvider { provider } => provider,
        }
    }

    /// Whether a caller-side retry could succeed.
    ///
    /// Transport failures and 5xx responses are transient; everything else
    /// needs a different input.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::AuthExchangeFailed { status_code, .. }
            | Self::ProfileFetchFailed { status_code, .. } => {
                status_code.map_or(true, |code| code >= 500)
            }
            _ => false,
        }
    }
}

/// Result alias for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
