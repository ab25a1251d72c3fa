// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Provider identifiers, OAuth 1.0a protocol parameter names, and session keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// OAuth provider identifiers
pub mod oauth_providers {
    /// Yahoo provider identifier
    pub const YAHOO: &str = "yahoo";

    /// All provider identifiers compiled into this workspace
    pub const ALL: &[&str] = &[YAHOO];
}

/// OAuth 1.0a protocol parameter names (RFC 5849 section 2 and 3)
pub mod oauth1 {
    /// Consumer key parameter
    pub const CONSUMER_KEY: &str = "oauth_consumer_key";
    /// Nonce parameter
    pub const NONCE: &str = "oauth_nonce";
    /// Signature parameter
    pub const SIGNATURE: &str = "oauth_signature";
    /// Signature method parameter
    pub const SIGNATURE_METHOD: &str = "oauth_signature_method";
    /// Timestamp parameter
    pub const TIMESTAMP: &str = "oauth_timestamp";
    /// Token parameter (request token in the callback, access token afterwards)
    pub const TOKEN: &str = "oauth_token";
    /// Token secret parameter in token endpoint responses
    pub const TOKEN_SECRET: &str = "oauth_token_secret";
    /// Verifier parameter returned in the callback
    pub const VERIFIER: &str = "oauth_verifier";
    /// Callback parameter sent with the request-token call
    pub const CALLBACK: &str = "oauth_callback";
    /// Version parameter
    pub const VERSION: &str = "oauth_version";
    /// Problem report returned by some providers on refusal
    pub const PROBLEM: &str = "oauth_problem";
    /// Parameter set by providers when the user declines consent
    pub const DENIED: &str = "denied";

    /// The only supported signature method
    pub const HMAC_SHA1: &str = "HMAC-SHA1";
    /// Protocol version sent with every request
    pub const VERSION_1_0: &str = "1.0";
}

/// Session attribute naming
pub mod session {
    /// Suffix appended to the provider name to build the pending request-token key
    pub const REQUEST_TOKEN_SUFFIX: &str = "#request_token";
}

/// Callback routing
pub mod callback {
    /// Query parameter carrying the provider name on callback URLs
    pub const PROVIDER_PARAMETER: &str = "provider";
}
