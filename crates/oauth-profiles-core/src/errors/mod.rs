// ABOUTME: Error module for OAuth profile providers
// ABOUTME: Re-exports the provider error taxonomy used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Types
//!
//! All fallible operations in the workspace return [`ProviderResult`]. Errors
//! propagate to the caller unchanged; nothing is retried internally.

/// Provider error taxonomy
pub mod provider;

pub use provider::{ProviderError, ProviderResult};
