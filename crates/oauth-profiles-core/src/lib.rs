// ABOUTME: Core types and constants for OAuth profile providers
// ABOUTME: Foundation crate with provider errors, typed user profiles, and attribute converters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # OAuth Profiles Core
//!
//! Foundation crate providing shared types for the OAuth profile providers.
//! It has no network or runtime dependencies, so it changes infrequently and
//! can be depended on by every provider implementation.
//!
//! ## Modules
//!
//! - **errors**: `ProviderError` taxonomy and the `ProviderResult` alias
//! - **constants**: Provider identifiers and OAuth 1.0a parameter names
//! - **models**: `UserProfile`, `AttributeValue`, `Gender`, `Locale` and the
//!   Yahoo nested entities
//! - **converters**: Tolerant JSON to attribute conversion used by mappers

/// Provider error types and result alias
pub mod errors;

/// Constants organized by domain
pub mod constants;

/// Attribute converters from raw JSON values to typed attribute values
pub mod converters;

/// User profile models shared by all providers
pub mod models;

pub use errors::{ProviderError, ProviderResult};
