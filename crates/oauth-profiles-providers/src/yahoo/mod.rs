// ABOUTME: Yahoo provider module: OAuth 1.0a login plus Social API profile mapping
// ABOUTME: Re-exports the provider, the profile mapper, and the entity converters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Attribute definitions and the profile mapper
pub mod attributes;
/// Yahoo API constants
pub mod constants;
/// Nested entity converters
pub mod converters;
/// The provider itself
pub mod provider;

pub use attributes::map_profile;
pub use provider::YahooProvider;
