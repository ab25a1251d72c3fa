// ABOUTME: User profile data models shared by OAuth providers
// ABOUTME: Re-exports profile, attribute, gender, locale, and Yahoo entity definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Providers return a [`UserProfile`]: an identifier plus a key/value map of
//! typed [`AttributeValue`]s. Provider-specific wrappers such as
//! [`YahooProfile`] add typed getters on top of that map without copying it.

/// Typed attribute values stored in a profile
pub mod attribute;
/// Closed gender set
pub mod gender;
/// Structured language/country codes
pub mod locale;
/// Provider-agnostic user profile and the common profile view
pub mod profile;
/// Yahoo profile wrapper and its nested entities
pub mod yahoo;

pub use attribute::AttributeValue;
pub use gender::Gender;
pub use locale::Locale;
pub use profile::{CommonProfile, UserProfile};
pub use yahoo::{
    YahooAddress, YahooDisclosure, YahooEmail, YahooImage, YahooInterest, YahooProfile,
};
