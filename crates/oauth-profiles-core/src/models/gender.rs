// ABOUTME: Gender enumeration for user profiles
// ABOUTME: Closed set parsed from provider-specific codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender reported by a provider.
///
/// Providers use their own codes (`"M"`/`"F"` for Yahoo); anything that is
/// not one of the two provider codes maps to [`Gender::Unspecified`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Not provided or not recognized
    #[default]
    Unspecified,
}

impl Gender {
    /// Parse a provider code, comparing case-insensitively against the
    /// provider's male and female codes
    #[must_use]
    pub fn from_code(value: &str, male_code: &str, female_code: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case(male_code) {
            Self::Male
        } else if value.eq_ignore_ascii_case(female_code) {
            Self::Female
        } else {
            Self::Unspecified
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Unspecified => write!(f, "unspecified"),
        }
    }
}
