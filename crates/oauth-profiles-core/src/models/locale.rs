// ABOUTME: Structured locale codes (language plus optional country)
// ABOUTME: Parses provider strings such as "fr", "fr-FR", and "fr_FR"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language code with an optional country code.
///
/// The language is stored lower-case and the country upper-case, so
/// `"FR"`, `"fr"` and `"Fr"` all parse to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    country: Option<String>,
}

impl Locale {
    /// Build a locale from its parts, normalizing case
    #[must_use]
    pub fn new(language: &str, country: Option<&str>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            country: country
                .filter(|c| !c.is_empty())
                .map(str::to_ascii_uppercase),
        }
    }

    /// Parse `language[-_]country`. Returns `None` for empty input or for
    /// parts that are not purely alphabetic.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let mut parts = value.split(['-', '_']);
        let language = parts.next().filter(|l| is_alpha_code(l))?;
        let country = match parts.next() {
            Some(country) if is_alpha_code(country) => Some(country),
            Some(_) => return None,
            None => None,
        };
        Some(Self::new(language, country))
    }

    /// ISO 639 language code, lower-case
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// ISO 3166 country code, upper-case
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

fn is_alpha_code(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_alphabetic())
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}-{country}", self.language),
            None => write!(f, "{}", self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid locale: {s:?}"))
    }
}
