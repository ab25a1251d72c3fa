// ABOUTME: Provider-agnostic user profile with a typed attribute map
// ABOUTME: Defines UserProfile and the CommonProfile cross-provider view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::attribute::AttributeValue;
use super::gender::Gender;
use super::locale::Locale;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Represents an authenticated user's profile from any provider
///
/// Built once by a provider's profile mapper and never mutated afterwards:
/// there are no setters, only typed reads. Two profiles mapped from the same
/// payload compare equal.
///
/// # Examples
///
/// ```rust
/// use oauth_profiles_core::models::{AttributeValue, UserProfile};
/// use std::collections::BTreeMap;
///
/// let mut attributes = BTreeMap::new();
/// attributes.insert("nickname".to_owned(), AttributeValue::Text("Test".to_owned()));
///
/// let profile = UserProfile::new("yahoo", "YahooProfile", "PCSXZCYSWC6XUJNMZKRGWVPHNU", attributes);
/// assert_eq!(profile.typed_id(), "YahooProfile#PCSXZCYSWC6XUJNMZKRGWVPHNU");
/// assert_eq!(profile.text("nickname"), Some("Test"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    id: String,
    provider: String,
    profile_type: String,
    attributes: BTreeMap<String, AttributeValue>,
}

impl UserProfile {
    /// Create a profile from its identifier and converted attributes
    #[must_use]
    pub fn new(
        provider: impl Into<String>,
        profile_type: impl Into<String>,
        id: impl Into<String>,
        attributes: BTreeMap<String, AttributeValue>,
    ) -> Self {
        Self {
            id: id.into(),
            provider: provider.into(),
            profile_type: profile_type.into(),
            attributes,
        }
    }

    /// Provider-specific user identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Identifier qualified by the profile type, unique across providers
    #[must_use]
    pub fn typed_id(&self) -> String {
        format!("{}#{}", self.profile_type, self.id)
    }

    /// Name of the provider this profile came from
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Profile type name (e.g. `YahooProfile`)
    #[must_use]
    pub fn profile_type(&self) -> &str {
        &self.profile_type
    }

    /// All converted attributes
    #[must_use]
    pub const fn attributes(&self) -> &BTreeMap<String, AttributeValue> {
        &self.attributes
    }

    /// Single attribute by key
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Text attribute
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(AttributeValue::as_text)
    }

    /// Integer attribute
    #[must_use]
    pub fn integer(&self, key: &str) -> Option<i64> {
        self.attribute(key).and_then(AttributeValue::as_integer)
    }

    /// Boolean attribute
    #[must_use]
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.attribute(key).and_then(AttributeValue::as_boolean)
    }

    /// Date attribute
    #[must_use]
    pub fn date(&self, key: &str) -> Option<DateTime<Utc>> {
        self.attribute(key).and_then(AttributeValue::as_date)
    }

    /// Gender attribute
    #[must_use]
    pub fn gender(&self, key: &str) -> Option<Gender> {
        self.attribute(key).and_then(AttributeValue::as_gender)
    }

    /// Locale attribute
    #[must_use]
    pub fn locale(&self, key: &str) -> Option<&Locale> {
        self.attribute(key).and_then(AttributeValue::as_locale)
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} attributes)",
            self.typed_id(),
            self.attributes.len()
        )
    }
}

/// Cross-provider view of a profile.
///
/// Applications that accept several providers read users through this trait
/// instead of each provider's own getters.
pub trait CommonProfile {
    /// Primary email address
    fn email(&self) -> Option<&str>;

    /// Given name
    fn first_name(&self) -> Option<&str>;

    /// Family name
    fn family_name(&self) -> Option<&str>;

    /// Name suitable for display
    fn display_name(&self) -> Option<String>;

    /// Short handle chosen by the user
    fn username(&self) -> Option<&str>;

    /// Gender, [`Gender::Unspecified`] when absent
    fn gender(&self) -> Gender;

    /// Preferred locale
    fn locale(&self) -> Option<&Locale>;

    /// Profile picture URL
    fn picture_url(&self) -> Option<&str>;

    /// Public profile page URL
    fn profile_url(&self) -> Option<&str>;

    /// Free-text location
    fn location(&self) -> Option<&str>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserProfile {
        let mut attributes = BTreeMap::new();
        attributes.insert("birthYear".to_owned(), AttributeValue::Integer(1976));
        attributes.insert("isConnected".to_owned(), AttributeValue::Boolean(true));
        UserProfile::new("yahoo", "YahooProfile", "ABC", attributes)
    }

    #[test]
    fn test_typed_getters_ignore_wrong_kinds() {
        let profile = sample();
        assert_eq!(profile.integer("birthYear"), Some(1976));
        assert_eq!(profile.text("birthYear"), None);
        assert_eq!(profile.boolean("isConnected"), Some(true));
        assert_eq!(profile.date("missing"), None);
    }

    #[test]
    fn test_display_and_typed_id() {
        let profile = sample();
        assert_eq!(profile.typed_id(), "YahooProfile#ABC");
        assert_eq!(profile.to_string(), "YahooProfile#ABC (2 attributes)");
        assert_eq!(profile.provider(), "yahoo");
    }

    #[test]
    fn test_serde_preserves_equality() {
        let profile = sample();
        let json = serde_json::to_string(&profile).unwrap();
        let restored: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, profile);
    }
}
