// ABOUTME: Yahoo profile wrapper and the nested entities of the Yahoo Social API
// ABOUTME: Typed getters over the generic attribute map plus address, email, image, interest, disclosure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::attribute::AttributeValue;
use super::gender::Gender;
use super::locale::Locale;
use super::profile::{CommonProfile, UserProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Attribute keys of the Yahoo profile document
pub mod attributes {
    /// Free-text biography
    pub const ABOUT_ME: &str = "aboutMe";
    /// Postal addresses
    pub const ADDRESSES: &str = "addresses";
    /// Year of birth
    pub const BIRTH_YEAR: &str = "birthYear";
    /// Birth day and month (`MM/dd`)
    pub const BIRTHDATE: &str = "birthdate";
    /// Account creation time
    pub const CREATED: &str = "created";
    /// Age shown on the profile
    pub const DISPLAY_AGE: &str = "displayAge";
    /// Terms-of-service disclosures
    pub const DISCLOSURES: &str = "disclosures";
    /// Email addresses
    pub const EMAILS: &str = "emails";
    /// Family name
    pub const FAMILY_NAME: &str = "familyName";
    /// Gender code (`M`/`F`)
    pub const GENDER: &str = "gender";
    /// Given name
    pub const GIVEN_NAME: &str = "givenName";
    /// Profile picture
    pub const IMAGE: &str = "image";
    /// Declared interests
    pub const INTERESTS: &str = "interests";
    /// Whether the viewer is connected to this user
    pub const IS_CONNECTED: &str = "isConnected";
    /// Preferred language
    pub const LANG: &str = "lang";
    /// Free-text location
    pub const LOCATION: &str = "location";
    /// Membership start time
    pub const MEMBER_SINCE: &str = "memberSince";
    /// Nickname
    pub const NICKNAME: &str = "nickname";
    /// Public profile page
    pub const PROFILE_URL: &str = "profileUrl";
    /// Olson time zone name
    pub const TIME_ZONE: &str = "timeZone";
    /// Last update time
    pub const UPDATED: &str = "updated";
    /// Profile resource URI
    pub const URI: &str = "uri";
    /// User identifier (not stored as an attribute)
    pub const GUID: &str = "guid";
}

/// Postal address attached to a Yahoo profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YahooAddress {
    /// Address identifier
    pub id: i64,
    /// Whether this is the current address
    pub current: bool,
    /// Country, as a language-only locale for Yahoo (`"FR"` parses to `fr`)
    pub country: Option<Locale>,
    /// State or region
    pub state: Option<String>,
    /// City
    pub city: Option<String>,
    /// Postal code
    pub postal_code: Option<String>,
    /// Street
    pub street: Option<String>,
    /// Address kind (`HOME`, `WORK`)
    pub address_type: Option<String>,
}

/// Acceptance record for one Yahoo disclosure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YahooDisclosure {
    /// Acceptance flag as sent by Yahoo (`"1"`)
    pub acceptance: Option<String>,
    /// Disclosure name
    pub name: Option<String>,
    /// When the user saw the disclosure
    pub seen: Option<DateTime<Utc>>,
    /// Disclosure version
    pub version: Option<String>,
}

/// Email address attached to a Yahoo profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YahooEmail {
    /// Email identifier
    pub id: i64,
    /// Whether this is the primary address
    pub primary: bool,
    /// The address itself
    pub handle: Option<String>,
    /// Address kind (`HOME`, `WORK`)
    pub email_type: Option<String>,
}

/// Yahoo profile picture
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YahooImage {
    /// Image location
    pub image_url: Option<String>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Size label, `<width>x<height>`
    pub size: Option<String>,
}

/// Interests the user declared in one category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YahooInterest {
    /// Declared interests, in payload order
    pub declared_interests: Vec<String>,
    /// Category key (e.g. `prfFavHobbies`)
    pub interest_category: Option<String>,
}

/// User profile returned by Yahoo.
///
/// Thin wrapper over [`UserProfile`] that reads the Yahoo attribute keys with
/// their proper types. Missing lists read as empty slices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YahooProfile(UserProfile);

impl YahooProfile {
    /// Profile type name used in typed identifiers
    pub const PROFILE_TYPE: &'static str = "YahooProfile";

    /// Wrap converted attributes under the given GUID
    #[must_use]
    pub fn new(
        provider: impl Into<String>,
        guid: impl Into<String>,
        attributes: BTreeMap<String, AttributeValue>,
    ) -> Self {
        Self(UserProfile::new(
            provider,
            Self::PROFILE_TYPE,
            guid,
            attributes,
        ))
    }

    /// Yahoo GUID
    #[must_use]
    pub fn id(&self) -> &str {
        self.0.id()
    }

    /// `YahooProfile#<guid>`
    #[must_use]
    pub fn typed_id(&self) -> String {
        self.0.typed_id()
    }

    /// All converted attributes
    #[must_use]
    pub const fn attributes(&self) -> &BTreeMap<String, AttributeValue> {
        self.0.attributes()
    }

    /// Generic profile view
    #[must_use]
    pub const fn as_user_profile(&self) -> &UserProfile {
        &self.0
    }

    /// Unwrap into the generic profile
    #[must_use]
    pub fn into_user_profile(self) -> UserProfile {
        self.0
    }

    /// Free-text biography
    #[must_use]
    pub fn about_me(&self) -> Option<&str> {
        self.0.text(attributes::ABOUT_ME)
    }

    /// Postal addresses
    #[must_use]
    pub fn addresses(&self) -> &[YahooAddress] {
        self.0
            .attribute(attributes::ADDRESSES)
            .and_then(AttributeValue::as_addresses)
            .unwrap_or_default()
    }

    /// Year of birth
    #[must_use]
    pub fn birth_year(&self) -> Option<i64> {
        self.0.integer(attributes::BIRTH_YEAR)
    }

    /// Birth day and month, in 1970
    #[must_use]
    pub fn birthdate(&self) -> Option<DateTime<Utc>> {
        self.0.date(attributes::BIRTHDATE)
    }

    /// Account creation time
    #[must_use]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.0.date(attributes::CREATED)
    }

    /// Age shown on the profile
    #[must_use]
    pub fn display_age(&self) -> Option<i64> {
        self.0.integer(attributes::DISPLAY_AGE)
    }

    /// Terms-of-service disclosures
    #[must_use]
    pub fn disclosures(&self) -> &[YahooDisclosure] {
        self.0
            .attribute(attributes::DISCLOSURES)
            .and_then(AttributeValue::as_disclosures)
            .unwrap_or_default()
    }

    /// Email addresses
    #[must_use]
    pub fn emails(&self) -> &[YahooEmail] {
        self.0
            .attribute(attributes::EMAILS)
            .and_then(AttributeValue::as_emails)
            .unwrap_or_default()
    }

    /// Family name
    #[must_use]
    pub fn family_name(&self) -> Option<&str> {
        self.0.text(attributes::FAMILY_NAME)
    }

    /// Gender, unspecified when absent
    #[must_use]
    pub fn gender(&self) -> Gender {
        self.0.gender(attributes::GENDER).unwrap_or_default()
    }

    /// Given name
    #[must_use]
    pub fn given_name(&self) -> Option<&str> {
        self.0.text(attributes::GIVEN_NAME)
    }

    /// Profile picture
    #[must_use]
    pub fn image(&self) -> Option<&YahooImage> {
        self.0
            .attribute(attributes::IMAGE)
            .and_then(AttributeValue::as_image)
    }

    /// Declared interests
    #[must_use]
    pub fn interests(&self) -> &[YahooInterest] {
        self.0
            .attribute(attributes::INTERESTS)
            .and_then(AttributeValue::as_interests)
            .unwrap_or_default()
    }

    /// Whether the viewer is connected to this user
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.0.boolean(attributes::IS_CONNECTED).unwrap_or(false)
    }

    /// Preferred language
    #[must_use]
    pub fn lang(&self) -> Option<&Locale> {
        self.0.locale(attributes::LANG)
    }

    /// Free-text location
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.0.text(attributes::LOCATION)
    }

    /// Membership start time
    #[must_use]
    pub fn member_since(&self) -> Option<DateTime<Utc>> {
        self.0.date(attributes::MEMBER_SINCE)
    }

    /// Nickname
    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        self.0.text(attributes::NICKNAME)
    }

    /// Public profile page
    #[must_use]
    pub fn profile_url(&self) -> Option<&str> {
        self.0.text(attributes::PROFILE_URL)
    }

    /// Olson time zone name
    #[must_use]
    pub fn time_zone(&self) -> Option<&str> {
        self.0.text(attributes::TIME_ZONE)
    }

    /// Last update time
    #[must_use]
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.0.date(attributes::UPDATED)
    }

    /// Profile resource URI
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.0.text(attributes::URI)
    }

    /// Primary email, falling back to the first one listed
    #[must_use]
    pub fn primary_email(&self) -> Option<&YahooEmail> {
        let emails = self.emails();
        emails
            .iter()
            .find(|email| email.primary)
            .or_else(|| emails.first())
    }
}

impl From<YahooProfile> for UserProfile {
    fn from(profile: YahooProfile) -> Self {
        profile.0
    }
}

impl fmt::Display for YahooProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl CommonProfile for YahooProfile {
    fn email(&self) -> Option<&str> {
        self.primary_email()
            .and_then(|email| email.handle.as_deref())
    }

    fn first_name(&self) -> Option<&str> {
        self.given_name()
    }

    fn family_name(&self) -> Option<&str> {
        Self::family_name(self)
    }

    fn display_name(&self) -> Option<String> {
        match (self.given_name(), Self::family_name(self)) {
            (Some(given), Some(family)) => Some(format!("{given} {family}")),
            (Some(name), None) | (None, Some(name)) => Some(name.to_owned()),
            (None, None) => self.nickname().map(str::to_owned),
        }
    }

    fn username(&self) -> Option<&str> {
        self.nickname()
    }

    fn gender(&self) -> Gender {
        Self::gender(self)
    }

    fn locale(&self) -> Option<&Locale> {
        self.lang()
    }

    fn picture_url(&self) -> Option<&str> {
        self.image().and_then(|image| image.image_url.as_deref())
    }

    fn profile_url(&self) -> Option<&str> {
        Self::profile_url(self)
    }

    fn location(&self) -> Option<&str> {
        Self::location(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with(entries: Vec<(&str, AttributeValue)>) -> YahooProfile {
        let attributes = entries
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect();
        YahooProfile::new("yahoo", "GUID", attributes)
    }

    #[test]
    fn test_missing_lists_read_as_empty() {
        let profile = profile_with(vec![]);
        assert!(profile.addresses().is_empty());
        assert!(profile.emails().is_empty());
        assert!(profile.interests().is_empty());
        assert!(profile.disclosures().is_empty());
        assert!(profile.image().is_none());
        assert_eq!(profile.gender(), Gender::Unspecified);
        assert!(!profile.is_connected());
    }

    #[test]
    fn test_common_profile_prefers_primary_email() {
        let emails = vec![
            YahooEmail {
                id: 1,
                handle: Some("other@yahoo.fr".to_owned()),
                ..YahooEmail::default()
            },
            YahooEmail {
                id: 2,
                primary: true,
                handle: Some("main@yahoo.fr".to_owned()),
                ..YahooEmail::default()
            },
        ];
        let profile = profile_with(vec![
            (attributes::EMAILS, AttributeValue::Emails(emails)),
            (attributes::GIVEN_NAME, AttributeValue::Text("Test".to_owned())),
            (
                attributes::FAMILY_NAME,
                AttributeValue::Text("ScribeUP".to_owned()),
            ),
        ]);

        let common: &dyn CommonProfile = &profile;
        assert_eq!(common.email(), Some("main@yahoo.fr"));
        assert_eq!(common.display_name().as_deref(), Some("Test ScribeUP"));
        assert_eq!(common.first_name(), Some("Test"));
    }

    #[test]
    fn test_typed_id_uses_profile_type() {
        let profile = profile_with(vec![]);
        assert_eq!(profile.typed_id(), "YahooProfile#GUID");
        assert_eq!(profile.as_user_profile().profile_type(), "YahooProfile");
    }
}
