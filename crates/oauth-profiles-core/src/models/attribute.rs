// ABOUTME: Typed attribute values held in a user profile's attribute map
// ABOUTME: Closed enum of scalar, structured, and nested-entity values with typed accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::gender::Gender;
use super::locale::Locale;
use super::yahoo::{YahooAddress, YahooDisclosure, YahooEmail, YahooImage, YahooInterest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A converted profile attribute.
///
/// Attributes the provider mapper does not know are kept as [`Self::Raw`]
/// JSON so that nothing present in the payload is silently lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    /// Free text
    Text(String),
    /// Whole number
    Integer(i64),
    /// Flag
    Boolean(bool),
    /// Point in time, UTC
    Date(DateTime<Utc>),
    /// Gender code
    Gender(Gender),
    /// Language and country
    Locale(Locale),
    /// Profile picture
    Image(YahooImage),
    /// Postal addresses
    Addresses(Vec<YahooAddress>),
    /// Terms-of-service disclosures
    Disclosures(Vec<YahooDisclosure>),
    /// Email addresses
    Emails(Vec<YahooEmail>),
    /// Declared interests grouped by category
    Interests(Vec<YahooInterest>),
    /// Unrecognized attribute, kept verbatim
    Raw(serde_json::Value),
}

impl AttributeValue {
    /// Text value, if this is [`Self::Text`]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Integer value, if this is [`Self::Integer`]
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Boolean value, if this is [`Self::Boolean`]
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Timestamp, if this is [`Self::Date`]
    #[must_use]
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(value) => Some(*value),
            _ => None,
        }
    }

    /// Gender, if this is [`Self::Gender`]
    #[must_use]
    pub const fn as_gender(&self) -> Option<Gender> {
        match self {
            Self::Gender(value) => Some(*value),
            _ => None,
        }
    }

    /// Locale, if this is [`Self::Locale`]
    #[must_use]
    pub const fn as_locale(&self) -> Option<&Locale> {
        match self {
            Self::Locale(value) => Some(value),
            _ => None,
        }
    }

    /// Image, if this is [`Self::Image`]
    #[must_use]
    pub const fn as_image(&self) -> Option<&YahooImage> {
        match self {
            Self::Image(value) => Some(value),
            _ => None,
        }
    }

    /// Addresses, if this is [`Self::Addresses`]
    #[must_use]
    pub fn as_addresses(&self) -> Option<&[YahooAddress]> {
        match self {
            Self::Addresses(value) => Some(value),
            _ => None,
        }
    }

    /// Disclosures, if this is [`Self::Disclosures`]
    #[must_use]
    pub fn as_disclosures(&self) -> Option<&[YahooDisclosure]> {
        match self {
            Self::Disclosures(value) => Some(value),
            _ => None,
        }
    }

    /// Emails, if this is [`Self::Emails`]
    #[must_use]
    pub fn as_emails(&self) -> Option<&[YahooEmail]> {
        match self {
            Self::Emails(value) => Some(value),
            _ => None,
        }
    }

    /// Interests, if this is [`Self::Interests`]
    #[must_use]
    pub fn as_interests(&self) -> Option<&[YahooInterest]> {
        match self {
            Self::Interests(value) => Some(value),
            _ => None,
        }
    }
}
