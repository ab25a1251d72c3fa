// ABOUTME: Yahoo profile attribute definitions and the JSON profile mapper
// ABOUTME: Converts the Social API profile document into a typed YahooProfile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::constants::{GENDER_FEMALE, GENDER_MALE, PROFILE_NODE};
use super::converters::{to_address, to_disclosure, to_email, to_image, to_interest, to_list};
use oauth_profiles_core::constants::oauth_providers::YAHOO;
use oauth_profiles_core::converters::{convert, AttributeKind, DateFormat};
use oauth_profiles_core::models::yahoo::attributes as keys;
use oauth_profiles_core::models::{AttributeValue, YahooProfile};
use oauth_profiles_core::{ProviderError, ProviderResult};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// How one Yahoo attribute is converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YahooAttribute {
    /// Scalar value
    Scalar(AttributeKind),
    /// List of [`oauth_profiles_core::models::YahooAddress`]
    Addresses,
    /// List of [`oauth_profiles_core::models::YahooDisclosure`]
    Disclosures,
    /// List of [`oauth_profiles_core::models::YahooEmail`]
    Emails,
    /// Single [`oauth_profiles_core::models::YahooImage`]
    Image,
    /// List of [`oauth_profiles_core::models::YahooInterest`]
    Interests,
}

const TEXT: YahooAttribute = YahooAttribute::Scalar(AttributeKind::Text);
const INTEGER: YahooAttribute = YahooAttribute::Scalar(AttributeKind::Integer);
const ISO_DATE: YahooAttribute =
    YahooAttribute::Scalar(AttributeKind::Date(DateFormat::Iso8601Utc));

/// The attributes Yahoo profiles are known to carry
pub const DEFINITIONS: &[(&str, YahooAttribute)] = &[
    (keys::ABOUT_ME, TEXT),
    (keys::ADDRESSES, YahooAttribute::Addresses),
    (keys::BIRTH_YEAR, INTEGER),
    (
        keys::BIRTHDATE,
        YahooAttribute::Scalar(AttributeKind::Date(DateFormat::MonthDay)),
    ),
    (keys::CREATED, ISO_DATE),
    (keys::DISPLAY_AGE, INTEGER),
    (keys::DISCLOSURES, YahooAttribute::Disclosures),
    (keys::EMAILS, YahooAttribute::Emails),
    (keys::FAMILY_NAME, TEXT),
    (
        keys::GENDER,
        YahooAttribute::Scalar(AttributeKind::Gender {
            male: GENDER_MALE,
            female: GENDER_FEMALE,
        }),
    ),
    (keys::GIVEN_NAME, TEXT),
    (keys::IMAGE, YahooAttribute::Image),
    (keys::INTERESTS, YahooAttribute::Interests),
    (
        keys::IS_CONNECTED,
        YahooAttribute::Scalar(AttributeKind::Boolean),
    ),
    (keys::LANG, YahooAttribute::Scalar(AttributeKind::Locale)),
    (keys::LOCATION, TEXT),
    (keys::MEMBER_SINCE, ISO_DATE),
    (keys::NICKNAME, TEXT),
    (keys::PROFILE_URL, TEXT),
    (keys::TIME_ZONE, TEXT),
    (keys::UPDATED, ISO_DATE),
    (keys::URI, TEXT),
];

/// Definition for a known attribute key
#[must_use]
pub fn definition(key: &str) -> Option<YahooAttribute> {
    DEFINITIONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, attribute)| *attribute)
}

/// Convert one attribute value.
///
/// Unknown keys are kept as [`AttributeValue::Raw`]; known keys whose value
/// cannot be converted yield `None`.
#[must_use]
pub fn convert_attribute(key: &str, value: &Value) -> Option<AttributeValue> {
    let Some(attribute) = definition(key) else {
        return Some(AttributeValue::Raw(value.clone()));
    };

    match attribute {
        YahooAttribute::Scalar(kind) => convert(kind, value),
        YahooAttribute::Addresses => {
            to_list(key, value, to_address).map(AttributeValue::Addresses)
        }
        YahooAttribute::Disclosures => {
            to_list(key, value, to_disclosure).map(AttributeValue::Disclosures)
        }
        YahooAttribute::Emails => to_list(key, value, to_email).map(AttributeValue::Emails),
        YahooAttribute::Image => to_image(value).map(AttributeValue::Image),
        YahooAttribute::Interests => {
            to_list(key, value, to_interest).map(AttributeValue::Interests)
        }
    }
}

/// Map a Yahoo profile JSON document (`{"profile": {...}}`) to a profile
///
/// # Errors
///
/// Returns [`ProviderError::ProfileFetchFailed`] if `body` is not JSON, and
/// [`ProviderError::MalformedProfile`] if the `profile` node or its `guid` is
/// missing or blank.
pub fn map_profile(body: &str) -> ProviderResult<YahooProfile> {
    let document: Value = serde_json::from_str(body).map_err(|e| {
        ProviderError::profile_fetch(YAHOO, None, format!("profile is not valid JSON: {e}"))
    })?;

    let profile = document
        .get(PROFILE_NODE)
        .and_then(Value::as_object)
        .ok_or_else(|| {
            ProviderError::malformed_profile(YAHOO, format!("missing {PROFILE_NODE} node"))
        })?;

    let guid = profile
        .get(keys::GUID)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|guid| !guid.is_empty())
        .ok_or_else(|| {
            ProviderError::malformed_profile(YAHOO, format!("missing {}", keys::GUID))
        })?;

    let mut attributes = BTreeMap::new();
    for (key, value) in profile {
        if key == keys::GUID || value.is_null() {
            continue;
        }
        match convert_attribute(key, value) {
            Some(converted) => {
                attributes.insert(key.clone(), converted);
            }
            None => warn!("Dropping Yahoo attribute {key}: cannot convert {value}"),
        }
    }

    debug!(
        "Mapped Yahoo profile {guid} with {} attributes",
        attributes.len()
    );
    Ok(YahooProfile::new(YAHOO, guid, attributes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use oauth_profiles_core::models::{Gender, Locale};
    use serde_json::json;

    fn body(profile: &Value) -> String {
        json!({ "profile": profile }).to_string()
    }

    #[test]
    fn test_definitions_cover_twenty_two_attributes() {
        assert_eq!(DEFINITIONS.len(), 22);
        assert!(definition(keys::GUID).is_none());
    }

    #[test]
    fn test_scalar_conversions() {
        let profile = map_profile(&body(&json!({
            "guid": "ABC",
            "birthYear": "1976",
            "birthdate": "12/25",
            "gender": "F",
            "lang": "fr-FR",
            "isConnected": "true",
            "updated": "2012-03-17T21:43:04Z"
        })))
        .unwrap();

        assert_eq!(profile.id(), "ABC");
        assert_eq!(profile.birth_year(), Some(1976));
        assert_eq!(profile.gender(), Gender::Female);
        assert_eq!(profile.lang(), Some(&Locale::new("fr", Some("FR"))));
        assert!(profile.is_connected());

        let birthdate = profile.birthdate().unwrap();
        assert_eq!((birthdate.year(), birthdate.month(), birthdate.day()), (1970, 12, 25));
        assert_eq!(profile.updated().map(|d| d.hour()), Some(21));
    }

    #[test]
    fn test_unconvertible_values_are_dropped() {
        let profile = map_profile(&body(&json!({
            "guid": "ABC",
            "birthYear": "nineteen",
            "created": "yesterday",
            "nickname": "Test",
            "uri": null
        })))
        .unwrap();

        assert_eq!(profile.attributes().len(), 1);
        assert_eq!(profile.nickname(), Some("Test"));
    }

    #[test]
    fn test_unknown_attributes_are_kept_raw() {
        let profile = map_profile(&body(&json!({
            "guid": "ABC",
            "ageCategory": "A"
        })))
        .unwrap();

        assert_eq!(
            profile.attributes().get("ageCategory"),
            Some(&AttributeValue::Raw(json!("A")))
        );
    }

    #[test]
    fn test_missing_guid_is_malformed() {
        for profile in [json!({"nickname": "Test"}), json!({"guid": "  "}), json!({"guid": 7})] {
            let err = map_profile(&body(&profile)).unwrap_err();
            assert!(matches!(err, ProviderError::MalformedProfile { .. }), "{err:?}");
        }

        let err = map_profile(r#"{"guid": "ABC"}"#).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedProfile { .. }));
    }

    #[test]
    fn test_invalid_json_is_fetch_failure() {
        let err = map_profile("<html>").unwrap_err();
        assert!(matches!(err, ProviderError::ProfileFetchFailed { .. }));
    }
}
