// ABOUTME: Converters for the nested entities of the Yahoo profile document
// ABOUTME: Address, disclosure, email, image, and interest objects parsed tolerantly from JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use oauth_profiles_core::converters::{
    to_boolean, to_date, to_integer, to_locale, to_string_list, to_text, DateFormat,
};
use oauth_profiles_core::models::{
    YahooAddress, YahooDisclosure, YahooEmail, YahooImage, YahooInterest,
};
use serde_json::{Map, Value};
use tracing::warn;

fn field<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    object.get(name).filter(|value| !value.is_null())
}

fn text(object: &Map<String, Value>, name: &str) -> Option<String> {
    field(object, name).and_then(to_text)
}

fn dimension(object: &Map<String, Value>, name: &str) -> u32 {
    field(object, name)
        .and_then(to_integer)
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or_default()
}

/// Postal address object
#[must_use]
pub fn to_address(value: &Value) -> Option<YahooAddress> {
    let object = value.as_object()?;
    Some(YahooAddress {
        id: field(object, "id").and_then(to_integer).unwrap_or_default(),
        current: field(object, "current")
            .and_then(to_boolean)
            .unwrap_or_default(),
        country: field(object, "country").and_then(to_locale),
        state: text(object, "state"),
        city: text(object, "city"),
        postal_code: text(object, "postalCode"),
        street: text(object, "street"),
        address_type: text(object, "type"),
    })
}

/// Disclosure acceptance object
#[must_use]
pub fn to_disclosure(value: &Value) -> Option<YahooDisclosure> {
    let object = value.as_object()?;
    Some(YahooDisclosure {
        acceptance: text(object, "acceptance"),
        name: text(object, "name"),
        seen: field(object, "seen").and_then(|seen| to_date(seen, DateFormat::Iso8601Utc)),
        version: text(object, "version"),
    })
}

/// Email object
#[must_use]
pub fn to_email(value: &Value) -> Option<YahooEmail> {
    let object = value.as_object()?;
    Some(YahooEmail {
        id: field(object, "id").and_then(to_integer).unwrap_or_default(),
        primary: field(object, "primary")
            .and_then(to_boolean)
            .unwrap_or_default(),
        handle: text(object, "handle"),
        email_type: text(object, "type"),
    })
}

/// Image object
#[must_use]
pub fn to_image(value: &Value) -> Option<YahooImage> {
    let object = value.as_object()?;
    Some(YahooImage {
        image_url: text(object, "imageUrl"),
        width: dimension(object, "width"),
        height: dimension(object, "height"),
        size: text(object, "size"),
    })
}

/// Interest category object
#[must_use]
pub fn to_interest(value: &Value) -> Option<YahooInterest> {
    let object = value.as_object()?;
    Some(YahooInterest {
        declared_interests: field(object, "declaredInterests")
            .map(to_string_list)
            .unwrap_or_default(),
        interest_category: text(object, "interestCategory"),
    })
}

/// Array of entities, skipping items that are not objects.
///
/// A single object is accepted as a one-element list. Returns `None` when the
/// value is neither.
#[must_use]
pub fn to_list<T>(key: &str, value: &Value, convert: fn(&Value) -> Option<T>) -> Option<Vec<T>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| {
                    let converted = convert(item);
                    if converted.is_none() {
                        warn!("Skipping malformed Yahoo {key} entry: {item}");
                    }
                    converted
                })
                .collect(),
        ),
        Value::Object(_) => convert(value).map(|entity| vec![entity]),
        _ => None,
    }
}
