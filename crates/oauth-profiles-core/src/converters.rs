// ABOUTME: Tolerant conversion of raw JSON values into typed profile attributes
// ABOUTME: Scalar converters for text, numbers, flags, dates, gender, and locale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Attribute converters
//!
//! Providers send loosely typed JSON: numbers arrive as strings, flags as
//! `"true"`, dates in provider-specific layouts. Every converter here returns
//! `None` when the value cannot be converted, and JSON `null` always counts as
//! absent. Mappers decide whether to drop or reject a missing value.

use crate::models::{AttributeValue, Gender, Locale};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Date layouts understood by [`to_date`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `yyyy-MM-ddTHH:mm:ssZ`, always UTC
    Iso8601Utc,
    /// `MM/dd` with no year; the year is fixed to 1970 and `02/29` rolls
    /// over to March 1
    MonthDay,
}

impl DateFormat {
    /// Year assigned to dates that carry only a month and a day
    pub const MONTH_DAY_YEAR: i32 = 1970;

    const ISO_8601_UTC: &'static str = "%Y-%m-%dT%H:%M:%SZ";
}

/// Kind of attribute a provider field converts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Free text
    Text,
    /// Whole number
    Integer,
    /// Flag
    Boolean,
    /// Timestamp in the given layout
    Date(DateFormat),
    /// Gender with the provider's male and female codes
    Gender {
        /// Code meaning male
        male: &'static str,
        /// Code meaning female
        female: &'static str,
    },
    /// Language/country code
    Locale,
}

/// Convert a scalar value according to its declared kind
#[must_use]
pub fn convert(kind: AttributeKind, value: &Value) -> Option<AttributeValue> {
    match kind {
        AttributeKind::Text => to_text(value).map(AttributeValue::Text),
        AttributeKind::Integer => to_integer(value).map(AttributeValue::Integer),
        AttributeKind::Boolean => to_boolean(value).map(AttributeValue::Boolean),
        AttributeKind::Date(format) => to_date(value, format).map(AttributeValue::Date),
        AttributeKind::Gender { male, female } => {
            to_gender(value, male, female).map(AttributeValue::Gender)
        }
        AttributeKind::Locale => to_locale(value).map(AttributeValue::Locale),
    }
}

/// Text from a string, or from a number or flag rendered as text
#[must_use]
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Integer from a JSON number or a numeric string
#[must_use]
pub fn to_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Flag from a JSON boolean or `"true"`/`"false"`/`"1"`/`"0"`
#[must_use]
pub fn to_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// UTC timestamp from a string in the given layout
#[must_use]
pub fn to_date(value: &Value, format: DateFormat) -> Option<DateTime<Utc>> {
    let text = value.as_str()?.trim();
    match format {
        DateFormat::Iso8601Utc => NaiveDateTime::parse_from_str(text, DateFormat::ISO_8601_UTC)
            .ok()
            .map(|naive| naive.and_utc()),
        DateFormat::MonthDay => {
            let (month, day) = text.split_once('/')?;
            let month = month.trim().parse().ok()?;
            let day = day.trim().parse().ok()?;
            let date = match (month, day) {
                (2, 29) => NaiveDate::from_ymd_opt(DateFormat::MONTH_DAY_YEAR, 3, 1),
                _ => NaiveDate::from_ymd_opt(DateFormat::MONTH_DAY_YEAR, month, day),
            };
            date.and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        }
    }
}

/// Gender from a provider code; non-string values are absent
#[must_use]
pub fn to_gender(value: &Value, male_code: &str, female_code: &str) -> Option<Gender> {
    value
        .as_str()
        .map(|code| Gender::from_code(code, male_code, female_code))
}

/// Locale from `fr`, `fr-FR` or `fr_FR`
#[must_use]
pub fn to_locale(value: &Value) -> Option<Locale> {
    value.as_str().and_then(Locale::parse)
}

/// List of strings; non-string items are skipped
#[must_use]
pub fn to_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(to_text).collect(),
        Value::String(text) => vec![text.clone()],
        _ => Vec::new(),
    }
}
