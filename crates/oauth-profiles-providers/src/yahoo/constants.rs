// ABOUTME: Yahoo Social API constants
// ABOUTME: Gender codes, profile document paths, and GUID document markers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Gender code Yahoo uses for male
pub const GENDER_MALE: &str = "M";

/// Gender code Yahoo uses for female
pub const GENDER_FEMALE: &str = "F";

/// Root node of the JSON profile document
pub const PROFILE_NODE: &str = "profile";

/// GUID lookup, relative to the API base URL
pub const GUID_PATH: &str = "/me/guid?format=xml";

/// Opening tag around the GUID in the XML document
pub const GUID_VALUE_OPEN: &str = "<value>";

/// Closing tag around the GUID in the XML document
pub const GUID_VALUE_CLOSE: &str = "</value>";

/// Profile URL for a GUID, relative to the API base URL
#[must_use]
pub fn profile_path(guid: &str) -> String {
    format!("/user/{}/profile?format=json", urlencoding::encode(guid))
}
