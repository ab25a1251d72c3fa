// ABOUTME: Integration tests for mapping Yahoo profile documents to typed profiles
// ABOUTME: Checks every attribute of the recorded profile and the malformed-document paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{TimeZone, Utc};
use oauth_profiles::models::yahoo::attributes;
use oauth_profiles::models::{CommonProfile, Gender, UserProfile};
use oauth_profiles::yahoo::map_profile;
use oauth_profiles::ProviderError;

#[test]
fn test_recorded_profile_maps_every_attribute() {
    common::init_test_logging();
    let profile = map_profile(common::yahoo_profile_fixture()).unwrap();

    assert_eq!(profile.id(), common::TEST_GUID);
    assert_eq!(profile.typed_id(), "YahooProfile#PCSXZCYSWC6XUJNMZKRGWVPHNU");
    assert_eq!(profile.attributes().len(), 22);
    assert!(!profile.attributes().contains_key(attributes::GUID));

    assert_eq!(profile.about_me(), Some("my profile"));
    assert_eq!(profile.birth_year(), Some(1976));
    assert_eq!(
        profile.birthdate(),
        Some(Utc.with_ymd_and_hms(1970, 7, 9, 0, 0, 0).unwrap())
    );
    assert_eq!(
        profile.created(),
        Some(Utc.with_ymd_and_hms(2012, 3, 14, 21, 13, 5).unwrap())
    );
    assert_eq!(profile.display_age(), Some(36));
    assert_eq!(profile.family_name(), Some("ScribeUP"));
    assert_eq!(profile.given_name(), Some("Test"));
    assert_eq!(profile.gender(), Gender::Male);
    assert!(profile.is_connected());
    assert_eq!(profile.location(), Some("Chatou, Ile-de-France"));
    assert_eq!(
        profile.member_since(),
        Some(Utc.with_ymd_and_hms(2012, 3, 13, 21, 42, 0).unwrap())
    );
    assert_eq!(profile.nickname(), Some("Test"));
    assert_eq!(
        profile.profile_url(),
        Some("http://profile.yahoo.com/PCSXZCYSWC6XUJNMZKRGWVPHNU")
    );
    assert_eq!(profile.time_zone(), Some("Europe/Paris"));
    assert_eq!(
        profile.updated(),
        Some(Utc.with_ymd_and_hms(2012, 3, 17, 21, 43, 4).unwrap())
    );
    assert_eq!(
        profile.uri(),
        Some("http://social.yahooapis.com/v1/user/PCSXZCYSWC6XUJNMZKRGWVPHNU/profile")
    );

    let lang = profile.lang().unwrap();
    assert_eq!(lang.language(), "fr");
    assert_eq!(lang.country(), Some("FR"));
    assert_eq!(lang.to_string(), "fr-FR");
}

#[test]
fn test_recorded_profile_nested_entities() {
    let profile = map_profile(common::yahoo_profile_fixture()).unwrap();

    let addresses = profile.addresses();
    assert_eq!(addresses.len(), 2);
    let home = &addresses[0];
    assert_eq!(home.id, 3);
    assert!(home.current);
    assert_eq!(home.country.as_ref().map(|c| c.language()), Some("fr"));
    assert_eq!(home.postal_code.as_deref(), Some("78400"));
    assert_eq!(home.state.as_deref(), Some(""));
    assert_eq!(home.street.as_deref(), Some(""));
    assert_eq!(home.address_type.as_deref(), Some("HOME"));
    let work = &addresses[1];
    assert_eq!(work.id, 4);
    assert_eq!(work.state.as_deref(), Some(""));
    assert_eq!(work.street.as_deref(), Some(""));
    assert_eq!(work.address_type.as_deref(), Some("WORK"));

    let disclosures = profile.disclosures();
    assert_eq!(disclosures.len(), 2);
    assert_eq!(disclosures[0].acceptance.as_deref(), Some("1"));
    assert_eq!(disclosures[0].name.as_deref(), Some("bd"));
    assert_eq!(
        disclosures[0].seen,
        Some(Utc.with_ymd_and_hms(2012, 3, 14, 21, 13, 5).unwrap())
    );
    assert_eq!(disclosures[0].version.as_deref(), Some("1"));
    assert_eq!(disclosures[1].name.as_deref(), Some("loc"));

    let emails = profile.emails();
    assert_eq!(emails.len(), 2);
    assert_eq!(emails[0].id, 1);
    assert!(!emails[0].primary);
    assert_eq!(emails[0].handle.as_deref(), Some("testscribeup@yahoo.com"));
    assert_eq!(emails[0].email_type.as_deref(), Some("HOME"));
    assert_eq!(emails[1].id, 2);
    assert!(emails[1].primary);
    assert_eq!(emails[1].handle.as_deref(), Some("testscribeup@yahoo.fr"));
    assert_eq!(emails[1].email_type.as_deref(), Some("HOME"));
    assert_eq!(profile.primary_email(), Some(&emails[1]));

    let image = profile.image().unwrap();
    assert_eq!(image.width, 150);
    assert_eq!(image.height, 225);
    assert_eq!(image.size.as_deref(), Some("150x225"));
    assert_eq!(
        image.image_url.as_deref(),
        Some("http://avatars.zenfs.com/users/1DJGkdA6uAAECQWEo8AceAQ==.large.png")
    );

    let interests = profile.interests();
    assert_eq!(interests.len(), 11);
    assert_eq!(interests[0].declared_interests, vec!["basic interest"]);
    assert_eq!(interests[0].interest_category.as_deref(), Some("prfFavHobbies"));
    assert_eq!(interests[10].interest_category.as_deref(), Some("prfFavMisc"));
}

#[test]
fn test_common_profile_view() {
    let profile = map_profile(common::yahoo_profile_fixture()).unwrap();

    assert_eq!(CommonProfile::email(&profile), Some("testscribeup@yahoo.fr"));
    assert_eq!(profile.first_name(), Some("Test"));
    assert_eq!(profile.display_name().as_deref(), Some("Test ScribeUP"));
    assert_eq!(profile.username(), Some("Test"));
    assert_eq!(CommonProfile::gender(&profile), Gender::Male);
    assert_eq!(
        profile.picture_url(),
        Some("http://avatars.zenfs.com/users/1DJGkdA6uAAECQWEo8AceAQ==.large.png")
    );
}

#[test]
fn test_mapping_is_deterministic() {
    let first = map_profile(common::yahoo_profile_fixture()).unwrap();
    let second = map_profile(common::yahoo_profile_fixture()).unwrap();
    assert_eq!(first, second);

    let generic: UserProfile = second.into();
    assert_eq!(generic.provider(), "yahoo");
    assert_eq!(generic.profile_type(), "YahooProfile");
    assert_eq!(generic.attributes().len(), 22);
}

#[test]
fn test_minimal_profile_reads_empty_lists() {
    let profile = map_profile(r#"{"profile": {"guid": "ABC", "nickname": "Jo"}}"#).unwrap();

    assert_eq!(profile.attributes().len(), 1);
    assert!(profile.addresses().is_empty());
    assert!(profile.disclosures().is_empty());
    assert!(profile.emails().is_empty());
    assert!(profile.interests().is_empty());
    assert!(profile.image().is_none());
    assert_eq!(profile.gender(), Gender::Unspecified);
    assert!(!profile.is_connected());
    assert_eq!(profile.primary_email(), None);
    assert_eq!(profile.display_name().as_deref(), Some("Jo"));
}

#[test]
fn test_missing_guid_is_malformed() {
    for body in [
        r#"{"profile": {"nickname": "Jo"}}"#,
        r#"{"profile": {"guid": "", "nickname": "Jo"}}"#,
        r#"{"profile": {"guid": null}}"#,
        r#"{"error": {"description": "Not Found"}}"#,
    ] {
        let err = map_profile(body).unwrap_err();
        assert!(
            matches!(err, ProviderError::MalformedProfile { .. }),
            "{body} gave {err:?}"
        );
        assert!(!err.is_retryable());
    }
}

#[test]
fn test_invalid_json_is_a_fetch_failure() {
    let err = map_profile("<html>Service Unavailable</html>").unwrap_err();
    assert!(matches!(
        err,
        ProviderError::ProfileFetchFailed {
            status_code: None,
            ..
        }
    ));
}

#[test]
fn test_unknown_and_null_fields() {
    let profile = map_profile(
        r#"{"profile": {"guid": "ABC", "nickname": null, "birthYear": "1976", "favoriteColour": "blue"}}"#,
    )
    .unwrap();

    assert_eq!(profile.nickname(), None);
    assert_eq!(profile.birth_year(), Some(1976));
    assert!(profile.attributes().contains_key("favoriteColour"));
    assert_eq!(profile.attributes().len(), 2);
}

#[test]
fn test_leap_day_birthdate_is_kept() {
    let profile = map_profile(r#"{"profile": {"guid": "ABC", "birthdate": "02/29"}}"#).unwrap();

    assert_eq!(
        profile.birthdate(),
        Some(Utc.with_ymd_and_hms(1970, 3, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(profile.attributes().len(), 1);
}
