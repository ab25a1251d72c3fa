// ABOUTME: OAuth 1.0a request signing (RFC 5849) with HMAC-SHA1
// ABOUTME: Builds signature base strings, signs them with ring, and renders the Authorization header
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # OAuth 1.0a Signing
//!
//! Only the HMAC-SHA1 method is supported. A request is signed by collecting
//! the protocol parameters, the URL query parameters and any form body
//! parameters, normalizing them into a signature base string, and keying an
//! HMAC with the consumer secret and token secret.

use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use oauth_profiles_core::constants::oauth1;
use rand::{distributions::Alphanumeric, Rng};
use ring::hmac;
use std::collections::BTreeMap;
use url::{form_urlencoded, Url};

/// Length of generated nonces
const NONCE_LENGTH: usize = 32;

/// Percent-encode a value per RFC 5849 section 3.6
///
/// Only the unreserved characters `A-Z a-z 0-9 - . _ ~` are left as-is.
#[must_use]
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Random alphanumeric nonce
#[must_use]
pub fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

/// Base string URI: scheme and host lower-cased, default port and query dropped
#[must_use]
pub fn base_string_uri(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    let port = url.port().map(|port| format!(":{port}")).unwrap_or_default();
    format!("{}://{host}{port}{}", url.scheme(), url.path())
}

/// Normalized parameter string: encoded pairs sorted by name then value
#[must_use]
pub fn normalize_parameters<'a, I>(parameters: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut encoded: Vec<(String, String)> = parameters
        .into_iter()
        .map(|(name, value)| (percent_encode(name), percent_encode(value)))
        .collect();
    encoded.sort();
    encoded
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a form-encoded token endpoint response into a map
#[must_use]
pub fn parse_form_response(body: &str) -> BTreeMap<String, String> {
    form_urlencoded::parse(body.trim().as_bytes())
        .into_owned()
        .collect()
}

/// Signs requests for one consumer, optionally on behalf of a token holder.
///
/// # Examples
///
/// ```rust
/// use oauth_profiles_providers::oauth1::Signer;
/// use url::Url;
///
/// let url = Url::parse("http://photos.example.net/photos?file=vacation.jpg&size=original").unwrap();
/// let signer = Signer::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
///     .with_token("nnch734d00sl2jdk", "pfkkdhi9sl3r4s00");
/// let header = signer.authorization_header_with(
///     "GET", &url, &[], &[], "kllo9940pd9333jh", 1_191_242_096,
/// );
/// assert!(header.contains("oauth_signature=\"tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D\""));
/// ```
#[derive(Clone, Copy)]
pub struct Signer<'a> {
    consumer_key: &'a str,
    consumer_secret: &'a str,
    token: Option<(&'a str, &'a str)>,
}

impl<'a> Signer<'a> {
    /// Signer for consumer-only requests (request-token call)
    #[must_use]
    pub const fn new(consumer_key: &'a str, consumer_secret: &'a str) -> Self {
        Self {
            consumer_key,
            consumer_secret,
            token: None,
        }
    }

    /// Sign on behalf of a request or access token
    #[must_use]
    pub const fn with_token(self, token: &'a str, token_secret: &'a str) -> Self {
        Self {
            token: Some((token, token_secret)),
            ..self
        }
    }

    /// `Authorization` header value with a fresh nonce and the current time
    #[must_use]
    pub fn authorization_header(
        &self,
        method: &str,
        url: &Url,
        extra_oauth: &[(&str, &str)],
        form_body: &[(&str, &str)],
    ) -> String {
        self.authorization_header_with(
            method,
            url,
            extra_oauth,
            form_body,
            &generate_nonce(),
            Utc::now().timestamp(),
        )
    }

    /// `Authorization` header value with a caller-supplied nonce and timestamp
    #[must_use]
    pub fn authorization_header_with(
        &self,
        method: &str,
        url: &Url,
        extra_oauth: &[(&str, &str)],
        form_body: &[(&str, &str)],
        nonce: &str,
        timestamp: i64,
    ) -> String {
        let mut protocol = self.protocol_parameters(nonce, timestamp);
        protocol.extend(
            extra_oauth
                .iter()
                .map(|(name, value)| ((*name).to_owned(), (*value).to_owned())),
        );

        let signature = self.signature(method, url, &protocol, form_body);
        protocol.push((oauth1::SIGNATURE.to_owned(), signature));
        protocol.sort();

        let fields = protocol
            .iter()
            .map(|(name, value)| format!("{}=\"{}\"", percent_encode(name), percent_encode(value)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("OAuth {fields}")
    }

    /// Base64 HMAC-SHA1 signature over the request
    #[must_use]
    pub fn signature(
        &self,
        method: &str,
        url: &Url,
        protocol: &[(String, String)],
        form_body: &[(&str, &str)],
    ) -> String {
        let base = signature_base_string(method, url, protocol, form_body);
        let token_secret = self.token.map_or("", |(_, secret)| secret);
        let signing_key = format!(
            "{}&{}",
            percent_encode(self.consumer_secret),
            percent_encode(token_secret)
        );

        let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, signing_key.as_bytes());
        let tag = hmac::sign(&key, base.as_bytes());
        general_purpose::STANDARD.encode(tag.as_ref())
    }

    fn protocol_parameters(&self, nonce: &str, timestamp: i64) -> Vec<(String, String)> {
        let mut parameters = vec![
            (oauth1::CONSUMER_KEY.to_owned(), self.consumer_key.to_owned()),
            (oauth1::NONCE.to_owned(), nonce.to_owned()),
            (oauth1::SIGNATURE_METHOD.to_owned(), oauth1::HMAC_SHA1.to_owned()),
            (oauth1::TIMESTAMP.to_owned(), timestamp.to_string()),
            (oauth1::VERSION.to_owned(), oauth1::VERSION_1_0.to_owned()),
        ];
        if let Some((token, _)) = self.token {
            parameters.push((oauth1::TOKEN.to_owned(), token.to_owned()));
        }
        parameters
    }
}

impl std::fmt::Debug for Signer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("consumer_key", &self.consumer_key)
            .field("token", &self.token.map(|(token, _)| token))
            .finish_non_exhaustive()
    }
}

/// `METHOD&enc(base uri)&enc(normalized parameters)`
#[must_use]
pub fn signature_base_string(
    method: &str,
    url: &Url,
    protocol: &[(String, String)],
    form_body: &[(&str, &str)],
) -> String {
    let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let parameters = protocol
        .iter()
        .chain(query.iter())
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .chain(form_body.iter().copied());

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(&base_string_uri(url)),
        percent_encode(&normalize_parameters(parameters))
    )
}
