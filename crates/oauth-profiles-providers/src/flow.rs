// ABOUTME: Provider-independent OAuth 1.0a three-legged flow over an injected HTTP client
// ABOUTME: Request token, authorization redirect, callback verification, access token, signed API calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::core::{
    request_token_key, AccessToken, CallbackParameters, OAuthCredential, ProviderConfig,
    RequestToken,
};
use crate::oauth1::{parse_form_response, Signer};
use crate::session::UserSession;
use oauth_profiles_core::constants::oauth1;
use oauth_profiles_core::{ProviderError, ProviderResult};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use url::Url;

/// Status and body of a successful signed API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
}

/// The OAuth 1.0a dance for one configured consumer.
///
/// Holds no per-user state; the pending request token travels through the
/// caller's session.
#[derive(Debug, Clone)]
pub struct OAuth1Flow {
    config: ProviderConfig,
    client: Client,
}

impl OAuth1Flow {
    /// Flow for `config`, sending requests through `client`
    #[must_use]
    pub const fn new(config: ProviderConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Current configuration
    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Mutable configuration
    pub fn config_mut(&mut self) -> &mut ProviderConfig {
        &mut self.config
    }

    /// Replace the HTTP client
    pub fn set_client(&mut self, client: Client) {
        self.client = client;
    }

    fn provider(&self) -> &str {
        &self.config.name
    }

    fn signer(&self) -> Signer<'_> {
        Signer::new(&self.config.consumer_key, &self.config.consumer_secret)
    }

    fn parse_endpoint(&self, url: &str) -> ProviderResult<Url> {
        Url::parse(url).map_err(|e| {
            ProviderError::configuration(self.provider(), format!("invalid endpoint {url:?}: {e}"))
        })
    }

    /// Ask the provider for an unauthorized request token
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::AuthExchangeFailed`] on transport failure, a
    /// non-success status, or a response without token and secret.
    pub async fn request_token(&self) -> ProviderResult<RequestToken> {
        let url = self.parse_endpoint(&self.config.request_token_url)?;
        let header = self.signer().authorization_header(
            "POST",
            &url,
            &[(oauth1::CALLBACK, &self.config.callback_url)],
            &[],
        );

        debug!("Requesting {} request token from {url}", self.provider());
        let fields = self.token_exchange(url, header).await?;
        let (token, secret, _) = self.split_token_response(fields)?;
        Ok(RequestToken { token, secret })
    }

    /// Obtain a request token, store it in the session, and return the
    /// provider's authorization URL for it
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::AuthExchangeFailed`] if the request-token call
    /// fails.
    pub async fn authorization_url(
        &self,
        session: &mut dyn UserSession,
    ) -> ProviderResult<String> {
        let request_token = self.request_token().await?;

        let stored = serde_json::to_string(&request_token).map_err(|e| {
            ProviderError::auth_exchange(
                self.provider(),
                None,
                format!("cannot store request token: {e}"),
            )
        })?;
        session.set_attribute(&request_token_key(self.provider()), stored);

        let mut url = self.parse_endpoint(&self.config.authorization_url)?;
        url.query_pairs_mut()
            .append_pair(oauth1::TOKEN, &request_token.token);

        info!(
            provider = %self.provider(),
            "Issued authorization URL for pending request token"
        );
        Ok(url.into())
    }

    /// Match callback parameters against the session's pending request token.
    ///
    /// The pending token is removed from the session only when the callback
    /// is accepted, so a replayed callback fails.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::AccessDenied`] if the callback reports a
    /// refusal, and [`ProviderError::InvalidState`] if the token or verifier
    /// is missing or repeated, no token is pending, or the tokens differ.
    pub fn credential(
        &self,
        session: &mut dyn UserSession,
        parameters: &CallbackParameters,
    ) -> ProviderResult<OAuthCredential> {
        let provider = self.provider();

        if let Some(reason) = parameters
            .first(oauth1::DENIED)
            .or_else(|| parameters.first(oauth1::PROBLEM))
        {
            warn!(provider = %provider, "User denied access: {reason}");
            return Err(ProviderError::access_denied(provider, reason));
        }

        let token = self.single_parameter(parameters, oauth1::TOKEN)?;
        let verifier = self.single_parameter(parameters, oauth1::VERIFIER)?;

        let key = request_token_key(provider);
        let stored = session.get_attribute(&key).ok_or_else(|| {
            ProviderError::invalid_state(provider, "no pending request token in session")
        })?;
        let request_token: RequestToken = serde_json::from_str(&stored).map_err(|e| {
            ProviderError::invalid_state(provider, format!("unreadable pending request token: {e}"))
        })?;

        if request_token.token != token {
            warn!(provider = %provider, "Callback token does not match the pending request token");
            return Err(ProviderError::invalid_state(
                provider,
                "callback token does not match the pending request token",
            ));
        }

        session.remove_attribute(&key);
        Ok(OAuthCredential::new(provider, request_token, verifier))
    }

    fn single_parameter<'p>(
        &self,
        parameters: &'p CallbackParameters,
        name: &str,
    ) -> ProviderResult<&'p str> {
        match parameters.values(name) {
            [value] if !value.trim().is_empty() => Ok(value.as_str()),
            [] | [_] => Err(ProviderError::invalid_state(
                self.provider(),
                format!("callback is missing {name}"),
            )),
            _ => Err(ProviderError::invalid_state(
                self.provider(),
                format!("callback carries several {name} values"),
            )),
        }
    }

    /// Exchange an authorized credential for an access token
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidState`] if the credential was issued by
    /// another provider and [`ProviderError::AuthExchangeFailed`] if the
    /// exchange fails.
    pub async fn access_token(&self, credential: OAuthCredential) -> ProviderResult<AccessToken> {
        if credential.provider() != self.provider() {
            return Err(ProviderError::invalid_state(
                self.provider(),
                format!("credential was issued by {}", credential.provider()),
            ));
        }

        let url = self.parse_endpoint(&self.config.access_token_url)?;
        let request_token = credential.request_token();
        let header = self
            .signer()
            .with_token(&request_token.token, &request_token.secret)
            .authorization_header("POST", &url, &[(oauth1::VERIFIER, credential.verifier())], &[]);

        let fields = self.token_exchange(url, header).await?;
        let (token, secret, raw) = self.split_token_response(fields)?;
        info!(provider = %self.provider(), "Obtained access token");
        Ok(AccessToken::new(token, secret, raw))
    }

    async fn token_exchange(
        &self,
        url: Url,
        authorization: String,
    ) -> ProviderResult<(u16, BTreeMap<String, String>)> {
        let provider = self.provider();
        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(|e| ProviderError::auth_exchange(provider, None, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::auth_exchange(provider, Some(status.as_u16()), e.to_string()))?;

        if !status.is_success() {
            warn!(provider = %provider, status = status.as_u16(), "Token exchange rejected");
            return Err(ProviderError::auth_exchange(
                provider,
                Some(status.as_u16()),
                body.trim().to_owned(),
            ));
        }
        Ok((status.as_u16(), parse_form_response(&body)))
    }

    fn split_token_response(
        &self,
        (status, mut fields): (u16, BTreeMap<String, String>),
    ) -> ProviderResult<(String, String, BTreeMap<String, String>)> {
        let token = fields.remove(oauth1::TOKEN).filter(|t| !t.is_empty());
        let secret = fields.remove(oauth1::TOKEN_SECRET);
        match (token, secret) {
            (Some(token), Some(secret)) => Ok((token, secret, fields)),
            _ => Err(ProviderError::auth_exchange(
                self.provider(),
                Some(status),
                "response lacks oauth_token or oauth_token_secret",
            )),
        }
    }

    /// Signed GET on behalf of the access token holder
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ProfileFetchFailed`] on transport failure or
    /// a non-success status.
    pub async fn signed_get(&self, url: &str, access_token: &AccessToken) -> ProviderResult<ApiResponse> {
        let provider = self.provider();
        let url = Url::parse(url)
            .map_err(|e| ProviderError::profile_fetch(provider, None, format!("invalid URL {url:?}: {e}")))?;
        let header = self
            .signer()
            .with_token(access_token.token(), access_token.secret())
            .authorization_header("GET", &url, &[], &[]);

        debug!("Starting {provider} API request to: {}", url.path());
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, header)
            .send()
            .await
            .map_err(|e| ProviderError::profile_fetch(provider, None, e.to_string()))?;

        self.read_api_response(response).await
    }

    async fn read_api_response(&self, response: Response) -> ProviderResult<ApiResponse> {
        let provider = self.provider();
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::profile_fetch(provider, Some(status.as_u16()), e.to_string()))?;

        if !status.is_success() {
            warn!(provider = %provider, status = status.as_u16(), "API request failed");
            return Err(ProviderError::profile_fetch(
                provider,
                Some(status.as_u16()),
                body.trim().to_owned(),
            ));
        }
        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }
}
