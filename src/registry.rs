// ABOUTME: Provider registry routing login callbacks to the right provider
// ABOUTME: Registers providers, initializes them with a shared callback URL, and looks them up by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use oauth_profiles_core::constants::callback::PROVIDER_PARAMETER;
use oauth_profiles_core::{ProviderError, ProviderResult};
use oauth_profiles_providers::{CallbackParameters, OAuthProvider};
use std::collections::BTreeMap;
use std::fmt;
use tracing::info;
use url::Url;

/// Set of initialized providers sharing one callback endpoint.
///
/// Each provider's callback URL is the base URL with `provider=<name>`
/// appended, so a single callback handler can route the request with
/// [`Self::find_for_callback`].
#[derive(Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<&'static str, Box<dyn OAuthProvider>>,
}

impl ProviderRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider, replacing any provider registered under the same name
    pub fn register(&mut self, provider: Box<dyn OAuthProvider>) {
        let name = provider.name();
        if self.providers.insert(name, provider).is_some() {
            info!("Replaced provider {name} in registry");
        }
    }

    /// Point every provider's callback at `base_callback_url` and initialize it
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ConfigurationError`] if the base URL is not
    /// absolute or a provider fails to initialize.
    pub fn init_all(&mut self, base_callback_url: &str) -> ProviderResult<()> {
        for (name, provider) in &mut self.providers {
            provider.set_callback_url(callback_url_for(base_callback_url, name)?);
            provider.init()?;
        }

        info!(
            "Provider registry initialized with {} provider(s): [{}]",
            self.providers.len(),
            self.supported_providers().join(", ")
        );
        Ok(())
    }

    /// Provider registered under `name`
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::UnsupportedProvider`] for unknown names.
    pub fn find(&self, name: &str) -> ProviderResult<&dyn OAuthProvider> {
        self.providers
            .get(name)
            .map(AsRef::as_ref)
            .ok_or_else(|| ProviderError::UnsupportedProvider {
                provider: name.to_owned(),
            })
    }

    /// Provider named by the callback's `provider` parameter
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidState`] if the parameter is missing and
    /// [`ProviderError::UnsupportedProvider`] if it names no registered
    /// provider.
    pub fn find_for_callback(
        &self,
        parameters: &CallbackParameters,
    ) -> ProviderResult<&dyn OAuthProvider> {
        let name = parameters.first(PROVIDER_PARAMETER).ok_or_else(|| {
            ProviderError::invalid_state(
                "unknown",
                format!("callback carries no {PROVIDER_PARAMETER} parameter"),
            )
        })?;
        self.find(name)
    }

    /// Names of the registered providers, sorted
    #[must_use]
    pub fn supported_providers(&self) -> Vec<&'static str> {
        self.providers.keys().copied().collect()
    }

    /// Number of registered providers
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no provider is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.supported_providers())
            .finish()
    }
}

/// `base_callback_url` with `provider=<name>` appended to its query
///
/// # Errors
///
/// Returns [`ProviderError::ConfigurationError`] if the base URL is not absolute.
pub fn callback_url_for(base_callback_url: &str, name: &str) -> ProviderResult<String> {
    let mut url = Url::parse(base_callback_url).map_err(|e| {
        ProviderError::configuration(name, format!("invalid callback URL {base_callback_url:?}: {e}"))
    })?;
    url.query_pairs_mut().append_pair(PROVIDER_PARAMETER, name);
    Ok(url.into())
}
