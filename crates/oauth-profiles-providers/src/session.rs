// ABOUTME: Per-user session storage used to carry the pending request token between redirects
// ABOUTME: Defines the UserSession trait and an in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

/// Key/value storage scoped to a single user session.
///
/// Web frameworks adapt their own session type to this trait. Providers only
/// write one entry per flow (`<provider>#request_token`) and remove it once
/// the callback has been accepted.
pub trait UserSession: Send + Sync {
    /// Read an attribute
    fn get_attribute(&self, key: &str) -> Option<String>;

    /// Write an attribute, replacing any previous value
    fn set_attribute(&mut self, key: &str, value: String);

    /// Remove an attribute, returning its previous value
    fn remove_attribute(&mut self, key: &str) -> Option<String>;
}

/// Session kept in process memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemorySession {
    attributes: HashMap<String, String>,
}

impl InMemorySession {
    /// Empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the session holds no attributes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl UserSession for InMemorySession {
    fn get_attribute(&self, key: &str) -> Option<String> {
        self.attributes.get(key).cloned()
    }

    fn set_attribute(&mut self, key: &str, value: String) {
        self.attributes.insert(key.to_owned(), value);
    }

    fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.remove(key)
    }
}
