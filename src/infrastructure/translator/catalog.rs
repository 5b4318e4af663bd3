//! Message catalog translator
//!
//! A flat label → translation table loaded from TOML:
//!
//! ```toml
//! locale = "cs"
//!
//! [messages]
//! Home = "Domov"
//! Articles = "Články"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ports::Translator;
use crate::error::{NavError, NavResult};

/// Translator backed by an in-memory message table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default)]
    pub messages: BTreeMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from `(label, translation)` pairs
    pub fn from_messages<I, K, V>(messages: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            locale: None,
            messages: messages
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Load a catalog file
    pub fn load(path: &Path) -> NavResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| NavError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn insert(&mut self, label: impl Into<String>, translation: impl Into<String>) {
        self.messages.insert(label.into(), translation.into());
    }

    /// Add entries from `other`, overriding existing ones
    pub fn merge(&mut self, other: MessageCatalog) {
        if other.locale.is_some() {
            self.locale = other.locale;
        }
        self.messages.extend(other.messages);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, label: &str) -> String {
        self.messages
            .get(label)
            .cloned()
            .unwrap_or_else(|| label.to_string())
    }
}
