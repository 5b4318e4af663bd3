//! Menu definition types

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DEFAULT_ROOT_LABEL, DEFAULT_URL};
use crate::domain::value_objects::{Priority, SortMode};
use crate::error::{NavError, NavResult};
use crate::infrastructure::renderers::OutputFormat;

use super::loader::{self, ConfigWarning};

/// A menu definition file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Inline label translations
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemConfig>,
}

/// The `[navigation]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default = "default_root_label")]
    pub root_label: String,

    #[serde(default = "default_root_url")]
    pub root_url: String,

    /// Sort mode of the root, inherited by every item that does not set one
    #[serde(default)]
    pub sort: SortMode,

    /// Default priority of the root, inherited the same way
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_priority: Option<toml::Value>,

    /// Label path from the root to the current item
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub current: Vec<String>,

    /// Custom template for text and HTML output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            root_label: default_root_label(),
            root_url: default_root_url(),
            sort: SortMode::default(),
            default_priority: None,
            current: Vec::new(),
            template: None,
        }
    }
}

fn default_root_label() -> String {
    DEFAULT_ROOT_LABEL.to_string()
}

fn default_root_url() -> String {
    DEFAULT_URL.to_string()
}

/// The `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// One `[[items]]` entry, nested through `children`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<toml::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortMode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ItemConfig>,
}

impl ItemConfig {
    /// Priority of this item; `label` names the item in errors
    pub fn priority(&self) -> NavResult<Option<Priority>> {
        self.priority
            .as_ref()
            .map(|value| priority_from_toml(&self.label, value))
            .transpose()
    }

    /// Number of items in this subtree, the item included
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(ItemConfig::count).sum::<usize>()
    }
}

impl MenuConfig {
    /// Load a menu definition from a TOML file
    pub fn load(path: &Path) -> NavResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> NavResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (NAVTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Root default priority
    pub fn default_priority(&self) -> NavResult<Option<Priority>> {
        self.navigation
            .default_priority
            .as_ref()
            .map(|value| priority_from_toml(&self.navigation.root_label, value))
            .transpose()
    }

    /// Number of nodes the menu builds, root included
    pub fn node_count(&self) -> usize {
        1 + self.items.iter().map(ItemConfig::count).sum::<usize>()
    }
}

/// Convert a TOML value into a priority.
///
/// Integers and floats become numbers, strings stay text. Anything else
/// has no defined ordering and is rejected.
pub fn priority_from_toml(label: &str, value: &toml::Value) -> NavResult<Priority> {
    match value {
        toml::Value::Integer(n) => Ok(Priority::from(*n)),
        toml::Value::Float(n) => Ok(Priority::Number(*n)),
        toml::Value::String(s) => Ok(Priority::Text(s.clone())),
        other => Err(NavError::InvalidPriorityType {
            label: label.to_string(),
            found: other.type_str().to_string(),
        }),
    }
}
