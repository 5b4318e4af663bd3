//! Menu definition loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::value_objects::SortMode;
use crate::error::{NavError, NavResult};
use crate::infrastructure::renderers::OutputFormat;

use super::env_validator::{closest_match, EnvVarValidator};
use super::types::MenuConfig;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load a menu definition and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NavResult<(MenuConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse menu TOML; `path` is only used in errors and warnings
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> NavResult<(MenuConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: MenuConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NavError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    for warning in &warnings {
        warn!("{}", warning);
    }

    Ok((config, warnings))
}

/// Apply environment variable overrides (NAVTREE_* prefix)
pub fn with_env_overrides(config: MenuConfig) -> MenuConfig {
    with_env_lookup(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable source
pub(crate) fn with_env_lookup<F>(mut config: MenuConfig, lookup: F) -> MenuConfig
where
    F: Fn(&str) -> Option<String>,
{
    // NAVTREE_SORT
    if let Some(value) = lookup("NAVTREE_SORT") {
        let validator = EnvVarValidator::new("NAVTREE_SORT", &SortMode::NAMES);
        config.navigation.sort = validator.parse(
            &value,
            |s| s.parse::<SortMode>().ok(),
            config.navigation.sort,
        );
    }

    // NAVTREE_FORMAT
    if let Some(value) = lookup("NAVTREE_FORMAT") {
        let validator = EnvVarValidator::new("NAVTREE_FORMAT", &OutputFormat::NAMES);
        config.output.format = validator.parse(&value, OutputFormat::parse, config.output.format);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "navigation",
        "root_label",
        "root_url",
        "sort",
        "default_priority",
        "current",
        "template",
        "output",
        "format",
        "translations",
        "items",
        "label",
        "url",
        "priority",
        "children",
    ];

    closest_match(unknown, CANDIDATES).map(str::to_string)
}
