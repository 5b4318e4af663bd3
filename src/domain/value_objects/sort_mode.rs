//! Sort Mode Value Object
//!
//! Defines how a node orders its direct children before rendering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// Ordering applied to a node's children
///
/// The integer codes (`0..=4`) match the constants older menu files use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Keep insertion order
    #[default]
    None,
    /// Compare priorities by their stored type
    Priority,
    /// Coerce priorities to floating point
    PriorityNumeric,
    /// Coerce priorities to lower-cased text
    PriorityLexical,
    /// Compare (translated) labels
    Label,
}

impl SortMode {
    /// Every recognized mode, in code order
    pub const ALL: [SortMode; 5] = [
        SortMode::None,
        SortMode::Priority,
        SortMode::PriorityNumeric,
        SortMode::PriorityLexical,
        SortMode::Label,
    ];

    /// Names accepted by [`SortMode::from_str`], used for typo suggestions
    pub const NAMES: [&'static str; 5] = [
        "none",
        "priority",
        "priority-numeric",
        "priority-lexical",
        "label",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::Priority => "priority",
            SortMode::PriorityNumeric => "priority-numeric",
            SortMode::PriorityLexical => "priority-lexical",
            SortMode::Label => "label",
        }
    }

    /// Legacy integer code
    pub fn code(self) -> u8 {
        match self {
            SortMode::None => 0,
            SortMode::Priority => 1,
            SortMode::PriorityNumeric => 2,
            SortMode::PriorityLexical => 3,
            SortMode::Label => 4,
        }
    }

    /// Parse a legacy integer code.
    pub fn from_code(code: i64) -> NavResult<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| i64::from(mode.code()) == code)
            .ok_or_else(|| NavError::InvalidSortMode {
                value: code.to_string(),
            })
    }

    /// Whether this mode orders children by priority
    pub fn compares_priority(self) -> bool {
        matches!(
            self,
            SortMode::Priority | SortMode::PriorityNumeric | SortMode::PriorityLexical
        )
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "none" => Ok(SortMode::None),
            "priority" | "native" => Ok(SortMode::Priority),
            "priority-numeric" | "priority-integer" | "numeric" => Ok(SortMode::PriorityNumeric),
            "priority-lexical" | "priority-string" | "lexical" => Ok(SortMode::PriorityLexical),
            "label" => Ok(SortMode::Label),
            other => match other.parse::<i64>() {
                Ok(code) => Self::from_code(code),
                Err(_) => Err(NavError::InvalidSortMode {
                    value: s.to_string(),
                }),
            },
        }
    }
}

/// Menu files may spell a mode as a name or as its legacy integer code.
#[derive(Deserialize)]
#[serde(untagged)]
enum SortModeDe {
    Code(i64),
    Name(String),
}

impl<'de> Deserialize<'de> for SortMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let parsed = match SortModeDe::deserialize(deserializer)? {
            SortModeDe::Code(code) => SortMode::from_code(code),
            SortModeDe::Name(name) => name.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
