//! Menu definition configuration
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (NAVTREE_*)
//! 3. The menu definition file
//! 4. Built-in defaults

mod env_validator;
mod loader;
mod types;

pub use env_validator::{closest_match, levenshtein, EnvVarValidator};
pub use loader::{parse_with_warnings, ConfigWarning};
pub use types::{priority_from_toml, ItemConfig, MenuConfig, NavigationConfig, OutputConfig};
