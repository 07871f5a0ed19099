//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::config::registry::StaticRegistry;
use crate::config::schema::{RouteGroupRecord, RouteRecord};
use crate::config::validation::{validate_records, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or violates the record schemas.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The records are syntactically valid but semantically defective.
    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// On-disk registry layout: `[[route]]` and `[[route-group]]` tables.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RegistryFile {
    route: Vec<RouteRecord>,
    #[serde(rename = "route-group")]
    route_group: Vec<RouteGroupRecord>,
}

/// Load and validate route configuration from a TOML file.
///
/// Table order in the file is the declaration order used for weight
/// tie-breaking during compilation.
pub fn load_registry(path: &Path) -> Result<StaticRegistry, ConfigError> {
    let content = fs::read_to_string(path)?;
    let file: RegistryFile = toml::from_str(&content)?;

    validate_records(&file.route, &file.route_group).map_err(ConfigError::Validation)?;

    Ok(StaticRegistry::new(file.route, file.route_group))
}
