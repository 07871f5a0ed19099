//! Semantic validation of configuration records.
//!
//! # Responsibilities
//! - Referential integrity (parents and group targets name declared routes)
//! - Key uniqueness across routes and across groups
//! - Value sanity (non-empty methods, valid ports)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function over record slices; runs before records reach the builder
//! - Serde handles syntactic validation, this module handles semantics

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{RouteGroupRecord, RouteRecord};

/// A single semantic defect in the configuration records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two route records share a key.
    #[error("duplicate route key '{0}'")]
    DuplicateRouteKey(String),

    /// Two route-group records share a key.
    #[error("duplicate route-group key '{0}'")]
    DuplicateGroupKey(String),

    /// A route's parent names no declared route.
    #[error("route '{0}' references unknown parent '{1}'")]
    UnknownParent(String, String),

    /// A route-group's target names no declared route.
    #[error("route-group '{0}' references unknown route '{1}'")]
    UnknownRoute(String, String),

    /// A route declares no HTTP methods and can never match.
    #[error("route '{0}' declares no methods")]
    EmptyMethods(String),

    /// A route-group binds port 0.
    #[error("route-group '{0}' binds invalid port 0")]
    InvalidPort(String),
}

/// Validates record collections, collecting every defect found.
pub fn validate_records(
    routes: &[RouteRecord],
    groups: &[RouteGroupRecord],
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let known: HashSet<&str> = routes.iter().map(|record| record.key.as_str()).collect();

    let mut seen = HashSet::new();
    for record in routes {
        if !seen.insert(record.key.as_str()) {
            errors.push(ValidationError::DuplicateRouteKey(record.key.clone()));
        }
        if let Some(parent) = &record.parent {
            if !known.contains(parent.as_str()) {
                errors.push(ValidationError::UnknownParent(
                    record.key.clone(),
                    parent.clone(),
                ));
            }
        }
        if record.methods.is_empty() {
            errors.push(ValidationError::EmptyMethods(record.key.clone()));
        }
    }

    let mut seen_groups = HashSet::new();
    for record in groups {
        if !seen_groups.insert(record.key.as_str()) {
            errors.push(ValidationError::DuplicateGroupKey(record.key.clone()));
        }
        if !known.contains(record.route.as_str()) {
            errors.push(ValidationError::UnknownRoute(
                record.key.clone(),
                record.route.clone(),
            ));
        }
        if record.ports.contains(&0) {
            errors.push(ValidationError::InvalidPort(record.key.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
