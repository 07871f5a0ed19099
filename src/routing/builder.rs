//! Forest builder.
//!
//! # Responsibilities
//! - Turn flat, parent-referencing records into owned route trees
//! - Order siblings and groups by `(weight, declaration order)`
//! - Detect parent cycles and dangling references
//!
//! # Design Decisions
//! - Declaration order in configuration does not imply parent-before-child
//!   order, so records are peeled bottom-up: a record is resolvable once no
//!   *unresolved* record still claims it as parent
//! - The pass cap substitutes for a timeout on malformed cyclic input
//! - Deterministic: same records always produce the same forest

use std::collections::{HashMap, HashSet};

use crate::config::schema::{RouteGroupRecord, RouteRecord};
use crate::error::CompileError;
use crate::routing::route::{Route, RouteGroup};

/// Upper bound on peeling passes. One pass resolves at least one nesting
/// level, so this also caps the route tree depth.
pub const MAX_RESOLUTION_PASSES: usize = 256;

/// Compiles flat route and route-group records into an ordered sequence of
/// [`RouteGroup`] entities.
///
/// Records may arrive in any order; nesting depth is limited only by
/// [`MAX_RESOLUTION_PASSES`]. Fails without partial output on a parent cycle
/// or a dangling reference.
pub fn build(
    routes: Vec<RouteRecord>,
    groups: Vec<RouteGroupRecord>,
) -> Result<Vec<RouteGroup>, CompileError> {
    let known: HashSet<&str> = routes.iter().map(|record| record.key.as_str()).collect();
    for record in &routes {
        if let Some(parent) = &record.parent {
            if !known.contains(parent.as_str()) {
                return Err(CompileError::UnresolvedRouteReference {
                    referrer: record.key.clone(),
                    missing: parent.clone(),
                });
            }
        }
    }

    // Records still waiting for their children, tagged with their declaration
    // index so equal-weight ties stay stable.
    let mut unresolved: Vec<(usize, RouteRecord)> = routes.into_iter().enumerate().collect();

    // Parent key → children resolved so far, as (weight, declaration, route).
    let mut pending: HashMap<String, Vec<(u32, usize, Route)>> = HashMap::new();

    // Every compiled route by key; groups may bind to any of them.
    let mut compiled: HashMap<String, Route> = HashMap::new();

    let mut passes = 0;
    while !unresolved.is_empty() {
        if passes == MAX_RESOLUTION_PASSES {
            return Err(CompileError::CycleOrDepthExceeded);
        }
        passes += 1;

        let referenced: HashSet<String> = unresolved
            .iter()
            .filter_map(|(_, record)| record.parent.clone())
            .collect();

        let mut remaining = Vec::with_capacity(unresolved.len());
        for (declaration, record) in unresolved {
            // Still claimed as a parent: children outstanding, try next pass.
            if referenced.contains(&record.key) {
                remaining.push((declaration, record));
                continue;
            }

            let mut children = pending.remove(&record.key).unwrap_or_default();
            children.sort_by_key(|entry| (entry.0, entry.1));

            let route = Route {
                path: record.path,
                service: record.service,
                methods: record.methods,
                output_service: record.output_service,
                error_registry_service: record.error_registry_service,
                authorizations: record.authorizations,
                children: children.into_iter().map(|(_, _, child)| child).collect(),
            };

            if let Some(parent) = record.parent {
                pending
                    .entry(parent)
                    .or_default()
                    .push((record.weight, declaration, route.clone()));
            }
            compiled.insert(record.key, route);
        }
        unresolved = remaining;
    }

    let mut ordered: Vec<(u32, usize, RouteGroup)> = Vec::with_capacity(groups.len());
    for (declaration, record) in groups.into_iter().enumerate() {
        let home_route = compiled.get(&record.route).cloned().ok_or_else(|| {
            CompileError::UnresolvedRouteReference {
                referrer: record.key.clone(),
                missing: record.route.clone(),
            }
        })?;

        ordered.push((
            record.weight,
            declaration,
            RouteGroup {
                ports: record.ports,
                hosts: record.hosts,
                error_registry_service: record.error_registry_service,
                authorizations: record.authorizations,
                home_route,
            },
        ));
    }
    ordered.sort_by_key(|entry| (entry.0, entry.1));

    Ok(ordered.into_iter().map(|(_, _, group)| group).collect())
}
