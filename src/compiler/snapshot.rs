//! Snapshot serialization of the compiled forest.
//!
//! # Responsibilities
//! - Flatten the forest into a self-contained JSON value for the cache
//! - Rebuild an equivalent forest from a snapshot
//! - Reject malformed snapshots instead of defaulting fields
//!
//! # Design Decisions
//! - camelCase field names, matching the cache layout the host ecosystem
//!   already stores (`outputService`, `errorRegistryService`, nested `routes`)
//! - Restore is the structural inverse of serialize: field values and order
//!   survive the round trip exactly

use serde::{Deserialize, Serialize};

use crate::cache::Snapshot;
use crate::error::CompileError;
use crate::routing::route::{Route, RouteGroup};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RouteShape {
    path: String,
    service: String,
    methods: Vec<String>,
    output_service: Option<String>,
    error_registry_service: Option<String>,
    authorizations: Vec<String>,
    routes: Vec<RouteShape>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct GroupShape {
    ports: Vec<u16>,
    hosts: Vec<String>,
    route: RouteShape,
    error_registry_service: Option<String>,
    authorizations: Vec<String>,
}

fn pack_route(route: &Route) -> RouteShape {
    RouteShape {
        path: route.path.clone(),
        service: route.service.clone(),
        methods: route.methods.clone(),
        output_service: route.output_service.clone(),
        error_registry_service: route.error_registry_service.clone(),
        authorizations: route.authorizations.clone(),
        routes: route.children.iter().map(pack_route).collect(),
    }
}

fn unpack_route(shape: RouteShape) -> Route {
    Route {
        path: shape.path,
        service: shape.service,
        methods: shape.methods,
        output_service: shape.output_service,
        error_registry_service: shape.error_registry_service,
        authorizations: shape.authorizations,
        children: shape.routes.into_iter().map(unpack_route).collect(),
    }
}

/// Serializes the compiled forest into a self-contained snapshot value.
pub fn serialize(groups: &[RouteGroup]) -> Result<Snapshot, CompileError> {
    let shapes: Vec<GroupShape> = groups
        .iter()
        .map(|group| GroupShape {
            ports: group.ports.clone(),
            hosts: group.hosts.clone(),
            route: pack_route(&group.home_route),
            error_registry_service: group.error_registry_service.clone(),
            authorizations: group.authorizations.clone(),
        })
        .collect();

    Ok(serde_json::to_value(shapes)?)
}

/// Rebuilds the forest from a snapshot.
///
/// A snapshot that does not match the expected shape fails with
/// [`CompileError::SerializationMismatch`]; nothing is substituted.
pub fn restore(snapshot: Snapshot) -> Result<Vec<RouteGroup>, CompileError> {
    let shapes: Vec<GroupShape> = serde_json::from_value(snapshot)?;

    Ok(shapes
        .into_iter()
        .map(|shape| RouteGroup {
            ports: shape.ports,
            hosts: shape.hosts,
            error_registry_service: shape.error_registry_service,
            authorizations: shape.authorizations,
            home_route: unpack_route(shape.route),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_forest() -> Vec<RouteGroup> {
        vec![RouteGroup {
            ports: vec![80, 443],
            hosts: vec!["example.com".to_string()],
            error_registry_service: Some("services.errors".to_string()),
            authorizations: vec!["auth.group".to_string()],
            home_route: Route {
                path: "/".to_string(),
                service: "services.home".to_string(),
                methods: vec!["GET".to_string()],
                output_service: Some("services.output".to_string()),
                error_registry_service: None,
                authorizations: vec!["auth.route".to_string()],
                children: vec![
                    Route {
                        path: "light".to_string(),
                        service: "services.light".to_string(),
                        methods: vec!["GET".to_string(), "POST".to_string()],
                        output_service: None,
                        error_registry_service: None,
                        authorizations: Vec::new(),
                        children: Vec::new(),
                    },
                    Route {
                        path: "heavy".to_string(),
                        service: "services.heavy".to_string(),
                        methods: vec!["GET".to_string()],
                        output_service: None,
                        error_registry_service: None,
                        authorizations: Vec::new(),
                        children: Vec::new(),
                    },
                ],
            },
        }]
    }

    #[test]
    fn test_round_trip_preserves_forest() {
        let forest = sample_forest();
        let snapshot = serialize(&forest).unwrap();
        let restored = restore(snapshot).unwrap();
        assert_eq!(restored, forest);
    }

    #[test]
    fn test_snapshot_uses_wire_field_names() {
        let snapshot = serialize(&sample_forest()).unwrap();

        let group = &snapshot[0];
        assert!(group.get("errorRegistryService").is_some());
        let route = &group["route"];
        assert!(route.get("outputService").is_some());
        assert_eq!(route["routes"][0]["path"], json!("light"));
        assert_eq!(route["routes"][1]["path"], json!("heavy"));
    }

    #[test]
    fn test_missing_required_field_is_a_mismatch() {
        let snapshot = json!([{
            "ports": [80],
            "hosts": ["example.com"],
            // no "route"
            "errorRegistryService": null,
            "authorizations": []
        }]);

        assert!(matches!(
            restore(snapshot),
            Err(CompileError::SerializationMismatch(_))
        ));
    }

    #[test]
    fn test_wrong_field_type_is_a_mismatch() {
        let snapshot = json!([{
            "ports": "eighty",
            "hosts": [],
            "route": {
                "path": "/", "service": "s", "methods": [],
                "outputService": null, "errorRegistryService": null,
                "authorizations": [], "routes": []
            },
            "errorRegistryService": null,
            "authorizations": []
        }]);

        assert!(matches!(
            restore(snapshot),
            Err(CompileError::SerializationMismatch(_))
        ));
    }

    #[test]
    fn test_empty_forest_round_trips() {
        let snapshot = serialize(&[]).unwrap();
        assert_eq!(snapshot, json!([]));
        assert!(restore(snapshot).unwrap().is_empty());
    }
}
