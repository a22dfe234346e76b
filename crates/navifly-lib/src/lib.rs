//! NaviFly library entry points.
//!
//! This crate loads a road network into memory, finds the cheapest route
//! between two locations with A*, and turns the result into driving
//! directions and display geometry. Higher-level consumers (the CLI, or an
//! HTTP layer) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod geo;
pub mod geometry;
pub mod graph;
pub mod instructions;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use geo::{haversine_km, Coordinate, EARTH_RADIUS_KM};
pub use geometry::{build_default_geometry, build_display_geometry, DEFAULT_SUBDIVISIONS};
pub use graph::{Edge, Graph, Node};
pub use instructions::{build_instructions, Instruction};
pub use network::{
    builtin_document, builtin_network, default_network_path, load_network, parse_network,
    resolve_network_source, NetworkDocument, NetworkSource, Road, NETWORK_ENV_VAR,
};
pub use output::{GeometrySource, RouteRenderMode, RouteSummary};
pub use path::{find_route, find_route_dijkstra, Route};
pub use routing::{
    fuzzy_location_matches, plan_route, resolve_location, RouteAlgorithm, RoutePlan,
    RouteRequest,
};
