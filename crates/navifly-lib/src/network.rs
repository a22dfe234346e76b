//! Road-network documents and where to find them.
//!
//! A network document is a JSON object with a `locations` array of
//! [`Node`]s and a `roads` array of undirected, weighted connections:
//!
//! ```json
//! {
//!   "locations": [{ "id": "phx", "name": "Phoenix", "lat": 33.44, "lon": -112.07 }],
//!   "roads": [{ "from": "phx", "to": "tempe", "weight": 12.0 }]
//! }
//! ```
//!
//! Documents are validated before a [`Graph`] is built from them, so every
//! road endpoint exists and every weight is finite and non-negative.

use std::collections::{HashMap, HashSet};
use std::env;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::geo::{haversine_km, Coordinate};
use crate::graph::{Graph, Node};

/// Environment variable pointing at a network document.
pub const NETWORK_ENV_VAR: &str = "NAVIFLY_NETWORK";

/// File name looked up in the platform data directory.
const NETWORK_FILENAME: &str = "network.json";

const BUILTIN_ARIZONA: &str = include_str!("../data/arizona.json");

/// Undirected road between two locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Serialised form of a road network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    pub locations: Vec<Node>,
    #[serde(default)]
    pub roads: Vec<Road>,
}

impl NetworkDocument {
    /// Check the document for duplicate or malformed locations and roads.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for location in &self.locations {
            if location.id.trim().is_empty() {
                return Err(invalid("location with empty id"));
            }
            if !ids.insert(location.id.as_str()) {
                return Err(invalid(format!("duplicate location id '{}'", location.id)));
            }
            if !valid_latitude(location.lat) || !valid_longitude(location.lon) {
                return Err(invalid(format!(
                    "location '{}' has out-of-range coordinates ({}, {})",
                    location.id, location.lat, location.lon
                )));
            }
        }

        for road in &self.roads {
            for endpoint in [&road.from, &road.to] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(invalid(format!(
                        "road {} -> {} references unknown location '{}'",
                        road.from, road.to, endpoint
                    )));
                }
            }
            if !road.weight.is_finite() || road.weight < 0.0 {
                return Err(invalid(format!(
                    "road {} -> {} has invalid weight {}",
                    road.from, road.to, road.weight
                )));
            }
        }

        Ok(())
    }

    /// Number of roads whose weight is below the straight-line distance
    /// between their endpoints. A* is only guaranteed optimal when this is zero.
    pub fn underweight_roads(&self) -> usize {
        let coordinates: HashMap<&str, Coordinate> = self
            .locations
            .iter()
            .map(|location| (location.id.as_str(), location.coordinate()))
            .collect();

        self.roads
            .iter()
            .filter(|road| {
                match (
                    coordinates.get(road.from.as_str()),
                    coordinates.get(road.to.as_str()),
                ) {
                    (Some(a), Some(b)) => road.weight < haversine_km(*a, *b),
                    _ => false,
                }
            })
            .count()
    }

    /// Validate the document and build a routing graph from it.
    pub fn into_graph(self) -> Result<Graph> {
        self.validate()?;

        let mut graph = Graph::new();
        for location in self.locations {
            graph.add_node(location);
        }
        for road in &self.roads {
            graph.add_edge(&road.from, &road.to, road.weight);
        }
        Ok(graph)
    }
}

fn valid_latitude(lat: f64) -> bool {
    lat.is_finite() && (-90.0..=90.0).contains(&lat)
}

fn valid_longitude(lon: f64) -> bool {
    lon.is_finite() && (-180.0..=180.0).contains(&lon)
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidNetwork {
        message: message.into(),
    }
}

/// Parse and validate a network document from a JSON string.
pub fn parse_network(json: &str) -> Result<Graph> {
    let document: NetworkDocument = serde_json::from_str(json)?;
    document.into_graph()
}

/// Load a network document from disk.
pub fn load_network(path: &Path) -> Result<Graph> {
    if !path.exists() {
        return Err(Error::NetworkNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let document: NetworkDocument = serde_json::from_str(&contents)?;
    let underweight = document.underweight_roads();
    let graph = document.into_graph()?;

    info!(
        path = %path.display(),
        locations = graph.node_count(),
        roads = graph.edge_count(),
        "loaded road network"
    );
    warn_underweight(underweight);
    Ok(graph)
}

fn warn_underweight(roads: usize) {
    if roads > 0 {
        warn!(
            roads,
            "road weights below straight-line distance; a-star may not return the cheapest route"
        );
    }
}

/// The Arizona demo network bundled with the crate, unvalidated.
pub fn builtin_document() -> Result<NetworkDocument> {
    Ok(serde_json::from_str(BUILTIN_ARIZONA)?)
}

/// The Arizona demo network bundled with the crate.
pub fn builtin_network() -> Result<Graph> {
    builtin_document()?.into_graph()
}

/// Where a network should be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkSource {
    File(PathBuf),
    Builtin,
}

impl NetworkSource {
    pub fn load(&self) -> Result<Graph> {
        match self {
            NetworkSource::File(path) => load_network(path),
            NetworkSource::Builtin => {
                let document = builtin_document()?;
                let underweight = document.underweight_roads();
                let graph = document.into_graph()?;
                info!(
                    locations = graph.node_count(),
                    roads = graph.edge_count(),
                    "using built-in Arizona network"
                );
                warn_underweight(underweight);
                Ok(graph)
            }
        }
    }
}

impl fmt::Display for NetworkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkSource::File(path) => write!(f, "{}", path.display()),
            NetworkSource::Builtin => f.write_str("built-in Arizona network"),
        }
    }
}

/// Resolve the default network location using platform-specific project directories.
pub fn default_network_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "navifly", "navifly").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(NETWORK_FILENAME))
}

/// Decide which network to load.
///
/// Priority: the explicit path, then [`NETWORK_ENV_VAR`], then `network.json`
/// in the platform data directory if it exists, then the built-in network.
pub fn resolve_network_source(explicit: Option<&Path>) -> NetworkSource {
    let data_file = match default_network_path() {
        Ok(path) => Some(path),
        Err(err) => {
            debug!("no platform data directory: {err}");
            None
        }
    };
    resolve_from(explicit, env::var_os(NETWORK_ENV_VAR), data_file)
}

fn resolve_from(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
    data_file: Option<PathBuf>,
) -> NetworkSource {
    if let Some(path) = explicit {
        return NetworkSource::File(path.to_path_buf());
    }

    if let Some(value) = env_value.filter(|value| !value.is_empty()) {
        debug!("using network from {NETWORK_ENV_VAR}");
        return NetworkSource::File(PathBuf::from(value));
    }

    match data_file {
        Some(path) if path.exists() => NetworkSource::File(path),
        _ => NetworkSource::Builtin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let source = resolve_from(
            Some(Path::new("/tmp/explicit.json")),
            Some(OsString::from("/tmp/env.json")),
            None,
        );
        assert_eq!(source, NetworkSource::File("/tmp/explicit.json".into()));
    }

    #[test]
    fn env_var_used_without_explicit_path() {
        let source = resolve_from(None, Some(OsString::from("/tmp/env.json")), None);
        assert_eq!(source, NetworkSource::File("/tmp/env.json".into()));
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let source = resolve_from(None, Some(OsString::new()), None);
        assert_eq!(source, NetworkSource::Builtin);
    }

    #[test]
    fn missing_data_file_falls_back_to_builtin() {
        let source = resolve_from(None, None, Some("/definitely/not/here.json".into()));
        assert_eq!(source, NetworkSource::Builtin);
    }

    #[test]
    fn existing_data_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(NETWORK_FILENAME);
        fs::write(&path, "{}").unwrap();
        let source = resolve_from(None, None, Some(path.clone()));
        assert_eq!(source, NetworkSource::File(path));
    }

    #[test]
    fn builtin_network_is_valid() {
        let graph = builtin_network().expect("bundled network parses");
        assert_eq!(graph.node_count(), 16);
        assert_eq!(graph.edge_count(), 22);
        assert!(graph.contains("phx"));
        assert!(graph.contains("page"));
    }

    #[test]
    fn builtin_network_has_underweight_roads() {
        let document = builtin_document().expect("bundled network parses");
        assert!(document.underweight_roads() > 0);

        let graph = NetworkSource::Builtin.load().expect("built-in source loads");
        assert_eq!(graph.node_count(), 16);
    }

    #[test]
    fn underweight_roads_are_counted() {
        let document = NetworkDocument {
            locations: vec![
                Node::new("a", "A", 0.0, 0.0),
                Node::new("b", "B", 0.0, 1.0),
            ],
            roads: vec![
                Road {
                    from: "a".into(),
                    to: "b".into(),
                    weight: 50.0,
                },
                Road {
                    from: "a".into(),
                    to: "b".into(),
                    weight: 150.0,
                },
            ],
        };
        assert_eq!(document.underweight_roads(), 1);
    }
}
