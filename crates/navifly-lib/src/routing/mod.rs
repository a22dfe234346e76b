//! Route planning on top of the raw search functions.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search algorithms (A*, Dijkstra)
//! - [`RouteRequest`] - Start/goal as typed by a user, plus the algorithm
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Resolves endpoints, runs the search, reports errors
//!
//! Unlike [`find_route`](crate::path::find_route), which signals "no path"
//! with an empty [`Route`](crate::path::Route), [`plan_route`] turns unknown
//! endpoints and unreachable goals into [`Error`] values.
//!
//! # Example
//!
//! ```ignore
//! use navifly_lib::{builtin_network, plan_route, RouteRequest};
//!
//! let graph = builtin_network()?;
//! let plan = plan_route(&graph, &RouteRequest::a_star("phx", "Tucson"))?;
//! println!("{} km over {} roads", plan.cost, plan.hop_count());
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Minimum similarity for a location to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.6;

/// Maximum number of suggestions attached to an unknown-location error.
const MAX_SUGGESTIONS: usize = 3;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm (weighted graph, no heuristic).
    #[serde(rename = "dijkstra")]
    Dijkstra,
    /// A* search (haversine heuristic).
    #[default]
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a-star" | "astar" | "a*" => Ok(RouteAlgorithm::AStar),
            "dijkstra" => Ok(RouteAlgorithm::Dijkstra),
            other => Err(format!("unknown routing algorithm '{other}'")),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    /// Location identifier or display name.
    pub start: String,
    /// Location identifier or display name.
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for A* routes.
    pub fn a_star(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::AStar,
        }
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    pub steps: Vec<String>,
    /// Sum of road weights along `steps`.
    pub cost: f64,
}

impl RoutePlan {
    /// Number of roads in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a user-supplied location to its identifier.
///
/// Exact identifiers match first; otherwise identifiers and display names are
/// compared case-insensitively (Unicode lowercase). Unknown locations produce
/// [`Error::UnknownLocation`] with close matches as suggestions.
pub fn resolve_location(graph: &Graph, query: &str) -> Result<String> {
    if let Some(node) = graph.node(query) {
        return Ok(node.id.clone());
    }

    let wanted = query.trim().to_lowercase();
    let mut matches: Vec<&str> = graph
        .nodes()
        .filter(|node| node.id.to_lowercase() == wanted || node.name.to_lowercase() == wanted)
        .map(|node| node.id.as_str())
        .collect();
    matches.sort_unstable();

    match matches.first() {
        Some(id) => {
            debug!(query, id, "resolved location by case-insensitive match");
            Ok((*id).to_string())
        }
        None => Err(Error::UnknownLocation {
            name: query.to_string(),
            suggestions: fuzzy_location_matches(graph, query, MAX_SUGGESTIONS),
        }),
    }
}

/// Location identifiers whose id or name resembles `query`, best first.
pub fn fuzzy_location_matches(graph: &Graph, query: &str, limit: usize) -> Vec<String> {
    let query = query.trim().to_lowercase();
    let mut scored: Vec<(f64, &str)> = graph
        .nodes()
        .map(|node| {
            let by_id = strsim::jaro_winkler(&query, &node.id.to_lowercase());
            let by_name = strsim::jaro_winkler(&query, &node.name.to_lowercase());
            (by_id.max(by_name), node.id.as_str())
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, id)| id.to_string())
        .collect()
}

/// Compute a route using the requested algorithm.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let start_id = resolve_location(graph, &request.start)?;
    let goal_id = resolve_location(graph, &request.goal)?;

    let planner = select_planner(request.algorithm);
    let route = planner.find_path(graph, &start_id, &goal_id);
    if route.is_empty() {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    }

    debug!(
        algorithm = %planner.algorithm(),
        start = %start_id,
        goal = %goal_id,
        hops = route.hop_count(),
        cost = route.cost,
        "planned route"
    );

    Ok(RoutePlan {
        algorithm: planner.algorithm(),
        start: start_id,
        goal: goal_id,
        steps: route.nodes,
        cost: route.cost,
    })
}
