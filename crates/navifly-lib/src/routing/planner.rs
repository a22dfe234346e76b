//! Route planning strategies.
//!
//! Each search algorithm sits behind the [`RoutePlanner`] trait so
//! [`plan_route`](super::plan_route) can pick one at runtime without knowing
//! how it searches.

use crate::graph::Graph;
use crate::path::{find_route, find_route_dijkstra, Route};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Search `graph` for the cheapest route from `start` to `goal`.
    ///
    /// Returns [`Route::no_path`] when either endpoint is unknown or the goal
    /// is unreachable.
    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Route;
}

/// A* planner guided by the haversine distance to the goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Route {
        find_route(graph, start, goal)
    }
}

/// Dijkstra planner. Explores more of the network than A* but stays optimal
/// even when road weights are smaller than straight-line distances.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Route {
        find_route_dijkstra(graph, start, goal)
    }
}

/// Select the planner implementing `algorithm`.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
    }
}
