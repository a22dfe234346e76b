//! Shortest-path search over a [`Graph`].
//!
//! Both searches keep their state (`g_score`, predecessors, frontier) local to
//! the call, so a shared graph can be searched from many threads at once.
//!
//! The frontier is a [`BinaryHeap`] without decrease-key. Improving a node's
//! cost pushes a fresh entry; older entries for the same node stay in the heap
//! and are skipped when popped because the cost they carry is worse than the
//! node's current `g_score`.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::geo::haversine_km;
use crate::graph::{Graph, Node};

/// Result of a single search: the node identifiers from start to goal and the
/// summed edge weight.
///
/// An empty `nodes` list means no path exists (or an endpoint is unknown); its
/// cost is always zero. Check [`Route::is_empty`] rather than the cost to tell
/// this apart from a zero-length route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub nodes: Vec<String>,
    pub cost: f64,
}

impl Route {
    /// The "no path" result.
    pub fn no_path() -> Self {
        Self {
            nodes: Vec::new(),
            cost: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of road segments in the route.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Find the cheapest route between `start` and `goal` using A* with the
/// haversine distance to the goal as heuristic.
///
/// Optimal as long as every edge weight is non-negative and no smaller than
/// the straight-line distance in kilometres between its endpoints.
pub fn find_route(graph: &Graph, start: &str, goal: &str) -> Route {
    let Some(goal_node) = graph.node(goal) else {
        debug!(goal, "goal is not part of the network");
        return Route::no_path();
    };
    let target = goal_node.coordinate();
    best_first(graph, start, goal, |node| {
        haversine_km(node.coordinate(), target)
    })
}

/// Find the cheapest route between `start` and `goal` using Dijkstra's
/// algorithm. Same contract as [`find_route`], without a heuristic.
pub fn find_route_dijkstra(graph: &Graph, start: &str, goal: &str) -> Route {
    best_first(graph, start, goal, |_| 0.0)
}

fn best_first<H>(graph: &Graph, start: &str, goal: &str, heuristic: H) -> Route
where
    H: Fn(&Node) -> f64,
{
    let (Some(start_node), Some(_)) = (graph.node(start), graph.node(goal)) else {
        debug!(start, goal, "route endpoint is not part of the network");
        return Route::no_path();
    };

    if start == goal {
        return Route {
            nodes: vec![start_node.id.clone()],
            cost: 0.0,
        };
    }

    let mut g_score: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut expanded = 0usize;

    g_score.insert(start_node.id.as_str(), 0.0);
    queue.push(SearchEntry::new(
        start_node.id.as_str(),
        0.0,
        heuristic(start_node),
    ));

    while let Some(entry) = queue.pop() {
        let current_score = match g_score.get(entry.node) {
            Some(score) if *score < entry.cost.0 => continue,
            Some(score) => *score,
            None => continue,
        };

        if entry.node == goal {
            debug!(start, goal, expanded, cost = current_score, "route found");
            return Route {
                nodes: reconstruct_path(&parents, start, entry.node),
                cost: current_score,
            };
        }
        expanded += 1;

        for edge in graph.neighbours(entry.node) {
            let Some(next) = graph.node(&edge.to) else {
                debug!(from = %edge.from, to = %edge.to, "skipping edge to unknown node");
                continue;
            };

            let tentative_g = current_score + edge.weight;
            let known = g_score.get(next.id.as_str()).copied().unwrap_or(f64::INFINITY);
            if tentative_g < known {
                g_score.insert(next.id.as_str(), tentative_g);
                parents.insert(next.id.as_str(), entry.node);
                queue.push(SearchEntry::new(
                    next.id.as_str(),
                    tentative_g,
                    heuristic(next),
                ));
            }
        }
    }

    debug!(start, goal, expanded, "frontier exhausted without reaching goal");
    Route::no_path()
}

fn reconstruct_path<'a>(
    parents: &HashMap<&'a str, &'a str>,
    start: &str,
    goal: &'a str,
) -> Vec<String> {
    let mut path = vec![goal.to_string()];
    let mut current = goal;
    while current != start {
        let Some(&previous) = parents.get(current) else {
            break;
        };
        path.push(previous.to_string());
        current = previous;
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct SearchEntry<'a> {
    node: &'a str,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl<'a> SearchEntry<'a> {
    fn new(node: &'a str, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for SearchEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for SearchEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
