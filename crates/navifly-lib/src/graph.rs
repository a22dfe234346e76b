use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Named location within the road network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lon,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Directed half of a road connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Road network used by the search functions.
///
/// Nodes are stored by value and keyed by identifier; edges refer to nodes by
/// identifier only. The graph is assembled once and then shared read-only, so
/// it can be borrowed by any number of concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<String, Node>,
    adjacency: HashMap<String, Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any existing node with the same identifier.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node.id.clone(), node);
    }

    /// Connect `from` and `to` in both directions with the same weight.
    ///
    /// Weights must be finite and non-negative for search results to be
    /// optimal; this is not checked here. Parallel edges are kept as-is.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push(Edge {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        self.adjacency.entry(to.to_string()).or_default().push(Edge {
            from: to.to_string(),
            to: from.to_string(),
            weight,
        });
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Return the outgoing edges for a node identifier.
    pub fn neighbours(&self, id: &str) -> &[Edge] {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All nodes ordered by display name, then identifier.
    pub fn locations(&self) -> Vec<&Node> {
        let mut locations: Vec<&Node> = self.nodes.values().collect();
        locations.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        locations
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected road connections.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_inserts_both_directions() {
        let mut graph = Graph::new();
        graph.add_node(Node::new("a", "A", 0.0, 0.0));
        graph.add_node(Node::new("b", "B", 0.0, 1.0));
        graph.add_edge("a", "b", 4.0);

        assert_eq!(graph.neighbours("a").len(), 1);
        assert_eq!(graph.neighbours("a")[0].from, "a");
        assert_eq!(graph.neighbours("a")[0].to, "b");
        assert_eq!(graph.neighbours("b")[0].from, "b");
        assert_eq!(graph.neighbours("b")[0].to, "a");
        assert_eq!(graph.neighbours("b")[0].weight, 4.0);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn parallel_edges_are_not_deduplicated() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", 4.0);
        graph.add_edge("a", "b", 4.0);
        assert_eq!(graph.neighbours("a").len(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn add_node_overwrites_by_identifier() {
        let mut graph = Graph::new();
        graph.add_node(Node::new("a", "Old", 0.0, 0.0));
        graph.add_node(Node::new("a", "New", 1.0, 1.0));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.node("a").map(|n| n.name.as_str()), Some("New"));
    }

    #[test]
    fn unknown_node_has_no_neighbours() {
        let graph = Graph::new();
        assert!(graph.neighbours("nowhere").is_empty());
        assert!(!graph.contains("nowhere"));
    }

    #[test]
    fn locations_are_sorted_by_name() {
        let mut graph = Graph::new();
        graph.add_node(Node::new("z", "Alpha", 0.0, 0.0));
        graph.add_node(Node::new("a", "Charlie", 0.0, 0.0));
        graph.add_node(Node::new("m", "Bravo", 0.0, 0.0));
        let names: Vec<_> = graph.locations().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
    }
}
