//! Display geometry for a route when no real road shape is available.
//!
//! The polyline is produced by linear interpolation between consecutive
//! waypoints. Callers that have fetched real road geometry from an external
//! provider should prefer it and use this only as a fallback.

use crate::geo::Coordinate;
use crate::graph::Graph;

/// Interpolated points emitted per road segment.
pub const DEFAULT_SUBDIVISIONS: usize = 20;

/// Build a dense polyline through the nodes of `path`.
///
/// The first node contributes its own coordinate; every following node
/// contributes `subdivisions` points evenly spaced along the straight segment
/// from the previous node, the last of which is the node itself. For `N`
/// waypoints this yields `1 + (N - 1) * subdivisions` points. A subdivision
/// count of zero is treated as one so the polyline still reaches the goal.
pub fn build_display_geometry<S: AsRef<str>>(
    path: &[S],
    graph: &Graph,
    subdivisions: usize,
) -> Vec<Coordinate> {
    let subdivisions = subdivisions.max(1);
    let waypoints: Vec<Coordinate> = path
        .iter()
        .filter_map(|id| graph.node(id.as_ref()).map(|node| node.coordinate()))
        .collect();

    let Some(first) = waypoints.first() else {
        return Vec::new();
    };

    let mut geometry = Vec::with_capacity(1 + (waypoints.len() - 1) * subdivisions);
    geometry.push(*first);
    for segment in waypoints.windows(2) {
        let (previous, current) = (segment[0], segment[1]);
        for step in 1..subdivisions {
            let t = step as f64 / subdivisions as f64;
            geometry.push(previous.lerp(&current, t));
        }
        // t = 1 is the waypoint itself, bit-for-bit.
        geometry.push(current);
    }
    geometry
}

/// [`build_display_geometry`] with [`DEFAULT_SUBDIVISIONS`].
pub fn build_default_geometry<S: AsRef<str>>(path: &[S], graph: &Graph) -> Vec<Coordinate> {
    build_display_geometry(path, graph, DEFAULT_SUBDIVISIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;

    fn graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_node(Node::new("a", "A", 33.0, -112.0));
        graph.add_node(Node::new("b", "B", 34.0, -111.0));
        graph.add_node(Node::new("c", "C", 34.5, -110.2));
        graph
    }

    #[test]
    fn empty_path_has_no_geometry() {
        assert!(build_display_geometry::<&str>(&[], &graph(), 5).is_empty());
    }

    #[test]
    fn single_node_emits_one_point() {
        let points = build_display_geometry(&["a"], &graph(), 5);
        assert_eq!(points, vec![Coordinate::new(33.0, -112.0)]);
    }

    #[test]
    fn point_count_matches_subdivisions() {
        let points = build_display_geometry(&["a", "b", "c"], &graph(), 4);
        assert_eq!(points.len(), 1 + 2 * 4);
        assert_eq!(points[0], Coordinate::new(33.0, -112.0));
        assert_eq!(points[4], Coordinate::new(34.0, -111.0));
        assert_eq!(points[8], Coordinate::new(34.5, -110.2));
        assert_eq!(points[2], Coordinate::new(33.5, -111.5));
    }

    #[test]
    fn zero_subdivisions_still_reaches_goal() {
        let points = build_display_geometry(&["a", "b"], &graph(), 0);
        assert_eq!(
            points,
            vec![Coordinate::new(33.0, -112.0), Coordinate::new(34.0, -111.0)]
        );
    }

    #[test]
    fn unknown_nodes_are_bridged() {
        let points = build_display_geometry(&["a", "ghost", "b"], &graph(), 4);
        assert_eq!(points.len(), 1 + 4);
        assert_eq!(points[0], Coordinate::new(33.0, -112.0));
        assert_eq!(points[2], Coordinate::new(33.5, -111.5));
        assert_eq!(points[4], Coordinate::new(34.0, -111.0));
    }

    #[test]
    fn path_of_unknown_nodes_has_no_geometry() {
        assert!(build_display_geometry(&["ghost", "phantom"], &graph(), 4).is_empty());
    }

    #[test]
    fn default_geometry_uses_twenty_points_per_segment() {
        let points = build_default_geometry(&["a", "b"], &graph());
        assert_eq!(points.len(), 1 + DEFAULT_SUBDIVISIONS);
    }
}
