//! Common test utilities and fixture graphs.
//!
//! Fixture graphs place nodes a few hundred metres apart and give every road
//! a weight at least as large as the straight-line distance between its
//! endpoints, so A* is expected to return optimal routes on all of them.

#![allow(dead_code)]

use std::collections::HashMap;

use navifly_lib::{haversine_km, Graph, Node};

/// A–B (5), B–C (5) with nodes close enough that the heuristic is tiny.
pub fn chain_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_node(Node::new("A", "Alpha", 33.0, -112.0));
    graph.add_node(Node::new("B", "Bravo", 33.0, -111.9999));
    graph.add_node(Node::new("C", "Charlie", 33.0, -111.9998));
    graph.add_edge("A", "B", 5.0);
    graph.add_edge("B", "C", 5.0);
    graph
}

/// [`chain_graph`] plus an isolated node `D`.
pub fn chain_with_island() -> Graph {
    let mut graph = chain_graph();
    graph.add_node(Node::new("D", "Delta", 33.0, -111.9997));
    graph
}

/// Grid of `rows` x `cols` nodes named `r{row}c{col}`, 0.01° apart, with
/// varied weights and a handful of diagonal shortcuts.
pub fn grid_graph(rows: usize, cols: usize) -> Graph {
    let mut graph = Graph::new();
    let id = |r: usize, c: usize| format!("r{r}c{c}");

    for r in 0..rows {
        for c in 0..cols {
            graph.add_node(Node::new(
                id(r, c),
                format!("Grid {r}/{c}"),
                33.0 + r as f64 * 0.01,
                -112.0 + c as f64 * 0.01,
            ));
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                connect(&mut graph, &id(r, c), &id(r, c + 1), 1.0 + ((r * 7 + c * 3) % 5) as f64 * 0.4);
            }
            if r + 1 < rows {
                connect(&mut graph, &id(r, c), &id(r + 1, c), 1.0 + ((r * 5 + c * 11) % 4) as f64 * 0.5);
            }
            if r + 1 < rows && c + 1 < cols && (r + c) % 3 == 0 {
                connect(&mut graph, &id(r, c), &id(r + 1, c + 1), 1.1);
            }
        }
    }

    graph
}

/// Add a road whose weight is `factor` times the straight-line distance.
pub fn connect(graph: &mut Graph, from: &str, to: &str, factor: f64) {
    let a = graph.node(from).expect("from node exists").coordinate();
    let b = graph.node(to).expect("to node exists").coordinate();
    graph.add_edge(from, to, haversine_km(a, b) * factor);
}

/// Sum of the cheapest parallel edge between each consecutive pair.
pub fn path_cost(graph: &Graph, path: &[String]) -> Option<f64> {
    path.windows(2)
        .map(|pair| {
            graph
                .neighbours(&pair[0])
                .iter()
                .filter(|edge| edge.to == pair[1])
                .map(|edge| edge.weight)
                .min_by(f64::total_cmp)
        })
        .sum()
}

/// Exhaustive Bellman-Ford relaxation; the reference optimum for `start`.
pub fn exhaustive_costs(graph: &Graph, start: &str) -> HashMap<String, f64> {
    let mut costs: HashMap<String, f64> = HashMap::new();
    costs.insert(start.to_string(), 0.0);

    for _ in 0..graph.node_count() {
        let mut changed = false;
        for node in graph.nodes() {
            let Some(&base) = costs.get(&node.id) else {
                continue;
            };
            for edge in graph.neighbours(&node.id) {
                let candidate = base + edge.weight;
                let known = costs.get(&edge.to).copied().unwrap_or(f64::INFINITY);
                if candidate < known {
                    costs.insert(edge.to.clone(), candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    costs
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
