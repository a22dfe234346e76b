use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::geometry::build_display_geometry;
use crate::graph::{Graph, Node};
use crate::instructions::{build_instructions, Instruction};
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// One line per location.
    PlainText,
    /// Numbered driving directions.
    Directions,
}

/// Where the `road_geometry` of a summary came from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GeometrySource {
    /// Straight-line interpolation between waypoints.
    Interpolated,
    /// Supplied by the caller, typically from an external routing provider.
    External,
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub path: Vec<String>,
    /// Total road weight of the route.
    pub distance: f64,
    pub nodes: Vec<Node>,
    pub instructions: Vec<Instruction>,
    pub road_geometry: Vec<Coordinate>,
    pub geometry_source: GeometrySource,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved locations,
    /// directions and interpolated display geometry.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan, subdivisions: usize) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let nodes = plan
            .steps
            .iter()
            .map(|id| {
                graph.node(id).cloned().ok_or_else(|| Error::UnknownLocation {
                    name: id.clone(),
                    suggestions: Vec::new(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            algorithm: plan.algorithm,
            path: plan.steps.clone(),
            distance: plan.cost,
            nodes,
            instructions: build_instructions(&plan.steps, graph),
            road_geometry: build_display_geometry(&plan.steps, graph, subdivisions),
            geometry_source: GeometrySource::Interpolated,
        })
    }

    /// Replace the interpolated geometry with externally fetched road
    /// geometry. An empty `geometry` keeps the interpolated fallback.
    pub fn with_road_geometry(mut self, geometry: Vec<Coordinate>) -> Self {
        if !geometry.is_empty() {
            self.road_geometry = geometry;
            self.geometry_source = GeometrySource::External;
        }
        self
    }

    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Directions => self.render_directions(),
        }
    }

    fn start_name(&self) -> &str {
        self.nodes.first().map(|n| n.name.as_str()).unwrap_or("<unknown>")
    }

    fn goal_name(&self) -> &str {
        self.nodes.last().map(|n| n.name.as_str()).unwrap_or("<unknown>")
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} roads, {:.1} km, algorithm: {})",
            self.start_name(),
            self.goal_name(),
            self.hop_count(),
            self.distance,
            self.algorithm
        );
        for (index, node) in self.nodes.iter().enumerate() {
            let _ = writeln!(buffer, "{:>3}: {} ({})", index, node.name, node.id);
        }
        buffer
    }

    fn render_directions(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Directions from {} to {} ({:.1} km):",
            self.start_name(),
            self.goal_name(),
            self.distance
        );
        if self.instructions.is_empty() {
            let _ = writeln!(buffer, "  You are already at your destination.");
        }
        for (index, instruction) in self.instructions.iter().enumerate() {
            let _ = writeln!(buffer, "{:>3}. {}", index + 1, instruction.text);
        }
        let _ = writeln!(buffer, "Arrive at {}.", self.goal_name());
        buffer
    }
}
