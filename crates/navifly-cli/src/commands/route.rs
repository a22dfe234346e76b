//! Route command handler for computing driving routes between locations.

use anyhow::{Context, Result};

use navifly_lib::{plan_route, Graph, RouteAlgorithm, RouteRequest, RouteSummary};

use crate::output::{render_route, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting location identifier or name.
    pub from: String,
    /// Destination location identifier or name.
    pub to: String,
    /// Algorithm to use when planning the route.
    pub algorithm: RouteAlgorithm,
    /// Interpolated points per road segment in the display geometry.
    pub subdivisions: usize,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::a_star(self.from.clone(), self.to.clone()).with_algorithm(self.algorithm)
    }
}

/// Handle the route subcommand and return the rendered output.
pub fn handle_route_command(
    graph: &Graph,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<String> {
    let plan = plan_route(graph, &args.to_request())
        .with_context(|| format!("failed to plan a route from '{}' to '{}'", args.from, args.to))?;
    let summary = RouteSummary::from_plan(graph, &plan, args.subdivisions)?;

    tracing::debug!(
        hops = summary.hop_count(),
        points = summary.road_geometry.len(),
        "route summary built"
    );

    render_route(&summary, format)
}
