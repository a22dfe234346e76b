//! Locations command handler for listing the places a route can use.

use anyhow::Result;

use navifly_lib::Graph;

use crate::output::{render_locations, OutputFormat};

/// Handle the locations subcommand.
///
/// Lists every location in the network, sorted by display name.
pub fn handle_locations_command(graph: &Graph, format: OutputFormat) -> Result<String> {
    let locations = graph.locations();
    render_locations(&locations, format)
}
