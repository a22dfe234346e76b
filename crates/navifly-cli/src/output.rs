//! Output formatting for route and location rendering.

use std::fmt;

use clap::ValueEnum;

use navifly_lib::{Node, RouteRenderMode, RouteSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per location along the route.
    #[default]
    Text,
    /// Numbered driving directions.
    Directions,
    /// Full route response as JSON, including display geometry.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            OutputFormat::Text => "text",
            OutputFormat::Directions => "directions",
            OutputFormat::Json => "json",
        };
        f.write_str(value)
    }
}

/// Render a route summary in the requested format.
pub fn render_route(summary: &RouteSummary, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.render(RouteRenderMode::PlainText)),
        OutputFormat::Directions => Ok(summary.render(RouteRenderMode::Directions)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)? + "\n"),
    }
}

/// Render the location list in the requested format.
///
/// Directions make no sense for a list, so that format falls back to text.
pub fn render_locations(locations: &[&Node], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(locations)? + "\n"),
        OutputFormat::Text | OutputFormat::Directions => {
            let width = locations.iter().map(|n| n.id.len()).max().unwrap_or(0);
            Ok(locations
                .iter()
                .map(|node| {
                    format!(
                        "{:<width$}  {} ({:.4}, {:.4})\n",
                        node.id, node.name, node.lat, node.lon
                    )
                })
                .collect())
        }
    }
}
