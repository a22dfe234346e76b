use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use navifly_cli::commands::locations::handle_locations_command;
use navifly_cli::commands::route::{handle_route_command, RouteCommandArgs};
use navifly_cli::output::OutputFormat;
use navifly_lib::{resolve_network_source, RouteAlgorithm, DEFAULT_SUBDIVISIONS};

#[derive(Parser, Debug)]
#[command(author, version, about = "NaviFly road-network routing")]
struct Cli {
    /// Road-network JSON file. Defaults to $NAVIFLY_NETWORK, then the
    /// platform data directory, then the built-in Arizona network.
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a driving route between two locations.
    Route {
        /// Starting location identifier or name.
        #[arg(long = "from")]
        from: String,
        /// Destination location identifier or name.
        #[arg(long = "to")]
        to: String,
        /// Search algorithm (a-star or dijkstra).
        #[arg(long, default_value_t = RouteAlgorithm::AStar)]
        algorithm: RouteAlgorithm,
        /// Interpolated points per road segment in the display geometry.
        #[arg(long, default_value_t = DEFAULT_SUBDIVISIONS)]
        subdivisions: usize,
    },
    /// List every location in the road network.
    Locations,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source = resolve_network_source(cli.network.as_deref());
    let graph = source
        .load()
        .with_context(|| format!("failed to load road network from {source}"))?;

    let output = match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
            subdivisions,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                algorithm,
                subdivisions,
            };
            handle_route_command(&graph, &args, cli.format)?
        }
        Command::Locations => handle_locations_command(&graph, cli.format)?,
    };

    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("failed to write output")?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
