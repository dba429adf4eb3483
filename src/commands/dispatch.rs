//! Command dispatch logic for roadgraph

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use roadgraph_core::config::{RunConfig, CONFIG_FILE_NAME};
use roadgraph_core::error::{Result, RoadgraphError};
use roadgraph_core::network::loader;
use roadgraph_core::trace_time;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        return Err(RoadgraphError::UsageError(
            "no command given (try: info, bfs, dfs, shortest)".to_string(),
        ));
    };

    let config = load_config(cli)?;

    // Command line beats environment beats config file
    let cost_attribute = cli.cost_attribute.unwrap_or(config.cost_attribute);
    let Some(network_path) = cli.network.clone().or(config.network) else {
        return Err(RoadgraphError::UsageError(
            "no network file given (use --network, ROADGRAPH_NETWORK, or the config file)"
                .to_string(),
        ));
    };

    let network = loader::load(&network_path, cost_attribute)?;
    trace_time!(start, "load_network", roads = network.road_count());

    match command {
        Commands::Info => commands::info::execute(cli, &network),
        Commands::Bfs { source, to } => {
            commands::bfs::execute(cli, &network, source, to.as_deref())
        }
        Commands::Dfs { from, to } => {
            commands::dfs::execute(cli, &network, from.as_deref(), to.as_deref())
        }
        Commands::Shortest { source, to } => {
            commands::shortest::execute(cli, &network, source, to.as_deref())
        }
    }
}

/// Load the run config from `--config`, or from `./roadgraph.toml` when
/// present, falling back to defaults
fn load_config(cli: &Cli) -> Result<RunConfig> {
    if let Some(path) = &cli.config {
        let config = RunConfig::load(path)?;
        debug!(path = %path.display(), "config loaded");
        return Ok(config);
    }

    let default_path = Path::new(CONFIG_FILE_NAME);
    if default_path.exists() {
        let config = RunConfig::load(default_path)?;
        debug!(path = %default_path.display(), "config loaded");
        return Ok(config);
    }

    Ok(RunConfig::default())
}
