//! `roadgraph bfs` command - breadth-first reachability from a source zone

use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{resolve_zone, PathReport};
use roadgraph_core::error::Result;
use roadgraph_core::network::Network;
use roadgraph_core::search::bfs;
use roadgraph_core::trace_time;

#[derive(Debug, Serialize)]
struct BfsReport {
    source: String,
    reached: usize,
    junctions: usize,
}

/// Execute the bfs command
pub fn execute(cli: &Cli, network: &Network, source: &str, to: Option<&str>) -> Result<()> {
    let source_id = resolve_zone(network, source)?;
    let start = Instant::now();
    let tree = bfs(network, source_id);
    trace_time!(start, "bfs_run", reached = tree.reached_count());

    if let Some(zone) = to {
        let dest = resolve_zone(network, zone)?;
        let report = PathReport::new(network, source_id, dest, &tree.path(dest))
            .with_hops(tree.distance(dest));

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Human => report.print_human(),
        }
        return Ok(());
    }

    match cli.format {
        OutputFormat::Json => {
            let report = BfsReport {
                source: source.to_string(),
                reached: tree.reached_count(),
                junctions: network.junction_count(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "reached {} of {} junctions from {}",
                    tree.reached_count(),
                    network.junction_count(),
                    source
                );
            }
        }
    }

    Ok(())
}
