//! `roadgraph dfs` command - depth-first forest over the whole network

use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{resolve_zone, PathReport};
use roadgraph_core::error::Result;
use roadgraph_core::network::Network;
use roadgraph_core::search::dfs;
use roadgraph_core::trace_time;

#[derive(Debug, Serialize)]
struct DfsReport {
    junctions: usize,
    trees: usize,
}

/// Execute the dfs command
pub fn execute(cli: &Cli, network: &Network, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let start = Instant::now();
    let forest = dfs(network);
    trace_time!(start, "dfs_run", trees = forest.tree_count());

    if let (Some(from_zone), Some(to_zone)) = (from, to) {
        let source = resolve_zone(network, from_zone)?;
        let dest = resolve_zone(network, to_zone)?;
        let report = PathReport::new(network, source, dest, &forest.path(source, dest));

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Human => report.print_human(),
        }
        return Ok(());
    }

    match cli.format {
        OutputFormat::Json => {
            let report = DfsReport {
                junctions: network.junction_count(),
                trees: forest.tree_count(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "visited {} junctions in {} trees",
                    network.junction_count(),
                    forest.tree_count()
                );
            }
        }
    }

    Ok(())
}
