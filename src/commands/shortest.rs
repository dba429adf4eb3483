//! `roadgraph shortest` command - cheapest paths from a source zone

use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{resolve_zone, PathReport};
use roadgraph_core::error::Result;
use roadgraph_core::network::Network;
use roadgraph_core::search::bellman_ford;
use roadgraph_core::trace_time;

#[derive(Debug, Serialize)]
struct ShortestReport {
    source: String,
    cost_attribute: String,
    reached: usize,
    junctions: usize,
    negative_cycle: bool,
}

/// Execute the shortest command
pub fn execute(cli: &Cli, network: &Network, source: &str, to: Option<&str>) -> Result<()> {
    let source_id = resolve_zone(network, source)?;
    let start = Instant::now();
    let paths = bellman_ford(network, source_id);
    trace_time!(start, "shortest_run", reached = paths.reached_count());

    // A reachable negative cycle makes every distance unreliable, so no
    // path is reported even when a destination was asked for.
    if !paths.has_negative_cycle() {
        if let Some(zone) = to {
            let dest = resolve_zone(network, zone)?;
            let route = paths.path(dest);
            let hops = route.len() as i64 - 1;
            let report = PathReport::new(network, source_id, dest, &route)
                .with_hops(hops)
                .with_cost(paths.distance(dest));

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Human => report.print_human(),
            }
            return Ok(());
        }
    }

    match cli.format {
        OutputFormat::Json => {
            let report = ShortestReport {
                source: source.to_string(),
                cost_attribute: network.cost_attribute().to_string(),
                reached: paths.reached_count(),
                junctions: network.junction_count(),
                negative_cycle: paths.has_negative_cycle(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            if paths.has_negative_cycle() {
                println!(
                    "negative-weight cycle reachable from {}; distances are unreliable",
                    source
                );
            } else if !cli.quiet {
                println!(
                    "reached {} of {} junctions from {} (cost attribute: {})",
                    paths.reached_count(),
                    network.junction_count(),
                    source,
                    network.cost_attribute()
                );
            }
        }
    }

    Ok(())
}
