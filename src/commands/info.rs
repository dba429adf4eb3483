//! `roadgraph info` command - summarize the loaded network

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use roadgraph_core::error::Result;
use roadgraph_core::network::Network;

#[derive(Debug, Serialize)]
struct InfoReport {
    junctions: usize,
    roads: usize,
    cost_attribute: String,
    cost_kind: String,
}

/// Execute the info command
pub fn execute(cli: &Cli, network: &Network) -> Result<()> {
    let attr = network.cost_attribute();

    match cli.format {
        OutputFormat::Json => {
            let report = InfoReport {
                junctions: network.junction_count(),
                roads: network.road_count(),
                cost_attribute: attr.to_string(),
                cost_kind: attr.kind().to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("junctions: {}", network.junction_count());
            println!("roads: {}", network.road_count());
            println!("cost attribute: {} ({})", attr, attr.kind());
        }
    }

    Ok(())
}
