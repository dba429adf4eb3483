//! CLI argument parsing for roadgraph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --network, --config, --cost-attribute, --format,
//! --quiet, --verbose

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use roadgraph_core::error::RoadgraphError;
use roadgraph_core::network::CostAttribute;

pub use roadgraph_core::format::OutputFormat;

fn parse_format(s: &str) -> Result<OutputFormat, RoadgraphError> {
    s.parse()
}

fn parse_cost_attribute(s: &str) -> Result<CostAttribute, RoadgraphError> {
    s.parse()
}

/// Roadgraph - road network reachability and shortest paths
#[derive(Parser, Debug)]
#[command(name = "roadgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network file to analyze
    #[arg(long, short = 'n', global = true, env = "ROADGRAPH_NETWORK")]
    pub network: Option<PathBuf>,

    /// Config file (default: ./roadgraph.toml when present)
    #[arg(long, global = true, env = "ROADGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Road attribute read as the edge cost
    #[arg(
        long,
        global = true,
        env = "ROADGRAPH_COST_ATTRIBUTE",
        value_parser = parse_cost_attribute
    )]
    pub cost_attribute: Option<CostAttribute>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize the loaded network
    Info,

    /// Breadth-first reachability from a source zone
    Bfs {
        /// Source zone
        source: String,

        /// Report the minimum-hop path to this zone
        #[arg(long)]
        to: Option<String>,
    },

    /// Depth-first forest over the whole network
    Dfs {
        /// Report the tree path from this zone
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Destination zone of the tree path
        #[arg(long, requires = "from")]
        to: Option<String>,
    },

    /// Cheapest paths from a source zone under the cost attribute
    Shortest {
        /// Source zone
        source: String,

        /// Report the cheapest path to this zone
        #[arg(long)]
        to: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bfs_with_destination() {
        let cli = Cli::try_parse_from(["roadgraph", "bfs", "261", "--to", "7"]).unwrap();
        match cli.command {
            Some(Commands::Bfs { source, to }) => {
                assert_eq!(source, "261");
                assert_eq!(to.as_deref(), Some("7"));
            }
            _ => panic!("expected bfs command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "roadgraph",
            "info",
            "--network",
            "city.json",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.network, Some(PathBuf::from("city.json")));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cost_attribute_flag() {
        let cli = Cli::try_parse_from(["roadgraph", "shortest", "1", "--cost-attribute", "length"])
            .unwrap();
        assert_eq!(cli.cost_attribute, Some(CostAttribute::Length));
    }

    #[test]
    fn test_unknown_cost_attribute_rejected() {
        let result =
            Cli::try_parse_from(["roadgraph", "shortest", "1", "--cost-attribute", "width"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dfs_from_requires_to() {
        let result = Cli::try_parse_from(["roadgraph", "dfs", "--from", "1"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["roadgraph", "dfs", "--from", "1", "--to", "2"]).unwrap();
        match cli.command {
            Some(Commands::Dfs { from, to }) => {
                assert_eq!(from.as_deref(), Some("1"));
                assert_eq!(to.as_deref(), Some("2"));
            }
            _ => panic!("expected dfs command"),
        }
    }

    #[test]
    fn test_format_defaults_to_human() {
        let cli = Cli::try_parse_from(["roadgraph", "info"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Human);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = Cli::try_parse_from(["roadgraph", "info", "--format", "records"]);
        assert!(result.is_err());
    }
}
