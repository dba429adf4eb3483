//! Helper functions shared across commands

use serde::Serialize;

use roadgraph_core::error::{Result, RoadgraphError};
use roadgraph_core::network::{JunctionId, Network};

/// Resolve a zone identifier to its junction id
///
/// Returns an error naming the zone when the network has no such junction
pub fn resolve_zone(network: &Network, zone: &str) -> Result<JunctionId> {
    network
        .resolve_zone(zone)
        .ok_or_else(|| RoadgraphError::junction_not_found(zone))
}

/// Zone identifiers along a path of junction ids
pub fn zone_path(network: &Network, path: &[JunctionId]) -> Vec<String> {
    path.iter()
        .map(|&junction| network.zone(junction).to_string())
        .collect()
}

/// A rendered route between two zones
#[derive(Debug, Serialize)]
pub struct PathReport {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub junctions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hops: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
}

impl PathReport {
    pub fn new(
        network: &Network,
        from: JunctionId,
        to: JunctionId,
        path: &[JunctionId],
    ) -> Self {
        Self {
            from: network.zone(from).to_string(),
            to: network.zone(to).to_string(),
            found: !path.is_empty(),
            junctions: zone_path(network, path),
            hops: None,
            cost: None,
        }
    }

    /// Attach a hop count, kept only when the path exists
    pub fn with_hops(mut self, hops: i64) -> Self {
        if self.found {
            self.hops = Some(hops);
        }
        self
    }

    /// Attach a path cost, kept only when the path exists
    pub fn with_cost(mut self, cost: i64) -> Self {
        if self.found {
            self.cost = Some(cost);
        }
        self
    }

    pub fn print_human(&self) {
        if !self.found {
            println!("no path from {} to {} exists", self.from, self.to);
            return;
        }

        let route = self.junctions.join(" -> ");
        let mut notes = Vec::new();
        if let Some(hops) = self.hops {
            notes.push(if hops == 1 {
                "1 hop".to_string()
            } else {
                format!("{hops} hops")
            });
        }
        if let Some(cost) = self.cost {
            notes.push(format!("cost {cost}"));
        }

        if notes.is_empty() {
            println!("path: {route}");
        } else {
            println!("path: {route} ({})", notes.join(", "));
        }
    }
}
