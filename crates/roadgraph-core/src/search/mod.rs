//! Network search algorithms
//!
//! Three traversals over the same junction/road model: breadth-first
//! search for minimum-hop reachability, depth-first search for a
//! timestamped forest over the whole network, and Bellman-Ford for
//! cost-weighted shortest paths with negative-cycle detection. Each run
//! returns its own result struct; the network itself is never mutated by
//! a search.

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod path;

pub use bellman_ford::{bellman_ford, ShortestPaths};
pub use bfs::{bfs, BfsTree};
pub use dfs::{dfs, DfsForest};
pub use path::Predecessors;

use crate::network::{JunctionId, Network};

/// Sentinel cost for junctions no finite-cost path reaches.
///
/// Relaxation treats this as a saturating maximum: a road out of an
/// unreached junction never produces a candidate path, so the sentinel
/// cannot overflow into a spuriously small cost.
pub const INFINITE: i64 = i64::MAX;

/// Visit state of a junction during a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Not yet discovered
    White,
    /// Discovered, neighbors not exhausted
    Gray,
    /// Fully processed
    Black,
}

/// Distinct neighbor junctions reachable by one outgoing road,
/// in first-encounter order.
///
/// Parallel roads to the same junction collapse to one entry. Road
/// networks have single-digit out-degree, so a linear scan beats
/// hashing here.
pub(crate) fn adjacent_of(network: &Network, junction: JunctionId) -> Vec<JunctionId> {
    let mut neighbors = Vec::new();
    for &road in network.outgoing(junction) {
        let to = network.road(road).to;
        if !neighbors.contains(&to) {
            neighbors.push(to);
        }
    }
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{CostAttribute, Road};

    #[test]
    fn test_adjacent_of_deduplicates_parallel_roads() {
        let mut network = Network::new(CostAttribute::TravelTime);
        let a = network.add_junction("1");
        let b = network.add_junction("2");
        let c = network.add_junction("3");
        network.add_road(Road::new(1, a, b));
        network.add_road(Road::new(2, a, c));
        network.add_road(Road::new(3, a, b));

        assert_eq!(adjacent_of(&network, a), vec![b, c]);
    }

    #[test]
    fn test_adjacent_of_ignores_incoming() {
        let mut network = Network::new(CostAttribute::TravelTime);
        let a = network.add_junction("1");
        let b = network.add_junction("2");
        network.add_road(Road::new(1, a, b));

        assert!(adjacent_of(&network, b).is_empty());
    }
}
