//! Bellman-Ford shortest paths
//!
//! Relaxes every road once per pass, one pass per junction, then scans
//! for roads that still admit a cheaper path. Any such road proves a
//! negative-weight cycle reachable from the source, in which case the
//! reported distances are not shortest-path lengths. Costs are read from
//! the network's cost attribute and truncated toward zero to integers.

use tracing::debug;

use crate::network::{JunctionId, Network, RoadId};
use crate::search::{path::Predecessors, INFINITE};

/// Result of one Bellman-Ford run
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: JunctionId,
    distances: Vec<i64>,
    negative_cycle: bool,
    /// Parent links of the shortest-path tree
    pub predecessors: Predecessors,
}

impl ShortestPaths {
    pub fn source(&self) -> JunctionId {
        self.source
    }

    /// Cost of the cheapest known path from the source, [`INFINITE`]
    /// when unreached
    pub fn distance(&self, junction: JunctionId) -> i64 {
        self.distances[junction]
    }

    pub fn is_reached(&self, junction: JunctionId) -> bool {
        self.distances[junction] != INFINITE
    }

    /// Number of junctions reached from the source, the source included
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|&&d| d != INFINITE).count()
    }

    /// Whether a negative-weight cycle is reachable from the source.
    /// When true, distances and paths are unreliable.
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Cheapest path from the source, empty when unreached
    pub fn path(&self, destination: JunctionId) -> Vec<JunctionId> {
        self.predecessors.path(self.source, destination)
    }
}

/// Road cost truncated toward zero
fn truncated_cost(network: &Network, road: RoadId) -> i64 {
    network.cost(road) as i64
}

/// Whether taking `road` from its tail would shorten the path to its head.
///
/// An unreached tail proposes no path, so the sentinel never enters the
/// sum. Finite sums saturate instead of wrapping.
fn admits_cheaper_path(distances: &[i64], from: JunctionId, to: JunctionId, cost: i64) -> bool {
    if distances[from] == INFINITE {
        return false;
    }
    distances[from].saturating_add(cost) < distances[to]
}

fn relax(
    distances: &mut [i64],
    predecessors: &mut Predecessors,
    from: JunctionId,
    to: JunctionId,
    cost: i64,
) {
    if admits_cheaper_path(distances, from, to, cost) {
        distances[to] = distances[from].saturating_add(cost);
        predecessors.set_parent(to, from);
    }
}

fn initialize_single_source(n: usize, source: JunctionId) -> (Vec<i64>, Predecessors) {
    let mut distances = vec![INFINITE; n];
    distances[source] = 0;
    (distances, Predecessors::new(n))
}

/// Single-source shortest paths from `source` under the network's cost
/// attribute, with negative roads allowed
#[tracing::instrument(skip(network), fields(junctions = network.junction_count()))]
pub fn bellman_ford(network: &Network, source: JunctionId) -> ShortestPaths {
    let (mut distances, mut predecessors) =
        initialize_single_source(network.junction_count(), source);

    for _ in 0..network.junction_count() {
        for (id, road) in network.roads() {
            relax(
                &mut distances,
                &mut predecessors,
                road.from,
                road.to,
                truncated_cost(network, id),
            );
        }
    }

    let negative_cycle = network.roads().any(|(id, road)| {
        admits_cheaper_path(&distances, road.from, road.to, truncated_cost(network, id))
    });

    let paths = ShortestPaths {
        source,
        distances,
        negative_cycle,
        predecessors,
    };
    debug!(
        reached = paths.reached_count(),
        negative_cycle = paths.negative_cycle,
        "shortest paths done"
    );
    paths
}
