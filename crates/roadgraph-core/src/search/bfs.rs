//! Breadth-first search
//!
//! Expands junctions in FIFO order from a single source, so every
//! junction is discovered at its minimum hop count. Road costs are
//! ignored; one road is one hop.

use std::collections::VecDeque;

use tracing::debug;

use crate::network::{JunctionId, Network};
use crate::search::{adjacent_of, path::Predecessors, Color, INFINITE};

/// Result of one breadth-first search run
#[derive(Debug, Clone)]
pub struct BfsTree {
    source: JunctionId,
    distances: Vec<i64>,
    colors: Vec<Color>,
    /// Parent links of the breadth-first tree
    pub predecessors: Predecessors,
}

impl BfsTree {
    pub fn source(&self) -> JunctionId {
        self.source
    }

    /// Hop count from the source, [`INFINITE`] when unreached
    pub fn distance(&self, junction: JunctionId) -> i64 {
        self.distances[junction]
    }

    pub fn color(&self, junction: JunctionId) -> Color {
        self.colors[junction]
    }

    pub fn is_reached(&self, junction: JunctionId) -> bool {
        self.distances[junction] != INFINITE
    }

    /// Number of junctions reached from the source, the source included
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|&&d| d != INFINITE).count()
    }

    /// Minimum-hop path from the source, empty when unreached
    pub fn path(&self, destination: JunctionId) -> Vec<JunctionId> {
        self.predecessors.path(self.source, destination)
    }
}

/// Breadth-first search over all junctions reachable from `source`
#[tracing::instrument(skip(network), fields(junctions = network.junction_count()))]
pub fn bfs(network: &Network, source: JunctionId) -> BfsTree {
    let n = network.junction_count();
    let mut colors = vec![Color::White; n];
    let mut distances = vec![INFINITE; n];
    let mut predecessors = Predecessors::new(n);

    colors[source] = Color::Gray;
    distances[source] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);
    while let Some(junction) = queue.pop_front() {
        for neighbor in adjacent_of(network, junction) {
            if colors[neighbor] == Color::White {
                colors[neighbor] = Color::Gray;
                distances[neighbor] = distances[junction] + 1;
                predecessors.set_parent(neighbor, junction);
                queue.push_back(neighbor);
            }
        }
        colors[junction] = Color::Black;
    }

    let tree = BfsTree {
        source,
        distances,
        colors,
        predecessors,
    };
    debug!(reached = tree.reached_count(), "breadth-first search done");
    tree
}
