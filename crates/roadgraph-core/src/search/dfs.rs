//! Depth-first search
//!
//! Builds a depth-first forest over every junction in the network,
//! stamping each junction with discovery and finishing times drawn from
//! one global counter. Roots are taken in junction id order, so a given
//! network always produces the same forest. The traversal keeps its own
//! frame stack on the heap; network depth never touches the call stack.

use tracing::debug;

use crate::network::{JunctionId, Network};
use crate::search::{adjacent_of, path::Predecessors, Color};

/// Result of a depth-first search over the whole network
#[derive(Debug, Clone)]
pub struct DfsForest {
    discovery: Vec<i64>,
    finish: Vec<i64>,
    colors: Vec<Color>,
    /// Parent links of the depth-first forest
    pub predecessors: Predecessors,
}

impl DfsForest {
    /// Time the junction was first discovered, in 1..=2n
    pub fn discovery_time(&self, junction: JunctionId) -> i64 {
        self.discovery[junction]
    }

    /// Time the junction's outgoing roads were exhausted, in 1..=2n
    pub fn finishing_time(&self, junction: JunctionId) -> i64 {
        self.finish[junction]
    }

    pub fn color(&self, junction: JunctionId) -> Color {
        self.colors[junction]
    }

    /// Number of trees in the forest
    pub fn tree_count(&self) -> usize {
        (0..self.predecessors.len())
            .filter(|&junction| self.predecessors.parent(junction).is_none())
            .count()
    }

    /// Tree path between two junctions, empty when they share no tree
    /// or the source is not an ancestor of the destination
    pub fn path(&self, source: JunctionId, destination: JunctionId) -> Vec<JunctionId> {
        self.predecessors.path(source, destination)
    }
}

/// One junction being expanded, with its next unvisited neighbor index
struct Frame {
    junction: JunctionId,
    neighbors: Vec<JunctionId>,
    next: usize,
}

impl Frame {
    fn new(network: &Network, junction: JunctionId) -> Self {
        Self {
            junction,
            neighbors: adjacent_of(network, junction),
            next: 0,
        }
    }
}

/// Depth-first search over every junction in the network
#[tracing::instrument(skip(network), fields(junctions = network.junction_count()))]
pub fn dfs(network: &Network) -> DfsForest {
    let n = network.junction_count();
    let mut colors = vec![Color::White; n];
    let mut discovery = vec![0i64; n];
    let mut finish = vec![0i64; n];
    let mut predecessors = Predecessors::new(n);
    let mut time = 0i64;
    let mut stack: Vec<Frame> = Vec::new();

    for root in network.junction_ids() {
        if colors[root] != Color::White {
            continue;
        }
        time += 1;
        discovery[root] = time;
        colors[root] = Color::Gray;
        stack.push(Frame::new(network, root));

        while let Some(frame) = stack.last_mut() {
            if frame.next < frame.neighbors.len() {
                let neighbor = frame.neighbors[frame.next];
                frame.next += 1;
                if colors[neighbor] == Color::White {
                    let parent = frame.junction;
                    predecessors.set_parent(neighbor, parent);
                    time += 1;
                    discovery[neighbor] = time;
                    colors[neighbor] = Color::Gray;
                    stack.push(Frame::new(network, neighbor));
                }
            } else {
                let junction = frame.junction;
                stack.pop();
                colors[junction] = Color::Black;
                time += 1;
                finish[junction] = time;
            }
        }
    }

    let forest = DfsForest {
        discovery,
        finish,
        colors,
        predecessors,
    };
    debug!(trees = forest.tree_count(), "depth-first search done");
    forest
}
