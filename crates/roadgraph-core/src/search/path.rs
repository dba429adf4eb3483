//! Predecessor links and path reconstruction

use crate::network::JunctionId;

/// Parent links recorded by a search, one slot per junction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predecessors {
    parents: Vec<Option<JunctionId>>,
}

impl Predecessors {
    /// Links for a network of `len` junctions, all initially unset
    pub(crate) fn new(len: usize) -> Self {
        Self {
            parents: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Parent of a junction, `None` for roots and undiscovered junctions
    pub fn parent(&self, junction: JunctionId) -> Option<JunctionId> {
        self.parents[junction]
    }

    pub(crate) fn set_parent(&mut self, junction: JunctionId, parent: JunctionId) {
        self.parents[junction] = Some(parent);
    }

    /// Reconstruct the recorded path from `source` to `destination`.
    ///
    /// Walks parent links backwards from the destination and reverses the
    /// result. Returns `[destination]` when the two coincide, and an empty
    /// vector when the links never lead back to the source. A negative
    /// cycle can leave the links cyclic; the walk stops as soon as the
    /// sequence grows past the junction count, since no simple path
    /// revisits a junction.
    pub fn path(&self, source: JunctionId, destination: JunctionId) -> Vec<JunctionId> {
        if destination == source {
            return vec![destination];
        }

        let mut sequence = vec![destination];
        let mut current = destination;
        loop {
            let Some(parent) = self.parents[current] else {
                return Vec::new();
            };
            sequence.push(parent);
            if sequence.len() > self.parents.len() {
                return Vec::new();
            }
            if parent == source {
                sequence.reverse();
                return sequence;
            }
            current = parent;
        }
    }
}
