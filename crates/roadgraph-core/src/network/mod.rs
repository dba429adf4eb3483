//! Road network model
//!
//! Junctions are stored in a dense vector and addressed by [`JunctionId`],
//! the index assigned in first-seen order. External zone identifiers map to
//! ids through an interning table, so the search algorithms work on plain
//! `usize` indices and never touch strings. Each junction keeps the list of
//! its outgoing roads for O(out-degree) neighbor scans.

pub mod loader;
pub mod road;

use std::collections::HashMap;
use std::ops::Range;

pub use road::{AttrKind, CostAttribute, Road};

/// Dense junction index
pub type JunctionId = usize;

/// Dense road index
pub type RoadId = usize;

/// A junction keyed by its external zone identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Junction {
    /// Zone identifier from the source data
    pub zone: String,
}

/// A directed road network with a fixed cost attribute
#[derive(Debug, Clone)]
pub struct Network {
    cost_attribute: CostAttribute,
    junctions: Vec<Junction>,
    roads: Vec<Road>,
    outgoing: Vec<Vec<RoadId>>,
    zone_index: HashMap<String, JunctionId>,
}

impl Network {
    /// An empty network reading the given attribute as the edge cost
    pub fn new(cost_attribute: CostAttribute) -> Self {
        Self {
            cost_attribute,
            junctions: Vec::new(),
            roads: Vec::new(),
            outgoing: Vec::new(),
            zone_index: HashMap::new(),
        }
    }

    /// Attribute the search algorithms read as the edge cost
    pub fn cost_attribute(&self) -> CostAttribute {
        self.cost_attribute
    }

    /// Intern a zone identifier, returning the existing id on repeats
    pub fn add_junction(&mut self, zone: &str) -> JunctionId {
        if let Some(&id) = self.zone_index.get(zone) {
            return id;
        }
        let id = self.junctions.len();
        self.junctions.push(Junction {
            zone: zone.to_string(),
        });
        self.outgoing.push(Vec::new());
        self.zone_index.insert(zone.to_string(), id);
        id
    }

    /// Add a directed road. Both endpoints must already be interned.
    pub fn add_road(&mut self, road: Road) -> RoadId {
        debug_assert!(road.from < self.junctions.len());
        debug_assert!(road.to < self.junctions.len());
        let id = self.roads.len();
        self.outgoing[road.from].push(id);
        self.roads.push(road);
        id
    }

    pub fn junction(&self, id: JunctionId) -> &Junction {
        &self.junctions[id]
    }

    /// Zone identifier of a junction
    pub fn zone(&self, id: JunctionId) -> &str {
        &self.junctions[id].zone
    }

    pub fn road(&self, id: RoadId) -> &Road {
        &self.roads[id]
    }

    /// Cost of a road under the selected attribute
    pub fn cost(&self, id: RoadId) -> f64 {
        self.roads[id].attribute(self.cost_attribute)
    }

    /// Overwrite the cost of a road under the selected attribute
    pub fn set_cost(&mut self, id: RoadId, value: f64) {
        let attr = self.cost_attribute;
        self.roads[id].set_attribute(attr, value);
    }

    pub fn junction_count(&self) -> usize {
        self.junctions.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// All junction ids in interning order
    pub fn junction_ids(&self) -> Range<JunctionId> {
        0..self.junctions.len()
    }

    /// Outgoing roads of a junction in insertion order
    pub fn outgoing(&self, id: JunctionId) -> &[RoadId] {
        &self.outgoing[id]
    }

    /// Look up a junction by its zone identifier
    pub fn resolve_zone(&self, zone: &str) -> Option<JunctionId> {
        self.zone_index.get(zone).copied()
    }

    /// All roads with their ids
    pub fn roads(&self) -> impl Iterator<Item = (RoadId, &Road)> {
        self.roads.iter().enumerate()
    }
}
