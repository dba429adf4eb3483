//! Road records and cost-attribute selection
//!
//! A road carries several numeric attributes of mixed declared kinds. The
//! search algorithms read exactly one of them as the edge cost, selected
//! once when the network is constructed, so the same traversal code can be
//! pointed at a different attribute without changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoadgraphError;
use crate::network::JunctionId;

/// Declared numeric kind of a road attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// 32-bit integer field
    Int,
    /// 64-bit integer field
    Long,
    /// Floating-point field
    Float,
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrKind::Int => write!(f, "int"),
            AttrKind::Long => write!(f, "long"),
            AttrKind::Float => write!(f, "float"),
        }
    }
}

/// Road attribute usable as the edge cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostAttribute {
    /// Road length in metres
    Length,
    /// Traversal time in seconds (default)
    #[default]
    TravelTime,
    /// Free-flow speed in km/h
    Speed,
    /// Throughput capacity in vehicles per hour
    Capacity,
    /// Number of lanes
    Lanes,
    /// Road classification level
    Level,
}

impl CostAttribute {
    /// Declared numeric kind of the underlying field
    pub fn kind(self) -> AttrKind {
        match self {
            CostAttribute::Length => AttrKind::Long,
            CostAttribute::TravelTime | CostAttribute::Speed => AttrKind::Float,
            CostAttribute::Capacity | CostAttribute::Lanes | CostAttribute::Level => AttrKind::Int,
        }
    }
}

impl FromStr for CostAttribute {
    type Err = RoadgraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "length" => Ok(CostAttribute::Length),
            "travel-time" | "travel_time" => Ok(CostAttribute::TravelTime),
            "speed" => Ok(CostAttribute::Speed),
            "capacity" => Ok(CostAttribute::Capacity),
            "lanes" => Ok(CostAttribute::Lanes),
            "level" => Ok(CostAttribute::Level),
            other => Err(RoadgraphError::UnknownCostAttribute(other.to_string())),
        }
    }
}

impl fmt::Display for CostAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostAttribute::Length => write!(f, "length"),
            CostAttribute::TravelTime => write!(f, "travel-time"),
            CostAttribute::Speed => write!(f, "speed"),
            CostAttribute::Capacity => write!(f, "capacity"),
            CostAttribute::Lanes => write!(f, "lanes"),
            CostAttribute::Level => write!(f, "level"),
        }
    }
}

/// A directed road between two junctions
#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    /// External identifier from the source data
    pub id: i64,
    /// Tail junction
    pub from: JunctionId,
    /// Head junction
    pub to: JunctionId,
    /// Length in metres
    pub length: i64,
    /// Traversal time in seconds
    pub travel_time: f64,
    /// Free-flow speed in km/h
    pub speed: f64,
    /// Throughput capacity in vehicles per hour
    pub capacity: i32,
    /// Number of lanes
    pub lanes: i32,
    /// Road classification level
    pub level: i32,
}

impl Road {
    /// A road with all attributes zeroed
    pub fn new(id: i64, from: JunctionId, to: JunctionId) -> Self {
        Self {
            id,
            from,
            to,
            length: 0,
            travel_time: 0.0,
            speed: 0.0,
            capacity: 0,
            lanes: 0,
            level: 0,
        }
    }

    /// Read the selected attribute as a generic numeric value
    pub fn attribute(&self, attr: CostAttribute) -> f64 {
        match attr {
            CostAttribute::Length => self.length as f64,
            CostAttribute::TravelTime => self.travel_time,
            CostAttribute::Speed => self.speed,
            CostAttribute::Capacity => f64::from(self.capacity),
            CostAttribute::Lanes => f64::from(self.lanes),
            CostAttribute::Level => f64::from(self.level),
        }
    }

    /// Write the selected attribute, dispatching on its declared kind.
    ///
    /// The integer kinds truncate fractional values toward zero.
    pub fn set_attribute(&mut self, attr: CostAttribute, value: f64) {
        match attr {
            CostAttribute::Length => self.length = value as i64,
            CostAttribute::TravelTime => self.travel_time = value,
            CostAttribute::Speed => self.speed = value,
            CostAttribute::Capacity => self.capacity = value as i32,
            CostAttribute::Lanes => self.lanes = value as i32,
            CostAttribute::Level => self.level = value as i32,
        }
    }
}
