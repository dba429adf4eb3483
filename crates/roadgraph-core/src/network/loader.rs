//! Network file loading
//!
//! Networks are stored as a single JSON document listing roads and,
//! optionally, junctions with no roads at all. Road endpoints are zone
//! identifiers; junctions are interned in file order, road endpoints
//! first and then the isolated zones in `junctions`, so ids are stable
//! for a given file.

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Result, RoadgraphError};
use crate::network::{CostAttribute, Network, Road};

/// On-disk network document
#[derive(Debug, Deserialize)]
struct NetworkFile {
    /// Zones with no incident roads
    #[serde(default)]
    junctions: Vec<String>,
    #[serde(default)]
    roads: Vec<RoadRecord>,
}

/// One road entry between zones `a` and `b`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RoadRecord {
    #[serde(default)]
    id: i64,
    a: String,
    b: String,
    #[serde(default)]
    length: i64,
    #[serde(default)]
    travel_time: f64,
    #[serde(default)]
    speed: f64,
    #[serde(default)]
    capacity: i32,
    #[serde(default)]
    lanes: i32,
    #[serde(default)]
    level: i32,
}

/// Load a network file, reading `cost_attribute` as the edge cost
pub fn load(path: &Path, cost_attribute: CostAttribute) -> Result<Network> {
    let start = Instant::now();
    if !path.exists() {
        return Err(RoadgraphError::NetworkNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let file: NetworkFile = serde_json::from_str(&content)?;

    let mut network = Network::new(cost_attribute);
    for record in &file.roads {
        let from = network.add_junction(&record.a);
        let to = network.add_junction(&record.b);
        let road = Road {
            id: record.id,
            from,
            to,
            length: record.length,
            travel_time: record.travel_time,
            speed: record.speed,
            capacity: record.capacity,
            lanes: record.lanes,
            level: record.level,
        };
        debug!(road = record.id, a = %record.a, b = %record.b, "add road");
        network.add_road(road);
    }
    for zone in &file.junctions {
        network.add_junction(zone);
    }

    if network.junction_count() == 0 {
        return Err(RoadgraphError::invalid_network("network has no junctions"));
    }

    info!(
        junctions = network.junction_count(),
        roads = network.road_count(),
        elapsed = ?start.elapsed(),
        "network loaded"
    );
    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_network(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("network.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_roads_and_isolated_junctions() {
        let dir = TempDir::new().unwrap();
        let path = write_network(
            &dir,
            r#"{
                "junctions": ["8"],
                "roads": [
                    {"id": 1, "a": "1", "b": "2", "length": 450, "travel-time": 5.0},
                    {"id": 2, "a": "2", "b": "3", "length": 200, "travel-time": 2.0}
                ]
            }"#,
        );

        let network = load(&path, CostAttribute::TravelTime).unwrap();
        assert_eq!(network.junction_count(), 4);
        assert_eq!(network.road_count(), 2);

        let one = network.resolve_zone("1").unwrap();
        let two = network.resolve_zone("2").unwrap();
        assert_eq!(network.outgoing(one).len(), 1);
        assert_eq!(network.road(network.outgoing(one)[0]).to, two);

        // Isolated zone is present but has no roads
        let eight = network.resolve_zone("8").unwrap();
        assert!(network.outgoing(eight).is_empty());
    }

    #[test]
    fn test_load_shared_endpoints_intern_once() {
        let dir = TempDir::new().unwrap();
        let path = write_network(
            &dir,
            r#"{"roads": [
                {"a": "1", "b": "2"},
                {"a": "1", "b": "3"},
                {"a": "2", "b": "1"}
            ]}"#,
        );

        let network = load(&path, CostAttribute::TravelTime).unwrap();
        assert_eq!(network.junction_count(), 3);
        assert_eq!(network.road_count(), 3);
    }

    #[test]
    fn test_load_reads_cost_attribute() {
        let dir = TempDir::new().unwrap();
        let path = write_network(
            &dir,
            r#"{"roads": [{"a": "1", "b": "2", "length": 450, "travel-time": 5.5}]}"#,
        );

        let by_time = load(&path, CostAttribute::TravelTime).unwrap();
        assert_eq!(by_time.cost(0), 5.5);

        let by_length = load(&path, CostAttribute::Length).unwrap();
        assert_eq!(by_length.cost(0), 450.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        let err = load(&path, CostAttribute::TravelTime).unwrap_err();
        assert!(matches!(err, RoadgraphError::NetworkNotFound { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_network(&dir, "{not json");

        let err = load(&path, CostAttribute::TravelTime).unwrap_err();
        assert!(matches!(err, RoadgraphError::Json(_)));
    }

    #[test]
    fn test_load_empty_network() {
        let dir = TempDir::new().unwrap();
        let path = write_network(&dir, r#"{"junctions": [], "roads": []}"#);

        let err = load(&path, CostAttribute::TravelTime).unwrap_err();
        assert!(matches!(err, RoadgraphError::InvalidNetwork { .. }));
    }
}
