//! Roadgraph Core Library
//!
//! Directed road-network model and the search algorithms over it:
//! breadth-first reachability, depth-first forests, and Bellman-Ford
//! shortest paths with negative-cycle detection.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod network;
pub mod search;
