//! CLI commands for roadgraph

pub mod bfs;
pub mod dfs;
pub mod dispatch;
pub mod helpers;
pub mod info;
pub mod shortest;
