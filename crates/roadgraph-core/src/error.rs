//! Error types and exit codes for roadgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing network file, malformed records, unknown zone)
//!
//! Unreachable junctions, empty paths, and detected negative cycles are
//! normal analysis outcomes carried on result types, not errors.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed network data (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during roadgraph operations
#[derive(Error, Debug)]
pub enum RoadgraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("unknown cost attribute: {0} (expected: length, travel-time, speed, capacity, lanes, or level)")]
    UnknownCostAttribute(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("network file not found: {path:?}")]
    NetworkNotFound { path: PathBuf },

    #[error("invalid network: {reason}")]
    InvalidNetwork { reason: String },

    #[error("junction not found: {zone}")]
    JunctionNotFound { zone: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl RoadgraphError {
    /// Create an error for a malformed network description
    pub fn invalid_network(reason: impl Into<String>) -> Self {
        RoadgraphError::InvalidNetwork {
            reason: reason.into(),
        }
    }

    /// Create an error for a zone identifier absent from the network
    pub fn junction_not_found(zone: impl Into<String>) -> Self {
        RoadgraphError::JunctionNotFound { zone: zone.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            RoadgraphError::UnknownFormat(_)
            | RoadgraphError::DuplicateFormat
            | RoadgraphError::UnknownCostAttribute(_)
            | RoadgraphError::UsageError(_) => ExitCode::Usage,

            // Data errors
            RoadgraphError::NetworkNotFound { .. }
            | RoadgraphError::InvalidNetwork { .. }
            | RoadgraphError::JunctionNotFound { .. }
            | RoadgraphError::Json(_)
            | RoadgraphError::Toml(_) => ExitCode::Data,

            // Generic failures
            RoadgraphError::Io(_) | RoadgraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RoadgraphError::UnknownFormat(_) => "unknown_format",
            RoadgraphError::DuplicateFormat => "duplicate_format",
            RoadgraphError::UnknownCostAttribute(_) => "unknown_cost_attribute",
            RoadgraphError::UsageError(_) => "usage_error",
            RoadgraphError::NetworkNotFound { .. } => "network_not_found",
            RoadgraphError::InvalidNetwork { .. } => "invalid_network",
            RoadgraphError::JunctionNotFound { .. } => "junction_not_found",
            RoadgraphError::Json(_) => "json_error",
            RoadgraphError::Toml(_) => "toml_error",
            RoadgraphError::Io(_) => "io_error",
            RoadgraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for roadgraph operations
pub type Result<T> = std::result::Result<T, RoadgraphError>;
