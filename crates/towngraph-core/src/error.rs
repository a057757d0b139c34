//! Error types and exit codes for towngraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed road data, unknown town, no route)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the towngraph command layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input, missing town or road (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during towngraph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Invalid input
    #[error("invalid {context} name: {value:?}")]
    InvalidName { context: String, value: String },

    #[error("road weight must be non-negative, got {weight}")]
    NegativeWeight { weight: i64 },

    #[error("road weight {weight} exceeds the supported maximum")]
    WeightOutOfRange { weight: i64 },

    #[error("a road cannot connect {town} to itself")]
    SelfLoop { town: String },

    // Structural violations
    #[error("town not found: {town}")]
    MissingVertex { town: String },

    #[error("a road already connects {town1} and {town2}: {existing}")]
    DuplicateEdge {
        town1: String,
        town2: String,
        existing: String,
    },

    // Data loading
    #[error("malformed road data on line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("failed to read {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Generic failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    UsageError(String),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an empty or otherwise unusable name
    pub fn invalid_name(context: &str, value: impl Into<String>) -> Self {
        GraphError::InvalidName {
            context: context.to_string(),
            value: value.into(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed line of road data
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        GraphError::Malformed {
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::InvalidName { .. }
            | GraphError::NegativeWeight { .. }
            | GraphError::WeightOutOfRange { .. }
            | GraphError::SelfLoop { .. }
            | GraphError::MissingVertex { .. }
            | GraphError::DuplicateEdge { .. }
            | GraphError::Malformed { .. }
            | GraphError::NotFound { .. } => ExitCode::Data,

            GraphError::ReadFile { .. }
            | GraphError::Io(_)
            | GraphError::Toml(_)
            | GraphError::Json(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::InvalidName { .. } => "invalid_name",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::WeightOutOfRange { .. } => "weight_out_of_range",
            GraphError::SelfLoop { .. } => "self_loop",
            GraphError::MissingVertex { .. } => "missing_vertex",
            GraphError::DuplicateEdge { .. } => "duplicate_edge",
            GraphError::Malformed { .. } => "malformed",
            GraphError::NotFound { .. } => "not_found",
            GraphError::ReadFile { .. } => "read_file",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Json(_) => "json_error",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for towngraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
