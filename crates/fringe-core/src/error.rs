//! Error types and exit codes for fringe
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, dependency cycle, unreachable destination)
//! - 2: Usage error (bad flags/args, bad trip request)
//! - 3: Data error (malformed rule, file-info or map files, unknown names)
//!
//! The traversal engine itself never produces these: a visitor's stop
//! signal is ordinary control flow, reported as a paused outcome.

mod macros;

use thiserror::Error;

/// Exit codes for the fringe binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input files (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading inputs or running a client of the engine
#[derive(Error, Debug)]
pub enum FringeError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("{file}:{line}: {reason}")]
    Parse {
        file: String,
        line: usize,
        reason: String,
    },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("dependency cycle detected: {target} -> {prerequisite}")]
    Cycle {
        target: String,
        prerequisite: String,
    },

    #[error("no route from {from} to {to}")]
    Unreachable { from: String, to: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl FringeError {
    /// Create a parse error for a line of an input file
    pub fn parse(file: &str, line: usize, reason: impl std::fmt::Display) -> Self {
        FringeError::Parse {
            file: file.to_string(),
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        FringeError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        FringeError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FringeError::UnknownFormat(_) | FringeError::UsageError(_) => ExitCode::Usage,

            FringeError::Parse { .. } | FringeError::NotFound { .. } => ExitCode::Data,

            FringeError::Cycle { .. }
            | FringeError::Unreachable { .. }
            | FringeError::Io(_)
            | FringeError::Json(_)
            | FringeError::Toml(_)
            | FringeError::Pattern(_)
            | FringeError::FailedOperationWithTarget { .. }
            | FringeError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            FringeError::UnknownFormat(_) => "unknown_format",
            FringeError::UsageError(_) => "usage_error",
            FringeError::Parse { .. } => "parse_error",
            FringeError::NotFound { .. } => "not_found",
            FringeError::Cycle { .. } => "cycle",
            FringeError::Unreachable { .. } => "unreachable",
            FringeError::Io(_) => "io_error",
            FringeError::Json(_) => "json_error",
            FringeError::Toml(_) => "toml_error",
            FringeError::Pattern(_) => "pattern_error",
            FringeError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            FringeError::Other(_) => "other",
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

/// Result type alias for fringe operations
pub type Result<T> = std::result::Result<T, FringeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(
            FringeError::UsageError("x".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            FringeError::parse("Makefile", 3, "bad line").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            FringeError::not_found("target", "all").exit_code(),
            ExitCode::Data
        );
        let cycle = FringeError::Cycle {
            target: "a".into(),
            prerequisite: "b".into(),
        };
        assert_eq!(cycle.exit_code(), ExitCode::Failure);
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_parse_error_message_includes_location() {
        let err = FringeError::parse("Map", 7, "unknown line kind 'Q'");
        assert_eq!(err.to_string(), "Map:7: unknown line kind 'Q'");
    }

    #[test]
    fn test_to_json_envelope() {
        let err = FringeError::not_found("location", "Nowhere");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "not_found");
        assert_eq!(json["error"]["message"], "location not found: Nowhere");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FringeError = io.into();
        assert_eq!(err.error_type(), "io_error");
        assert_eq!(err.exit_code(), ExitCode::Failure);
    }
}
