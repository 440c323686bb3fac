//! Error types for grid construction, move parsing and host I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all engine and host operations
#[derive(Debug)]
pub enum EngineError {
    /// Board dimensions leave no cells to play on
    InvalidDimensions {
        /// Requested width in cells
        width: usize,
        /// Requested height in cells
        height: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Loaded cell value is neither empty nor a power of two
    InvalidTile {
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
        /// The rejected value
        value: u32,
    },

    /// A tile was requested on a board without free cells
    ///
    /// Callers must never spawn on a full board; this signals a broken
    /// precondition rather than a recoverable game condition.
    BoardFull {
        /// Board width in cells
        width: usize,
        /// Board height in cells
        height: usize,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing to the host output stream failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "Invalid board dimensions {width}x{height}: both must be positive"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTile { row, col, value } => {
                write!(
                    f,
                    "Invalid tile {value} at ({row}, {col}): must be 0 or a power of two"
                )
            }
            Self::BoardFull { width, height } => {
                write!(f, "Cannot spawn a tile: {width}x{height} board has no free cells")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Output { source } => write!(f, "Failed to write output: {source}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, EngineError>;

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EngineError {
    EngineError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for the given path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> EngineError {
    EngineError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
