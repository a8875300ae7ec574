//! Error types for level generation, cell tagging and path solving

use std::fmt;
use std::path::PathBuf;

use crate::spatial::grid::{Cell, Position};

/// Why the solver gave up before reaching the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnreachableCause {
    /// A sweep produced no new frontier cells, so the goal lies in another component
    Disconnected,
    /// The sweep count exceeded the number of cells in the grid
    ///
    /// Unreachable while every round finalizes a new cell; kept as a bound on the loop.
    RoundLimit,
}

impl fmt::Display for UnreachableCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "frontier exhausted"),
            Self::RoundLimit => write!(f, "round limit exceeded"),
        }
    }
}

/// Main error type for all dungeon operations
#[derive(Debug)]
pub enum DungeonError {
    /// Layout or window parameters are incompatible with the grid size
    ///
    /// Detected before any grid is built, so nothing is partially generated.
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Coordinate lies outside the grid extents
    OutOfBounds {
        /// Requested `[row, col]`
        position: Position,
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Attempt to place a start or goal marker on a cell that cannot hold it
    OccupiedCell {
        /// Requested `[row, col]`
        position: Position,
        /// Current content of the cell
        cell: Cell,
    },

    /// More free cells were requested than the grid contains
    InsufficientFreeSpace {
        /// Number of cells requested
        requested: usize,
        /// Number of free cells available
        available: usize,
    },

    /// The solver could not connect start to goal
    Unreachable {
        /// Start cell of the query
        start: Position,
        /// Goal cell of the query
        goal: Position,
        /// Number of expansion rounds performed
        rounds: usize,
        /// Which termination condition fired
        cause: UnreachableCause,
    },

    /// Failed to save a rendered level to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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
}

impl fmt::Display for DungeonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid configuration '{parameter}' = '{value}': {reason}"
                )
            }
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the {}x{} grid",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
            Self::OccupiedCell { position, cell } => {
                write!(
                    f,
                    "Cell ({}, {}) is occupied by {cell:?}",
                    position[0], position[1]
                )
            }
            Self::InsufficientFreeSpace {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Requested {requested} free cells but only {available} are available"
                )
            }
            Self::Unreachable {
                start,
                goal,
                rounds,
                cause,
            } => {
                write!(
                    f,
                    "Goal ({}, {}) is unreachable from ({}, {}) after {rounds} rounds: {cause}",
                    goal[0], goal[1], start[0], start[1]
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
        }
    }
}

impl std::error::Error for DungeonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for dungeon results
pub type Result<T> = std::result::Result<T, DungeonError>;

impl From<std::io::Error> for DungeonError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DungeonError {
    DungeonError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
