//! Error types shared by the gridlink crates.

use thiserror::Error;

use crate::cell::CellId;
use crate::geom::Direction;

/// Failures reported by the registry, the graphs and the board.
///
/// An unreachable destination is not an error; searches report it as a
/// regular result value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell id {id} is outside the grid (0..{len})")]
    InvalidCellId { id: CellId, len: usize },

    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("no source cell selected")]
    SourceUnset,

    #[error("no destination cell selected")]
    DestinationUnset,

    #[error("cell {id} is an obstacle and cannot be a path endpoint")]
    ObstacleEndpoint { id: CellId },

    #[error("cell {id} is the selected source or destination")]
    OccupiedCell { id: CellId },

    #[error("linked grid has no {dir} link out of cell {from}")]
    BrokenLink { from: CellId, dir: Direction },
}

pub type Result<T> = std::result::Result<T, GridError>;
