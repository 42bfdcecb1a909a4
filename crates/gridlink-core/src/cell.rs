//! The [`Cell`] record and its stable [`CellId`].

use std::fmt;

use crate::geom::Point;

/// Row-major cell identifier: `row * width + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub usize);

impl CellId {
    /// Get the underlying index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for CellId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

impl From<CellId> for usize {
    fn from(id: CellId) -> Self {
        id.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One grid position and its attributes.
///
/// Cells are owned by the [`CellRegistry`](crate::CellRegistry); graphs only
/// hold their ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub id: CellId,
    pub pos: Point,
    pub obstacle: bool,
    pub source: bool,
    pub destination: bool,
}

impl Cell {
    /// A plain cell with no flags set.
    #[inline]
    pub const fn new(id: CellId, pos: Point) -> Self {
        Self {
            id,
            pos,
            obstacle: false,
            source: false,
            destination: false,
        }
    }

    /// Whether the cell is the source or the destination.
    #[inline]
    pub const fn is_endpoint(&self) -> bool {
        self.source || self.destination
    }
}
