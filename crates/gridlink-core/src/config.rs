//! Grid dimensions.

use crate::error::{GridError, Result};
use crate::geom::Range;

/// Default number of columns.
pub const DEFAULT_WIDTH: i32 = 50;
/// Default number of rows.
pub const DEFAULT_HEIGHT: i32 = 50;

/// Configuration for building a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Number of columns.
    pub width: i32,
    /// Number of rows.
    pub height: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl GridConfig {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Reject grids with a zero or negative dimension.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GridError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.bounds().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fifty_square() {
        let cfg = GridConfig::default();
        assert_eq!(cfg, GridConfig::new(50, 50));
        assert_eq!(cfg.cell_count(), 2500);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            GridConfig::new(0, 3).validate(),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        assert!(GridConfig::new(4, -1).validate().is_err());
    }
}
