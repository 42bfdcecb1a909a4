//! **gridlink-core**: fixed-size 8-connected grids.
//!
//! This crate provides the pieces shared by every graph representation in
//! the *gridlink* workspace: geometry primitives and the neighbor rule, the
//! cell record, the registry owning all cells, grid configuration and the
//! error type.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod registry;

pub use cell::{Cell, CellId};
pub use config::GridConfig;
pub use error::{GridError, Result};
pub use geom::{Direction, Point, Range, neighbors};
pub use registry::{CellRegistry, Selection};
