//! Shortest paths on 8-connected grids over two graph representations.
//!
//! The same grid is represented twice:
//!
//! - [`AdjacencySetGraph`] maps each cell id to its neighbor set and can
//!   expand any cell in constant time;
//! - [`LinkedGridGraph`] links every node to its up to eight neighbors and
//!   offers no indexed access. Nodes are reached by walking from the head
//!   with the sequential [`locate`].
//!
//! Both are derived from [`gridlink_core::neighbors`], and a single
//! breadth-first search ([`bfs::search`]) runs over either through the
//! [`Traversal`] trait. [`Board`] bundles everything behind the operations
//! a presentation layer needs.
//!
//! # Module map
//!
//! | Module | Contents |
//! |---|---|
//! | [`adjacency`] | [`AdjacencySetGraph`] |
//! | [`linked`] | [`LinkedGridGraph`], [`NodeRef`] |
//! | [`locator`] | [`locate`], serpentine step arithmetic |
//! | [`bfs`] | the search engine |
//! | [`reconstruct`](mod@reconstruct) | [`PredecessorMap`], [`PathOutcome`] |
//! | [`board`] | [`Board`], [`PathResult`], [`build_grid`] |

pub mod adjacency;
pub mod bfs;
pub mod board;
pub mod linked;
pub mod locator;
pub mod reconstruct;
mod traits;

pub use adjacency::AdjacencySetGraph;
pub use bfs::{SearchOutcome, search};
pub use board::{Board, PathResult, Representation, build_grid};
pub use linked::{LinkedGridGraph, NodeRef};
pub use locator::{Located, locate, serpentine_position, serpentine_steps};
pub use reconstruct::{NO_PREDECESSOR, PathOutcome, PredecessorMap, reconstruct};
pub use traits::Traversal;
