use gridlink_core::{CellId, Result};

/// A graph over grid cells that breadth-first search can walk.
///
/// Implementors decide how a cell id becomes a walkable node and how a
/// node's neighbors are enumerated. Neighbors must come out in canonical
/// compass order so that searches over different representations agree
/// on tie-breaks.
pub trait Traversal {
    /// Handle to a node of this representation.
    type Node: Copy;

    /// Number of cells the graph covers.
    fn cell_count(&self) -> usize;

    /// Resolve `id` to a node, returning the node and the number of
    /// link-following steps it took to reach it.
    fn resolve(&self, id: CellId) -> Result<(Self::Node, usize)>;

    /// The cell a node stands for.
    fn cell_id(&self, node: Self::Node) -> CellId;

    /// Append neighbors of `node` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, node: Self::Node, buf: &mut Vec<Self::Node>);
}
