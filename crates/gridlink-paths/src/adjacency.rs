//! Adjacency-set representation: cell id → set of neighbor ids.

use indexmap::IndexSet;
use log::debug;

use gridlink_core::{CellId, GridError, Range, Result, neighbors};

use crate::traits::Traversal;

/// Maps every cell to the set of its 8-connected neighbors.
///
/// Built once from the grid geometry and never mutated afterwards; obstacle
/// state is read from the cell registry during a search. Each set keeps the
/// canonical compass insertion order, so iteration is deterministic.
#[derive(Debug, Clone)]
pub struct AdjacencySetGraph {
    bounds: Range,
    sets: Vec<IndexSet<CellId>>,
}

impl AdjacencySetGraph {
    /// Build the neighbor sets of every cell in `bounds`.
    pub fn new(bounds: Range) -> Self {
        let mut sets = vec![IndexSet::with_capacity(8); bounds.len()];
        let mut edges = 0;
        for p in bounds {
            let Some(i) = bounds.index(p) else {
                continue;
            };
            for (_, n) in neighbors(p, bounds) {
                if let Some(ni) = bounds.index(n) {
                    if sets[i].insert(CellId(ni)) {
                        edges += 1;
                    }
                }
            }
        }
        debug!(
            "adjacency-set graph: {} cells, {} directed edges",
            sets.len(),
            edges
        );
        Self { bounds, sets }
    }

    /// The grid rectangle covered by the graph.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// The neighbor set of `id`.
    pub fn neighbors(&self, id: CellId) -> Result<&IndexSet<CellId>> {
        self.sets.get(id.0).ok_or(GridError::InvalidCellId {
            id,
            len: self.sets.len(),
        })
    }

    /// Number of neighbors of `id`.
    pub fn degree(&self, id: CellId) -> Result<usize> {
        Ok(self.neighbors(id)?.len())
    }

    /// Whether `a` and `b` are neighbors.
    pub fn contains_edge(&self, a: CellId, b: CellId) -> bool {
        self.sets.get(a.0).is_some_and(|s| s.contains(&b))
    }

    /// `(id, neighbor set)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &IndexSet<CellId>)> {
        self.sets.iter().enumerate().map(|(i, s)| (CellId(i), s))
    }
}

impl Traversal for AdjacencySetGraph {
    type Node = CellId;

    fn cell_count(&self) -> usize {
        self.sets.len()
    }

    fn resolve(&self, id: CellId) -> Result<(CellId, usize)> {
        if id.0 >= self.sets.len() {
            return Err(GridError::InvalidCellId {
                id,
                len: self.sets.len(),
            });
        }
        Ok((id, 0))
    }

    #[inline]
    fn cell_id(&self, node: CellId) -> CellId {
        node
    }

    #[inline]
    fn neighbors(&self, node: CellId, buf: &mut Vec<CellId>) {
        if let Some(set) = self.sets.get(node.0) {
            buf.extend(set.iter().copied());
        }
    }
}
