//! Linked representation: every node holds up to eight directional links.
//!
//! Nodes live in an arena and links are stored as optional arena indices,
//! so there are no dangling references. The arena is private: the only ways
//! to obtain a [`NodeRef`] are [`LinkedGridGraph::head`], following a link,
//! or the [sequential locator](crate::locate). There is no id-to-node
//! lookup.

use log::debug;

use gridlink_core::{CellId, Direction, GridError, Range, Result, neighbors};

use crate::locator;
use crate::traits::Traversal;

/// Opaque handle to a node of a [`LinkedGridGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(usize);

#[derive(Debug, Clone)]
struct LinkedNode {
    cell: CellId,
    /// Indexed by [`Direction::index`]; `None` past the grid boundary.
    links: [Option<usize>; 8],
}

/// A grid graph reachable only by following links from its head.
#[derive(Debug, Clone)]
pub struct LinkedGridGraph {
    bounds: Range,
    nodes: Vec<LinkedNode>,
    head: usize,
}

impl LinkedGridGraph {
    /// Build one node per cell of `bounds` and wire their links.
    ///
    /// An empty `bounds` has no head and is rejected.
    pub fn new(bounds: Range) -> Result<Self> {
        if bounds.is_empty() {
            return Err(GridError::InvalidDimensions {
                width: bounds.width(),
                height: bounds.height(),
            });
        }
        // First pass: allocate every node, unlinked.
        let mut nodes: Vec<LinkedNode> = bounds
            .iter()
            .enumerate()
            .map(|(i, _)| LinkedNode {
                cell: CellId(i),
                links: [None; 8],
            })
            .collect();

        // Second pass: wire links to the already allocated neighbors.
        let mut links = 0;
        for p in bounds {
            let Some(i) = bounds.index(p) else {
                continue;
            };
            for (dir, n) in neighbors(p, bounds) {
                if let Some(ni) = bounds.index(n) {
                    nodes[i].links[dir.index()] = Some(ni);
                    links += 1;
                }
            }
        }

        let head = bounds.index(bounds.min).unwrap_or(0);
        debug!("linked grid graph: {} nodes, {} links", nodes.len(), links);
        Ok(Self {
            bounds,
            nodes,
            head,
        })
    }

    /// The grid rectangle covered by the graph.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node of cell (row 0, col 0).
    #[inline]
    pub fn head(&self) -> NodeRef {
        NodeRef(self.head)
    }

    /// Follow the `dir` link out of `node`.
    #[inline]
    pub fn link(&self, node: NodeRef, dir: Direction) -> Option<NodeRef> {
        self.nodes[node.0].links[dir.index()].map(NodeRef)
    }

    /// Present links of `node`, in canonical compass order.
    pub fn links(&self, node: NodeRef) -> impl Iterator<Item = (Direction, NodeRef)> + '_ {
        let links = &self.nodes[node.0].links;
        Direction::ALL
            .into_iter()
            .filter_map(move |d| links[d.index()].map(|n| (d, NodeRef(n))))
    }

    /// The cell `node` stands for.
    #[inline]
    pub fn cell_id(&self, node: NodeRef) -> CellId {
        self.nodes[node.0].cell
    }
}

impl Traversal for LinkedGridGraph {
    type Node = NodeRef;

    fn cell_count(&self) -> usize {
        self.nodes.len()
    }

    /// Resolve by walking the serpentine path from the head.
    fn resolve(&self, id: CellId) -> Result<(NodeRef, usize)> {
        let found = locator::locate(self, id)?;
        Ok((found.node, found.steps))
    }

    #[inline]
    fn cell_id(&self, node: NodeRef) -> CellId {
        LinkedGridGraph::cell_id(self, node)
    }

    #[inline]
    fn neighbors(&self, node: NodeRef, buf: &mut Vec<NodeRef>) {
        buf.extend(self.links(node).map(|(_, n)| n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_is_top_left() {
        let g = LinkedGridGraph::new(Range::sized(4, 3)).unwrap();
        assert_eq!(g.cell_id(g.head()), CellId(0));
        assert_eq!(g.link(g.head(), Direction::North), None);
        assert_eq!(g.link(g.head(), Direction::West), None);
        let east = g.link(g.head(), Direction::East).unwrap();
        assert_eq!(g.cell_id(east), CellId(1));
        let se = g.link(g.head(), Direction::SouthEast).unwrap();
        assert_eq!(g.cell_id(se), CellId(5));
    }

    #[test]
    fn links_point_back() {
        let g = LinkedGridGraph::new(Range::sized(4, 3)).unwrap();
        // Reach every node by walking from the head along row/column links.
        let mut row_start = Some(g.head());
        while let Some(start) = row_start {
            let mut cur = Some(start);
            while let Some(node) = cur {
                for (dir, n) in g.links(node) {
                    assert_eq!(g.link(n, dir.opposite()), Some(node));
                }
                cur = g.link(node, Direction::East);
            }
            row_start = g.link(start, Direction::South);
        }
    }

    #[test]
    fn boundary_links_are_absent() {
        let g = LinkedGridGraph::new(Range::sized(2, 2)).unwrap();
        let counts: Vec<_> = {
            let a = g.head();
            let b = g.link(a, Direction::East).unwrap();
            let c = g.link(a, Direction::South).unwrap();
            let d = g.link(a, Direction::SouthEast).unwrap();
            [a, b, c, d].iter().map(|&n| g.links(n).count()).collect()
        };
        assert_eq!(counts, vec![3, 3, 3, 3]);
    }

    #[test]
    fn empty_bounds_are_rejected() {
        assert_eq!(
            LinkedGridGraph::new(Range::sized(0, 3)).err(),
            Some(GridError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        assert!(LinkedGridGraph::new(Range::new(4, 4, 4, 9)).is_err());
    }

    #[test]
    fn offset_bounds_match_adjacency_sets() {
        let r = Range::new(2, 2, 5, 5);
        let g = LinkedGridGraph::new(r).unwrap();
        let adj = crate::AdjacencySetGraph::new(r);
        assert_eq!(g.cell_id(g.head()), CellId(0));
        let mut buf = Vec::new();
        for i in 0..g.len() {
            let (node, _) = g.resolve(CellId(i)).unwrap();
            buf.clear();
            Traversal::neighbors(&g, node, &mut buf);
            let from_links: Vec<CellId> = buf.iter().map(|&n| g.cell_id(n)).collect();
            let from_sets: Vec<CellId> =
                adj.neighbors(CellId(i)).unwrap().iter().copied().collect();
            assert_eq!(from_links, from_sets, "cell #{i}");
        }
    }
}
