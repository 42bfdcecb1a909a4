//! Sequential locator: reach a linked node by walking from the head.
//!
//! The walk is a boustrophedon over the rows. Even rows are walked east
//! from column 0 to the last column, odd rows west from the last column to
//! column 0, and the walk steps south at the end of every row. Reaching a
//! cell costs exactly its position in that order:
//!
//! - even row: `row * width + col` steps,
//! - odd row: `row * width + (width - 1 - col)` steps.

use log::trace;

use gridlink_core::{CellId, Direction, GridError, Point, Result};

use crate::linked::{LinkedGridGraph, NodeRef};

/// A node found by [`locate`], with the cost of finding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    pub node: NodeRef,
    /// Links followed from the head.
    pub steps: usize,
}

/// Number of serpentine steps from the head to `p` on a grid `width` wide.
#[inline]
pub fn serpentine_steps(p: Point, width: i32) -> usize {
    let (row, col, w) = (p.row() as usize, p.col() as usize, width as usize);
    if row % 2 == 0 {
        row * w + col
    } else {
        row * w + (w - 1 - col)
    }
}

/// The cell visited after `step` serpentine steps (inverse of
/// [`serpentine_steps`]).
#[inline]
pub fn serpentine_position(step: usize, width: i32) -> Point {
    let w = width.max(1) as usize;
    let row = step / w;
    let along = step % w;
    let col = if row % 2 == 0 { along } else { w - 1 - along };
    Point::at(row as i32, col as i32)
}

/// Direction of the link followed when leaving `p`.
#[inline]
fn next_direction(p: Point, width: i32) -> Direction {
    let last = width - 1;
    match (p.row() % 2 == 0, p.col()) {
        (true, c) if c < last => Direction::East,
        (false, c) if c > 0 => Direction::West,
        _ => Direction::South,
    }
}

/// Walk from the head of `graph` to the node of `target`.
pub fn locate(graph: &LinkedGridGraph, target: CellId) -> Result<Located> {
    let bounds = graph.bounds();
    if target.0 >= graph.len() {
        return Err(GridError::InvalidCellId {
            id: target,
            len: graph.len(),
        });
    }
    let width = bounds.width();
    // The walk is laid out from the head, so positions are relative to `min`.
    let steps = serpentine_steps(bounds.point(target.0) - bounds.min, width);

    let mut node = graph.head();
    for u in 0..steps {
        let dir = next_direction(serpentine_position(u, width), width);
        node = graph.link(node, dir).ok_or(GridError::BrokenLink {
            from: graph.cell_id(node),
            dir,
        })?;
    }
    debug_assert_eq!(graph.cell_id(node), target);
    trace!("located {target} after {steps} steps");
    Ok(Located { node, steps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlink_core::Range;

    #[test]
    fn closed_form_example() {
        // Odd row walks leftward: (1, 2) on a 5-wide grid.
        assert_eq!(serpentine_steps(Point::at(1, 2), 5), 7);
        assert_eq!(serpentine_steps(Point::at(0, 4), 5), 4);
        assert_eq!(serpentine_steps(Point::at(1, 4), 5), 5);
        assert_eq!(serpentine_steps(Point::at(2, 0), 5), 10);
    }

    #[test]
    fn position_inverts_steps() {
        let r = Range::sized(5, 3);
        for p in r {
            assert_eq!(serpentine_position(serpentine_steps(p, 5), 5), p);
        }
    }

    #[test]
    fn locate_every_cell() {
        let r = Range::sized(5, 3);
        let g = LinkedGridGraph::new(r).unwrap();
        for p in r {
            let id = CellId(r.index(p).unwrap());
            let found = locate(&g, id).unwrap();
            assert_eq!(g.cell_id(found.node), id);
            assert_eq!(found.steps, serpentine_steps(p, 5), "steps to {p}");
        }
    }

    #[test]
    fn locate_head_takes_no_steps() {
        let g = LinkedGridGraph::new(Range::sized(3, 3)).unwrap();
        let found = locate(&g, CellId(0)).unwrap();
        assert_eq!(found.node, g.head());
        assert_eq!(found.steps, 0);
    }

    #[test]
    fn locate_on_single_column() {
        let r = Range::sized(1, 4);
        let g = LinkedGridGraph::new(r).unwrap();
        for i in 0..4 {
            let found = locate(&g, CellId(i)).unwrap();
            assert_eq!(found.steps, i);
            assert_eq!(g.cell_id(found.node), CellId(i));
        }
    }

    #[test]
    fn locate_rejects_unknown_id() {
        let g = LinkedGridGraph::new(Range::sized(2, 2)).unwrap();
        assert_eq!(
            locate(&g, CellId(4)),
            Err(GridError::InvalidCellId {
                id: CellId(4),
                len: 4
            })
        );
    }

    #[test]
    fn locate_on_offset_bounds() {
        let r = Range::new(2, 2, 5, 5);
        let g = LinkedGridGraph::new(r).unwrap();
        assert_eq!(g.len(), 9);
        for p in r {
            let id = CellId(r.index(p).unwrap());
            let found = locate(&g, id).unwrap();
            assert_eq!(g.cell_id(found.node), id, "node of {p}");
            assert_eq!(found.steps, serpentine_steps(p - r.min, 3), "steps to {p}");
        }
    }
}
