//! Predecessor maps and path reconstruction.

use log::warn;

use gridlink_core::CellId;

/// Sentinel meaning "no predecessor recorded" in a [`PredecessorMap`].
pub const NO_PREDECESSOR: usize = usize::MAX;

/// Per-query record of which cell discovered which.
///
/// `get(v) == Some(u)` means `u` immediately precedes `v` on a shortest path
/// from the search source. The source itself and every unreached cell have
/// no predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    parents: Vec<usize>,
}

impl PredecessorMap {
    /// A map of `len` cells with no predecessors recorded.
    pub fn new(len: usize) -> Self {
        Self {
            parents: vec![NO_PREDECESSOR; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Predecessor of `v`, if one was recorded.
    #[inline]
    pub fn get(&self, v: CellId) -> Option<CellId> {
        match self.parents.get(v.0) {
            Some(&p) if p != NO_PREDECESSOR => Some(CellId(p)),
            _ => None,
        }
    }

    /// Record `u` as the predecessor of `v`.
    #[inline]
    pub fn set(&mut self, v: CellId, u: CellId) {
        self.parents[v.0] = u.0;
    }

    /// Number of cells with a recorded predecessor.
    pub fn reached(&self) -> usize {
        self.parents.iter().filter(|&&p| p != NO_PREDECESSOR).count()
    }
}

/// Outcome of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathOutcome {
    /// No path connects source and destination.
    Unreachable,
    /// Cells from source to destination, both inclusive.
    Found(Vec<CellId>),
}

impl PathOutcome {
    #[inline]
    pub fn is_reachable(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    /// The cell sequence, if a path was found.
    #[inline]
    pub fn cells(&self) -> Option<&[CellId]> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::Unreachable => None,
        }
    }
}

/// Turn a predecessor map into the ordered path `source → … → destination`.
///
/// The destination is unreachable when it has no predecessor and differs
/// from the source. When source and destination coincide the path is the
/// single cell.
pub fn reconstruct(preds: &PredecessorMap, source: CellId, destination: CellId) -> PathOutcome {
    if source == destination {
        return PathOutcome::Found(vec![source]);
    }
    if preds.get(destination).is_none() {
        return PathOutcome::Unreachable;
    }

    let mut path = vec![destination];
    let mut cur = destination;
    while cur != source {
        // A well-formed map never needs more hops than there are cells.
        let next = match preds.get(cur) {
            Some(prev) if path.len() <= preds.len() => prev,
            _ => {
                warn!("predecessor chain from {destination} does not reach {source}");
                return PathOutcome::Unreachable;
            }
        };
        path.push(next);
        cur = next;
    }
    path.reverse();
    PathOutcome::Found(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(len: usize, edges: &[(usize, usize)]) -> PredecessorMap {
        let mut m = PredecessorMap::new(len);
        for &(v, u) in edges {
            m.set(CellId(v), CellId(u));
        }
        m
    }

    #[test]
    fn walks_back_to_source() {
        // 0 -> 4 -> 8
        let m = map(9, &[(4, 0), (8, 4), (1, 0)]);
        assert_eq!(
            reconstruct(&m, CellId(0), CellId(8)),
            PathOutcome::Found(vec![CellId(0), CellId(4), CellId(8)])
        );
        assert_eq!(m.reached(), 3);
    }

    #[test]
    fn missing_predecessor_is_unreachable() {
        let m = map(9, &[(4, 0)]);
        assert_eq!(reconstruct(&m, CellId(0), CellId(8)), PathOutcome::Unreachable);
    }

    #[test]
    fn same_cell_is_single_cell_path() {
        let m = PredecessorMap::new(4);
        let out = reconstruct(&m, CellId(2), CellId(2));
        assert_eq!(out, PathOutcome::Found(vec![CellId(2)]));
        assert!(out.is_reachable());
    }

    #[test]
    fn broken_chain_is_unreachable() {
        // 3's chain stops at 2, which has no predecessor and is not the source.
        let m = map(4, &[(3, 2)]);
        assert_eq!(reconstruct(&m, CellId(0), CellId(3)), PathOutcome::Unreachable);
    }

    #[test]
    fn cyclic_chain_terminates() {
        let m = map(4, &[(3, 2), (2, 3)]);
        assert_eq!(reconstruct(&m, CellId(0), CellId(3)), PathOutcome::Unreachable);
    }

    #[test]
    fn out_of_range_lookup_has_no_predecessor() {
        let m = PredecessorMap::new(2);
        assert_eq!(m.get(CellId(7)), None);
    }
}
