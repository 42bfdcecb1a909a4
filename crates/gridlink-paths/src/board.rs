//! The [`Board`]: both graph representations plus the cell registry.
//!
//! This is the surface a presentation layer talks to. It forwards selection
//! and obstacle edits to the registry and runs shortest-path queries over
//! the representation the caller picks.

use std::fmt;

use log::{info, warn};

use gridlink_core::{CellId, CellRegistry, GridConfig, GridError, Result, Selection};

use crate::adjacency::AdjacencySetGraph;
use crate::bfs::{self, SearchOutcome};
use crate::linked::LinkedGridGraph;
use crate::reconstruct::{PathOutcome, reconstruct};

/// Which graph representation a query runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Representation {
    /// Id-indexed neighbor sets.
    #[default]
    AdjacencySet,
    /// Directional links reached through the sequential locator.
    Linked,
}

impl Representation {
    pub const ALL: [Representation; 2] = [Representation::AdjacencySet, Representation::Linked];
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::AdjacencySet => f.pad("adjacency set"),
            Representation::Linked => f.pad("linked grid"),
        }
    }
}

/// A finished query: the path (or its absence) and how long it took.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub path: PathOutcome,
    pub elapsed_ms: f64,
    pub representation: Representation,
    /// Link-following steps spent locating the endpoints (0 for the
    /// adjacency set).
    pub locator_steps: usize,
}

impl PathResult {
    fn from_search(
        outcome: SearchOutcome,
        representation: Representation,
        source: CellId,
        destination: CellId,
    ) -> Self {
        Self {
            path: reconstruct(&outcome.predecessors, source, destination),
            elapsed_ms: outcome.elapsed.as_secs_f64() * 1000.0,
            representation,
            locator_steps: outcome.locator_steps,
        }
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.path.is_reachable()
    }

    /// Number of moves (edges) on the path, or `None` if unreachable.
    pub fn moves(&self) -> Option<usize> {
        self.path.cells().map(|p| p.len().saturating_sub(1))
    }

    /// Cells strictly between source and destination.
    pub fn interior(&self) -> &[CellId] {
        match self.path.cells() {
            Some(p) if p.len() > 2 => &p[1..p.len() - 1],
            _ => &[],
        }
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.moves() {
            Some(1) => write!(f, "Shortest path is: 1 move!")?,
            Some(n) => write!(f, "Shortest path is: {n} moves!")?,
            None => write!(f, "No path exists!")?,
        }
        write!(f, " Time taken is: {:.2} ms", self.elapsed_ms)
    }
}

/// Build the cell registry and both representations for a `width` x
/// `height` grid.
pub fn build_grid(
    width: i32,
    height: i32,
) -> Result<(AdjacencySetGraph, LinkedGridGraph, CellRegistry)> {
    let config = GridConfig::new(width, height);
    let cells = CellRegistry::new(&config)?;
    let bounds = config.bounds();
    Ok((
        AdjacencySetGraph::new(bounds),
        LinkedGridGraph::new(bounds)?,
        cells,
    ))
}

/// A grid with both graph representations built once, up front.
#[derive(Debug, Clone)]
pub struct Board {
    cells: CellRegistry,
    adjacency: AdjacencySetGraph,
    linked: LinkedGridGraph,
    last: Option<PathResult>,
}

impl Board {
    pub fn new(config: &GridConfig) -> Result<Self> {
        let (adjacency, linked, cells) = build_grid(config.width, config.height)?;
        info!("board ready: {}x{}", config.width, config.height);
        Ok(Self {
            cells,
            adjacency,
            linked,
            last: None,
        })
    }

    #[inline]
    pub fn cells(&self) -> &CellRegistry {
        &self.cells
    }

    #[inline]
    pub fn adjacency(&self) -> &AdjacencySetGraph {
        &self.adjacency
    }

    #[inline]
    pub fn linked(&self) -> &LinkedGridGraph {
        &self.linked
    }

    /// The result of the most recent query, until the next reset.
    #[inline]
    pub fn last_result(&self) -> Option<&PathResult> {
        self.last.as_ref()
    }

    pub fn set_obstacle(&mut self, id: CellId, obstacle: bool) -> Result<()> {
        self.cells.set_obstacle(id, obstacle)
    }

    pub fn toggle_obstacle(&mut self, id: CellId) -> Result<bool> {
        self.cells.toggle_obstacle(id)
    }

    pub fn set_source(&mut self, id: CellId) -> Result<()> {
        self.cells.set_source(id)
    }

    pub fn set_destination(&mut self, id: CellId) -> Result<()> {
        self.cells.set_destination(id)
    }

    /// Click-style selection; see [`CellRegistry::select`].
    pub fn select(&mut self, id: CellId) -> Result<Selection> {
        self.cells.select(id)
    }

    /// Unset source and destination.
    pub fn clear_selections(&mut self) {
        self.cells.clear_selections();
    }

    /// Clear selections, obstacles and the last result.
    pub fn reset(&mut self) {
        self.cells.reset();
        self.last = None;
    }

    /// Shortest path between two cells over `representation`.
    ///
    /// Both ids must be on the grid and neither may be an obstacle.
    pub fn find_shortest_path(
        &mut self,
        representation: Representation,
        source: CellId,
        destination: CellId,
    ) -> Result<PathResult> {
        for id in [source, destination] {
            if self.cells.cell(id)?.obstacle {
                warn!("rejected query {source} -> {destination}: {id} is an obstacle");
                return Err(GridError::ObstacleEndpoint { id });
            }
        }

        let outcome = match representation {
            Representation::AdjacencySet => {
                bfs::search(&self.adjacency, &self.cells, source, destination)?
            }
            Representation::Linked => bfs::search(&self.linked, &self.cells, source, destination)?,
        };
        let result = PathResult::from_search(outcome, representation, source, destination);
        info!("{representation}: {source} -> {destination}: {result}");
        self.last = Some(result.clone());
        Ok(result)
    }

    /// Shortest path between the selected source and destination.
    pub fn run(&mut self, representation: Representation) -> Result<PathResult> {
        let (source, destination) = self.cells.endpoints().inspect_err(|e| {
            warn!("rejected query: {e}");
        })?;
        self.find_shortest_path(representation, source, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlink_core::Point;

    fn board(w: i32, h: i32) -> Board {
        Board::new(&GridConfig::new(w, h)).unwrap()
    }

    #[test]
    fn build_grid_rejects_empty_dimensions() {
        assert_eq!(
            build_grid(0, 5).err(),
            Some(GridError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
    }

    #[test]
    fn run_requires_selected_endpoints() {
        let mut b = board(3, 3);
        assert_eq!(b.run(Representation::Linked), Err(GridError::SourceUnset));
        b.set_source(CellId(0)).unwrap();
        assert_eq!(
            b.run(Representation::Linked),
            Err(GridError::DestinationUnset)
        );
        b.set_destination(CellId(8)).unwrap();
        let r = b.run(Representation::Linked).unwrap();
        assert_eq!(r.moves(), Some(2));
        assert_eq!(r.interior(), &[CellId(4)]);
        assert_eq!(b.last_result(), Some(&r));
    }

    #[test]
    fn obstacle_endpoint_is_rejected() {
        let mut b = board(3, 3);
        b.set_obstacle(CellId(4), true).unwrap();
        assert_eq!(
            b.find_shortest_path(Representation::AdjacencySet, CellId(4), CellId(0)),
            Err(GridError::ObstacleEndpoint { id: CellId(4) })
        );
        assert_eq!(
            b.find_shortest_path(Representation::AdjacencySet, CellId(0), CellId(9)),
            Err(GridError::InvalidCellId {
                id: CellId(9),
                len: 9
            })
        );
    }

    #[test]
    fn reset_clears_last_result() {
        let mut b = board(3, 3);
        b.find_shortest_path(Representation::AdjacencySet, CellId(0), CellId(2))
            .unwrap();
        assert!(b.last_result().is_some());
        b.reset();
        assert!(b.last_result().is_none());
    }

    #[test]
    fn summary_text() {
        let mut r = PathResult {
            path: PathOutcome::Found(vec![CellId(0), CellId(1)]),
            elapsed_ms: 1.234,
            representation: Representation::AdjacencySet,
            locator_steps: 0,
        };
        assert_eq!(
            r.to_string(),
            "Shortest path is: 1 move! Time taken is: 1.23 ms"
        );
        r.path = PathOutcome::Unreachable;
        r.elapsed_ms = 3.0;
        assert_eq!(r.to_string(), "No path exists! Time taken is: 3.00 ms");
        assert_eq!(r.moves(), None);
        assert!(r.interior().is_empty());
    }

    #[test]
    fn select_then_run() {
        let mut b = board(4, 4);
        let s = b.cells().id_at(Point::at(3, 0)).unwrap();
        let d = b.cells().id_at(Point::at(0, 3)).unwrap();
        assert_eq!(b.select(s), Ok(Selection::SourceSet(s)));
        assert_eq!(b.select(d), Ok(Selection::DestinationSet(d)));
        let a = b.run(Representation::AdjacencySet).unwrap();
        let l = b.run(Representation::Linked).unwrap();
        assert_eq!(a.path, l.path);
        assert_eq!(a.moves(), Some(3));
        assert_eq!(l.locator_steps, 15 + 3);
    }
}
