//! The [`CellRegistry`]: one [`Cell`] per grid position.
//!
//! The registry is the single source of truth for cell attributes. Both
//! graph representations refer to cells by [`CellId`] and consult the
//! registry for obstacle state at query time, so edges never change when
//! obstacles are edited.
//!
//! Invariants kept by every mutator:
//! - at most one cell is the source and at most one is the destination;
//! - a source or destination cell is never an obstacle.

use log::{debug, trace};

use crate::cell::{Cell, CellId};
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::geom::{Point, Range};

/// What a call to [`CellRegistry::select`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    SourceSet(CellId),
    SourceCleared(CellId),
    DestinationSet(CellId),
    DestinationCleared(CellId),
    /// The pick did not change anything (e.g. an obstacle, or both
    /// endpoints already chosen).
    Ignored,
}

/// Owner of every cell of a fixed-size grid.
#[derive(Debug, Clone)]
pub struct CellRegistry {
    bounds: Range,
    cells: Vec<Cell>,
    source: Option<CellId>,
    destination: Option<CellId>,
}

impl CellRegistry {
    /// Create one plain cell per position of the configured grid.
    pub fn new(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        let bounds = config.bounds();
        let cells = bounds
            .iter()
            .enumerate()
            .map(|(i, p)| Cell::new(CellId(i), p))
            .collect::<Vec<_>>();
        debug!("cell registry: {} cells over {}", cells.len(), bounds);
        Ok(Self {
            bounds,
            cells,
            source: None,
            destination: None,
        })
    }

    /// The grid rectangle.
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

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed registry; grids are never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Validate `id` against the grid size.
    #[inline]
    pub fn check(&self, id: CellId) -> Result<CellId> {
        if id.0 < self.cells.len() {
            Ok(id)
        } else {
            Err(GridError::InvalidCellId {
                id,
                len: self.cells.len(),
            })
        }
    }

    /// The cell with the given id.
    pub fn cell(&self, id: CellId) -> Result<&Cell> {
        self.check(id)?;
        Ok(&self.cells[id.0])
    }

    /// All cells in id order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Id of the cell at `p`, if `p` is on the grid.
    #[inline]
    pub fn id_at(&self, p: Point) -> Option<CellId> {
        self.bounds.index(p).map(CellId)
    }

    /// Grid position of `id`.
    pub fn position(&self, id: CellId) -> Result<Point> {
        Ok(self.cell(id)?.pos)
    }

    /// Whether `id` is an obstacle. Ids off the grid are never obstacles.
    #[inline]
    pub fn is_obstacle(&self, id: CellId) -> bool {
        self.cells.get(id.0).is_some_and(|c| c.obstacle)
    }

    /// The obstacle set, in id order.
    pub fn obstacles(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().filter(|c| c.obstacle).map(|c| c.id)
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles().count()
    }

    #[inline]
    pub fn source(&self) -> Option<CellId> {
        self.source
    }

    #[inline]
    pub fn destination(&self) -> Option<CellId> {
        self.destination
    }

    /// Mark or unmark `id` as impassable.
    ///
    /// The selected source and destination cannot become obstacles.
    pub fn set_obstacle(&mut self, id: CellId, obstacle: bool) -> Result<()> {
        self.check(id)?;
        let cell = &mut self.cells[id.0];
        if obstacle && cell.is_endpoint() {
            return Err(GridError::OccupiedCell { id });
        }
        cell.obstacle = obstacle;
        trace!("obstacle {id} = {obstacle}");
        Ok(())
    }

    /// Flip the obstacle state of `id` and return the new state.
    pub fn toggle_obstacle(&mut self, id: CellId) -> Result<bool> {
        let next = !self.cell(id)?.obstacle;
        self.set_obstacle(id, next)?;
        Ok(next)
    }

    /// Remove every obstacle.
    pub fn clear_obstacles(&mut self) {
        for c in self.cells.iter_mut() {
            c.obstacle = false;
        }
    }

    /// Make `id` the source, replacing any previous source.
    pub fn set_source(&mut self, id: CellId) -> Result<()> {
        self.check_endpoint(id)?;
        self.clear_source();
        self.cells[id.0].source = true;
        self.source = Some(id);
        trace!("source = {id}");
        Ok(())
    }

    /// Make `id` the destination, replacing any previous destination.
    pub fn set_destination(&mut self, id: CellId) -> Result<()> {
        self.check_endpoint(id)?;
        self.clear_destination();
        self.cells[id.0].destination = true;
        self.destination = Some(id);
        trace!("destination = {id}");
        Ok(())
    }

    pub fn clear_source(&mut self) {
        if let Some(old) = self.source.take() {
            self.cells[old.0].source = false;
        }
    }

    pub fn clear_destination(&mut self) {
        if let Some(old) = self.destination.take() {
            self.cells[old.0].destination = false;
        }
    }

    /// Unset both source and destination.
    pub fn clear_selections(&mut self) {
        self.clear_source();
        self.clear_destination();
    }

    /// Unset the endpoints and remove every obstacle.
    pub fn reset(&mut self) {
        self.clear_selections();
        self.clear_obstacles();
        debug!("cell registry reset");
    }

    /// Pick a cell the way a user clicks through a board.
    ///
    /// The first pick becomes the source. Picking the source again while no
    /// destination is chosen deselects it. Any other non-obstacle pick
    /// becomes the destination, and picking the destination again
    /// deselects it.
    pub fn select(&mut self, id: CellId) -> Result<Selection> {
        let obstacle = self.cell(id)?.obstacle;
        let selection = match (self.source, self.destination) {
            (None, _) if !obstacle => {
                self.set_source(id)?;
                Selection::SourceSet(id)
            }
            (Some(src), None) if src == id => {
                self.clear_source();
                Selection::SourceCleared(id)
            }
            (Some(_), None) if !obstacle => {
                self.set_destination(id)?;
                Selection::DestinationSet(id)
            }
            (_, Some(dst)) if dst == id => {
                self.clear_destination();
                Selection::DestinationCleared(id)
            }
            _ => Selection::Ignored,
        };
        Ok(selection)
    }

    /// The selected `(source, destination)` pair, ready for a query.
    ///
    /// Fails if either endpoint is unset or is an obstacle.
    pub fn endpoints(&self) -> Result<(CellId, CellId)> {
        let src = self.source.ok_or(GridError::SourceUnset)?;
        let dst = self.destination.ok_or(GridError::DestinationUnset)?;
        self.check_endpoint(src)?;
        self.check_endpoint(dst)?;
        Ok((src, dst))
    }

    fn check_endpoint(&self, id: CellId) -> Result<()> {
        if self.cell(id)?.obstacle {
            return Err(GridError::ObstacleEndpoint { id });
        }
        Ok(())
    }
}
