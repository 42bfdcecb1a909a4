use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::debug;

use gridlink_core::{CellId, CellRegistry, Result};

use crate::reconstruct::PredecessorMap;
use crate::traits::Traversal;

/// Result of one breadth-first search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub predecessors: PredecessorMap,
    /// Wall-clock time of endpoint resolution plus the search itself.
    pub elapsed: Duration,
    /// Link-following steps spent resolving both endpoints.
    pub locator_steps: usize,
}

/// Resolve both endpoints in `graph`, then search from source to
/// destination, timing the whole operation.
///
/// Obstacle endpoints are a caller error and are not checked here.
pub fn search<T: Traversal>(
    graph: &T,
    cells: &CellRegistry,
    source: CellId,
    destination: CellId,
) -> Result<SearchOutcome> {
    let start = Instant::now();
    let (from, src_steps) = graph.resolve(source)?;
    let (to, dst_steps) = graph.resolve(destination)?;
    let predecessors = bfs(graph, cells, from, graph.cell_id(to));
    let elapsed = start.elapsed();
    debug!(
        "bfs {source} -> {destination}: {} cells reached, {} locator steps, {:?}",
        predecessors.reached(),
        src_steps + dst_steps,
        elapsed
    );
    Ok(SearchOutcome {
        predecessors,
        elapsed,
        locator_steps: src_steps + dst_steps,
    })
}

/// Breadth-first search from `start`, stopping as soon as `goal` is
/// discovered.
///
/// Cells are marked visited when enqueued. Obstacles are never entered.
/// Neighbors are taken in the order the graph yields them, so ties between
/// equally short paths are broken by compass order.
pub fn bfs<T: Traversal>(
    graph: &T,
    cells: &CellRegistry,
    start: T::Node,
    goal: CellId,
) -> PredecessorMap {
    let len = graph.cell_count();
    let mut predecessors = PredecessorMap::new(len);
    let start_id = graph.cell_id(start);
    if start_id == goal {
        return predecessors;
    }

    let mut visited = vec![false; len];
    visited[start_id.0] = true;
    let mut queue: VecDeque<T::Node> = VecDeque::new();
    queue.push_back(start);
    let mut nbuf = Vec::with_capacity(8);

    'search: while let Some(cur) = queue.pop_front() {
        let cur_id = graph.cell_id(cur);

        nbuf.clear();
        graph.neighbors(cur, &mut nbuf);

        for &n in nbuf.iter() {
            let nid = graph.cell_id(n);
            if visited[nid.0] || cells.is_obstacle(nid) {
                continue;
            }
            visited[nid.0] = true;
            predecessors.set(nid, cur_id);
            if nid == goal {
                break 'search;
            }
            queue.push_back(n);
        }
    }

    predecessors
}
