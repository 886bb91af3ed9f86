//! The shared traversal: one search skeleton, two frontier disciplines.

use std::fmt;

use gridmaze_core::{Maze, Point, Range};

use crate::PathRange;
use crate::traits::Pather;

/// The frontier discipline selecting which discovered cell is expanded next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// FIFO frontier. Cells are expanded in non-decreasing distance order
    /// and each cell's parent is fixed at first discovery, so the returned
    /// path is shortest by cell count.
    #[default]
    Breadth,
    /// LIFO frontier. Returns some valid path, not necessarily shortest;
    /// the route tends to snake toward the last candidate direction before
    /// backtracking.
    Depth,
}

impl PathRange {
    /// Search for a route from `from` to `to` over `pather`'s neighbor
    /// graph, using the given strategy.
    ///
    /// Returns the full path including both endpoints, or an empty vector
    /// when no route exists — a normal outcome, not an error. Both
    /// endpoints must lie within the current range.
    pub fn path<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        strategy: Strategy,
    ) -> Result<Vec<Point>, SearchError> {
        let start_idx = self.idx(from).ok_or(SearchError::OutOfBounds {
            pos: from,
            range: self.rng,
        })?;
        let goal_idx = self.idx(to).ok_or(SearchError::OutOfBounds {
            pos: to,
            range: self.rng,
        })?;

        if start_idx == goal_idx {
            return Ok(vec![from]);
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        self.nodes[start_idx].parent = usize::MAX;
        self.nodes[start_idx].generation = cur_gen;

        self.frontier.clear();
        self.frontier.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        // Newly discovered cells always go to the back; the strategy only
        // decides which end the next expanded cell comes from.
        let mut found = false;
        while let Some(ci) = match strategy {
            Strategy::Breadth => self.frontier.pop_front(),
            Strategy::Depth => self.frontier.pop_back(),
        } {
            if ci == goal_idx {
                found = true;
                break;
            }
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already discovered; the parent stays as set then.
                    continue;
                }
                n.generation = cur_gen;
                n.parent = ci;
                self.frontier.push_back(ni);
            }
        }

        self.nbuf = nbuf;

        if !found {
            return Ok(Vec::new());
        }

        // Reconstruct by walking parent links back from the goal. A
        // well-formed parent chain never exceeds the cell count.
        let mut path = Vec::new();
        let bound = self.rng.len();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            if path.len() > bound {
                break;
            }
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        log::trace!("{strategy:?} search {from} -> {to}: {} cells", path.len());
        Ok(path)
    }

    /// Breadth-first search from `from` to `to` — shortest path by cell
    /// count, or empty if unreachable.
    pub fn bfs_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Vec<Point>, SearchError> {
        self.path(pather, from, to, Strategy::Breadth)
    }

    /// Depth-first search from `from` to `to` — some valid path, or empty
    /// if unreachable.
    pub fn dfs_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Vec<Point>, SearchError> {
        self.path(pather, from, to, Strategy::Depth)
    }
}

/// One-shot search over a maze, without a reusable [`PathRange`].
///
/// Callers issuing repeated queries should hold a [`PathRange`] instead
/// to amortize its allocations.
pub fn find_path(
    maze: &Maze,
    from: Point,
    to: Point,
    strategy: Strategy,
) -> Result<Vec<Point>, SearchError> {
    PathRange::new(maze.bounds()).path(maze, from, to, strategy)
}

/// Errors that can occur when starting a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A search endpoint lies outside the searched range.
    OutOfBounds { pos: Point, range: Range },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, range } => {
                write!(f, "search endpoint {pos} is outside the range {range}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
