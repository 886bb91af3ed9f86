//! The neighbor rule connecting the maze model to the search.

use gridmaze_core::{Maze, Point};

use crate::traits::Pather;

impl Pather for Maze {
    /// Candidates are taken left, right, up, down; each is kept only if
    /// it is in bounds and not a wall. The order is part of the search
    /// contract: it decides which of several equal-length routes wins.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_open(n) {
                buf.push(n);
            }
        }
    }
}
