//! Random wall maze generation.
//!
//! Every cell of the maze is drawn independently, so there is no
//! correlation between neighbouring cells and no connectivity guarantee.
//! No retry logic: an unsolvable maze is a valid result.

use std::fmt;

use gridmaze_core::Maze;
use rand::{Rng, RngExt};

/// Maze generator operating over a caller-supplied random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator with the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `rows × cols` maze where each cell is a wall with
    /// probability 1/2.
    ///
    /// Both dimensions must be ≥ 1.
    pub fn generate(&mut self, rows: i32, cols: i32) -> Result<Maze, MazeGenError> {
        self.random_walls(rows, cols, 0.5)
    }

    /// Generate a `rows × cols` maze where each cell is a wall with
    /// probability `wall_pct` (0.0–1.0).
    ///
    /// Both dimensions must be ≥ 1.
    pub fn random_walls(
        &mut self,
        rows: i32,
        cols: i32,
        wall_pct: f64,
    ) -> Result<Maze, MazeGenError> {
        if rows < 1 || cols < 1 {
            return Err(MazeGenError::InvalidDimensions { rows, cols });
        }
        let maze = Maze::from_fn(cols, rows, |_| {
            let r: f64 = self.rng.random();
            r < wall_pct
        });
        log::debug!(
            "generated {rows}x{cols} maze with {} walls",
            maze.count_walls()
        );
        Ok(maze)
    }
}

/// Generate a `rows × cols` maze with the thread-local random source.
///
/// Each cell is a wall with probability 1/2.
pub fn generate(rows: i32, cols: i32) -> Result<Maze, MazeGenError> {
    MazeGen::new(rand::rng()).generate(rows, cols)
}

/// Errors that can occur when generating a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeGenError {
    /// A dimension was zero or negative.
    InvalidDimensions { rows: i32, cols: i32 },
}

impl fmt::Display for MazeGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "maze dimensions must be positive, got {rows}x{cols}")
            }
        }
    }
}

impl std::error::Error for MazeGenError {}
