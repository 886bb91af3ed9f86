//! **gridmaze-gen** — random wall maze generation.
//!
//! Produces a [`Maze`](gridmaze_core::Maze) in which every cell is
//! independently a wall with a fixed probability. Generated mazes carry
//! no solvability guarantee: a maze with no route between two cells is a
//! legitimate output, surfaced by the path finder as an empty path.

pub mod mazegen;

pub use mazegen::{MazeGen, MazeGenError, generate};
