//! **gridmaze-core** — grid maze model (core types).
//!
//! This crate provides the foundational types used across the *gridmaze*
//! crates: geometry primitives and the rectangular maze of wall/open cells
//! that the generator produces and the path finder searches.

pub mod geom;
pub mod maze;

pub use geom::{Point, Range};
pub use maze::{Cell, Maze, MazeParseError};
