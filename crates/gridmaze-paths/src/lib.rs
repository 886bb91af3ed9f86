//! Unweighted path search for grid mazes.
//!
//! This crate finds routes between two cells of a maze using either of
//! two frontier disciplines:
//!
//! - **Breadth-first** ([`Strategy::Breadth`]) — FIFO frontier; returns a
//!   shortest path by cell count.
//! - **Depth-first** ([`Strategy::Depth`]) — LIFO frontier; returns some
//!   valid path, with the concrete route determined by the fixed neighbor
//!   order and stack discipline.
//!
//! Both run through [`PathRange::path`], a single traversal parameterized
//! by [`Strategy`]. [`PathRange`] owns and reuses its internal caches so
//! that repeated queries incur zero allocations after warm-up.
//!
//! Neighbor enumeration goes through the [`Pather`] trait;
//! [`Maze`](gridmaze_core::Maze) implements it with the fixed
//! left/right/up/down candidate order.
//!
//! An empty returned path means "no route exists" and is a normal
//! outcome, not an error.

mod neighbors;
mod pathrange;
mod search;
mod traits;

pub use pathrange::PathRange;
pub use search::{SearchError, Strategy, find_path};
pub use traits::Pather;
