use std::collections::VecDeque;

use gridmaze_core::{Point, Range};

// ---------------------------------------------------------------------------
// Internal node for the visited map
// ---------------------------------------------------------------------------

/// Parent link for one cell of the range. `usize::MAX` marks the search
/// start ("reached from nowhere"). The generation stamp says which search
/// the entry belongs to, so caches never need a full reset.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) parent: usize,
    pub(crate) generation: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            parent: usize::MAX,
            generation: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for path searches on a grid rectangle.
///
/// `PathRange` owns all transient search state (visited-map nodes, the
/// frontier deque, a neighbor scratch buffer) so that repeated queries
/// incur no allocations after the first use. The maze itself is only
/// borrowed for the duration of each [`path`](Self::path) call.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) frontier: VecDeque<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            nodes: vec![Node::default(); len],
            generation: 0,
            frontier: VecDeque::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, reallocating caches as needed.
    ///
    /// If the new size fits within existing capacity, the node array is
    /// preserved and only the generation counter is bumped so stale
    /// entries are ignored. Otherwise caches are reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let old_capacity = self.nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= old_capacity {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
        self.frontier.clear();
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}
