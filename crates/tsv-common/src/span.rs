//! Text spans over source text.
//!
//! A `TextSpan` is a `(start, length)` pair of byte offsets. Spans describe
//! where an inline value lives and which part of a file the editor is showing.

use serde::{Deserialize, Serialize};

/// A `(start, length)` range over source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: u32,
    pub length: u32,
}

impl TextSpan {
    #[inline]
    pub fn new(start: u32, length: u32) -> Self {
        TextSpan { start, length }
    }

    /// Create a span covering `[start, end)`. An inverted range yields an empty span at `start`.
    #[inline]
    pub fn from_bounds(start: u32, end: u32) -> Self {
        TextSpan {
            start,
            length: end.saturating_sub(start),
        }
    }

    /// A span covering everything from `0` to `u32::MAX`.
    #[inline]
    pub fn everything() -> Self {
        TextSpan {
            start: 0,
            length: u32::MAX,
        }
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.start.saturating_add(self.length)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether `position` falls inside `[start, end)`.
    #[inline]
    pub fn contains(&self, position: u32) -> bool {
        position >= self.start && position < self.end()
    }

    /// Whether the range `[start, start + length]` touches this span.
    ///
    /// Both ends are inclusive: a range that ends exactly where this span
    /// starts (or starts exactly where it ends) still intersects.
    #[inline]
    pub fn intersects_with(&self, start: u32, length: u32) -> bool {
        let other_end = start.saturating_add(length);
        start <= self.end() && other_end >= self.start
    }

    /// Whether another span touches this one (inclusive ends).
    #[inline]
    pub fn intersects(&self, other: &TextSpan) -> bool {
        self.intersects_with(other.start, other.length)
    }
}

#[cfg(test)]
#[path = "../tests/span_tests.rs"]
mod tests;
