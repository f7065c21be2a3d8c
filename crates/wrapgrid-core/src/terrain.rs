//! Single-character terrain codes shared by map grids and wrapped grids.
//!
//! A map grid uses [`FREE`] and [`OBSTACLE`]. A wrapped grid starts as a copy
//! of the map and turns free cells into [`WRAPPED`] as they get covered, so
//! in a wrapped grid [`FREE`] also means "not yet wrapped".

/// Traversable (and, in a wrapped grid, unwrapped) cell.
pub const FREE: char = '.';
/// Wall or any other impassable cell.
pub const OBSTACLE: char = '#';
/// Cell already covered by a manipulator.
pub const WRAPPED: char = '+';

/// Whether a walk may enter a cell holding `c`.
#[inline]
pub fn passable(c: char) -> bool {
    c == FREE
}
