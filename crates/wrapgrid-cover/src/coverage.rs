//! Wrap bookkeeping on a secondary grid.
//!
//! The wrapped grid starts as a copy of the map: [`terrain::FREE`] cells are
//! still to be wrapped, [`terrain::WRAPPED`] cells are done and
//! [`terrain::OBSTACLE`] cells never need wrapping.

use wrapgrid_core::{CharGrid, GridError, Pt, terrain};
use wrapgrid_paths::DIRS;

use crate::sight::visible;

/// Wrap the bot's own cell and every in-bounds manipulator cell it can see.
///
/// Returns the number of cells that were newly wrapped.
pub fn mark_wrapped(
    grid: &CharGrid,
    wrapped: &mut CharGrid,
    pos: Pt,
    manips: &[Pt],
) -> Result<usize, GridError> {
    let mut cells = vec![pos];
    for p in manips.iter().filter_map(|&m| pos.checked_add(m)) {
        if wrapped.in_bounds(p) && visible(grid, pos, p)? {
            cells.push(p);
        }
    }
    let n = wrapped.update_values(&cells, terrain::WRAPPED)?;
    log::trace!("wrapped {n} new cells from {pos}");
    Ok(n)
}

/// The manipulator cells that standing on `pos` would newly wrap.
pub fn manipulators_will_wrap(
    grid: &CharGrid,
    wrapped: &CharGrid,
    pos: Pt,
    manips: &[Pt],
) -> Result<Vec<Pt>, GridError> {
    let mut out = Vec::new();
    for p in manips.iter().filter_map(|&m| pos.checked_add(m)) {
        if wrapped.at(p) == Some(&terrain::FREE) && visible(grid, pos, p)? {
            out.push(p);
        }
    }
    Ok(out)
}

/// Every cell still to be wrapped, in row-major order.
pub fn list_unwrapped(wrapped: &CharGrid) -> Vec<Pt> {
    wrapped
        .iter()
        .filter(|(_, c)| **c == terrain::FREE)
        .map(|(p, _)| p)
        .collect()
}

/// Whether `p` is an unwrapped cell touching the wrapped area.
pub fn is_border_cell(wrapped: &CharGrid, p: Pt) -> bool {
    if wrapped.at(p) != Some(&terrain::FREE) {
        return false;
    }
    DIRS.iter()
        .filter_map(|&d| p.checked_add(d))
        .any(|n| wrapped.at(n) == Some(&terrain::WRAPPED))
}

/// Every border cell, in row-major order.
pub fn border_cells(wrapped: &CharGrid) -> Vec<Pt> {
    wrapped
        .bounds()
        .iter()
        .filter(|&p| is_border_cell(wrapped, p))
        .collect()
}
