//! Grid line of sight.

use wrapgrid_core::{CharGrid, GridError, Pt, terrain};

/// Whether `to` can be seen from `from` across `grid`.
///
/// Marches from the centre of `from` toward the centre of `to` in
/// `2 * manhattan + 1` equal steps, truncating each position to a cell.
/// Any non-free cell met on the way (including `to` itself) blocks the
/// view. Fails if either end is outside the grid.
pub fn visible(grid: &CharGrid, from: Pt, to: Pt) -> Result<bool, GridError> {
    grid.get(from)?;
    grid.get(to)?;
    let d = to - from;
    let steps = (d.x.abs() + d.y.abs()) * 2 + 1;
    let q = 1.0 / f64::from(steps);
    let (dx, dy) = (f64::from(d.x) * q, f64::from(d.y) * q);

    let mut cx = f64::from(from.x) + 0.5;
    let mut cy = f64::from(from.y) + 0.5;
    for _ in 0..steps {
        cx += dx;
        cy += dy;
        let p = Pt::new(cx.floor() as i32, cy.floor() as i32);
        if grid.get(p)? != terrain::FREE {
            return Ok(false);
        }
        if p == to {
            return Ok(true);
        }
    }
    // Rounding left the march one cell short; the last cell is `to`.
    Ok(grid.get(to)? == terrain::FREE)
}
