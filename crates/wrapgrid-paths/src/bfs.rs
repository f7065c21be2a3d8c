use wrapgrid_core::{CharGrid, Pt, terrain};

use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::traits::Walker;

/// Walk `grid` breadth-first from `start`, level by level, driving `walker`.
///
/// For every cell of the current frontier the walker's
/// [`visit_current`](Walker::visit_current) runs first; then each in-bounds
/// neighbor (south, east, north, west) accepted by
/// [`is_eligible`](Walker::is_eligible) is handed to
/// [`visit_new_neighbor`](Walker::visit_new_neighbor) and queued for the next
/// level. The walk ends as soon as the walker reports
/// [`is_stopped`](Walker::is_stopped), or when a level discovers nothing.
///
/// Fails if `start` is outside the grid or is not traversable.
pub fn bfs<W: Walker>(grid: &CharGrid, start: Pt, walker: &mut W) -> Result<(), SearchError> {
    let ch = grid.get(start)?;
    if !terrain::passable(ch) {
        return Err(SearchError::BlockedStart(start));
    }

    let mut frontier = vec![start];
    let mut next = Vec::new();
    let mut nb = Neighbors::new();
    let mut level = 0usize;

    while !frontier.is_empty() {
        log::trace!("bfs level {level}: {} cells", frontier.len());
        for &p in &frontier {
            walker.visit_current(p);
            if walker.is_stopped() {
                log::debug!("bfs from {start} stopped at level {level}");
                return Ok(());
            }
            for &n in nb.cardinal(p, |n| grid.in_bounds(n)) {
                if !walker.is_eligible(n) {
                    continue;
                }
                walker.visit_new_neighbor(n);
                if walker.is_stopped() {
                    log::debug!("bfs from {start} stopped at level {level}");
                    return Ok(());
                }
                next.push(n);
            }
        }
        std::mem::swap(&mut frontier, &mut next);
        next.clear();
        level += 1;
    }

    log::debug!("bfs from {start} exhausted after {level} levels");
    Ok(())
}
