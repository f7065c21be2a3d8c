use wrapgrid_core::{CharGrid, IntGrid, Pt, terrain};

use crate::error::SearchError;
use crate::neighbors::Neighbors;

/// Sentinel for cells no source can reach (and for obstacles) in a
/// distance field.
pub const UNREACHABLE: i32 = i32::MAX;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Pt, b: Pt) -> i32 {
    a.manhattan_dist(b)
}

/// Compute the BFS distance from the nearest of `sources` to every cell.
///
/// The result has the shape of `grid`. Traversable cells reachable from a
/// source hold their level distance (sources hold 0); everything else holds
/// [`UNREACHABLE`]. Every source must be an in-bounds traversable cell.
pub fn build_distance_field(grid: &CharGrid, sources: &[Pt]) -> Result<IntGrid, SearchError> {
    let mut dist = IntGrid::new(grid.height(), grid.width(), UNREACHABLE)?;

    let mut frontier = Vec::with_capacity(sources.len());
    for &src in sources {
        if !terrain::passable(grid.get(src)?) {
            return Err(SearchError::BlockedSource(src));
        }
        if dist.get(src)? == UNREACHABLE {
            dist.set(src, 0)?;
            frontier.push(src);
        }
    }

    let mut next = Vec::new();
    let mut nb = Neighbors::new();
    let mut level = 0;
    while !frontier.is_empty() {
        level += 1;
        for &p in &frontier {
            let fresh = nb.cardinal(p, |n| {
                grid.at(n).is_some_and(|&c| terrain::passable(c))
                    && dist.at(n) == Some(&UNREACHABLE)
            });
            for &n in fresh {
                dist.set(n, level)?;
                next.push(n);
            }
        }
        std::mem::swap(&mut frontier, &mut next);
        next.clear();
    }

    log::trace!(
        "distance field from {} sources settled after {level} levels",
        sources.len()
    );
    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_is_manhattan() {
        let grid = CharGrid::new(4, 6, '.').unwrap();
        let src = Pt::new(2, 1);
        let field = build_distance_field(&grid, &[src]).unwrap();
        for (p, &d) in field.iter() {
            assert_eq!(d, manhattan(src, p), "at {p}");
        }
    }

    #[test]
    fn walled_region_is_unreachable() {
        let grid = CharGrid::from_lines(&["..#...", "..#.#.", "..#.#.", "..#..."]).unwrap();
        let field = build_distance_field(&grid, &[Pt::new(0, 0)]).unwrap();
        assert_eq!(field.get(Pt::new(1, 3)), Ok(4));
        for p in [Pt::new(3, 0), Pt::new(5, 3), Pt::new(3, 2)] {
            assert_eq!(field.get(p), Ok(UNREACHABLE));
        }
        // Obstacles too.
        assert_eq!(field.get(Pt::new(2, 0)), Ok(UNREACHABLE));
        assert_eq!(field.get(Pt::new(4, 1)), Ok(UNREACHABLE));
    }

    #[test]
    fn multiple_sources_take_the_nearest() {
        let grid = CharGrid::from_lines(&["......."]).unwrap();
        let field = build_distance_field(&grid, &[Pt::new(0, 0), Pt::new(6, 0), Pt::new(0, 0)])
            .unwrap();
        let row: Vec<i32> = field.iter().map(|(_, &d)| d).collect();
        assert_eq!(row, vec![0, 1, 2, 3, 2, 1, 0]);
    }

    #[test]
    fn no_sources_leaves_everything_unreachable() {
        let grid = CharGrid::new(2, 2, '.').unwrap();
        let field = build_distance_field(&grid, &[]).unwrap();
        assert_eq!(field.count(&UNREACHABLE), 4);
    }

    #[test]
    fn rejects_bad_sources() {
        let grid = CharGrid::from_lines(&[".#"]).unwrap();
        assert_eq!(
            build_distance_field(&grid, &[Pt::new(1, 0)]),
            Err(SearchError::BlockedSource(Pt::new(1, 0)))
        );
        assert!(matches!(
            build_distance_field(&grid, &[Pt::new(0, 3)]),
            Err(SearchError::Grid(_))
        ));
    }

    #[test]
    fn renders_as_text() {
        let grid = CharGrid::from_lines(&["...", ".#."]).unwrap();
        let field = build_distance_field(&grid, &[Pt::new(0, 0)]).unwrap();
        assert_eq!(field.render_text(), format!("0 1 2\n1 {UNREACHABLE} 3"));
    }
}
