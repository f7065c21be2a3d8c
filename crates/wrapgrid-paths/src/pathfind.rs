//! Shortest path between two cells, as a [`Walker`] over [`bfs`].

use std::collections::HashMap;

use wrapgrid_core::{CharGrid, Pt, terrain};

use crate::bfs::bfs;
use crate::error::SearchError;
use crate::traits::Walker;

/// Walker that records a parent for every discovered cell and stops the
/// moment `dest` is discovered.
pub struct PathFinder<'a> {
    grid: &'a CharGrid,
    dest: Pt,
    last: Pt,
    parents: HashMap<Pt, Option<Pt>>,
    result: Vec<Pt>,
    stop: bool,
}

impl<'a> PathFinder<'a> {
    pub fn new(grid: &'a CharGrid, src: Pt, dest: Pt) -> Self {
        Self {
            grid,
            dest,
            last: src,
            parents: HashMap::from([(src, None)]),
            result: Vec::new(),
            stop: false,
        }
    }

    /// The path found so far: empty until the destination is discovered.
    pub fn result(&self) -> &[Pt] {
        &self.result
    }

    pub fn into_result(self) -> Vec<Pt> {
        self.result
    }

    /// Follow parents back from `p` to the source.
    fn reconstruct(&self, p: Pt) -> Vec<Pt> {
        let mut path = vec![p];
        let mut cur = p;
        while let Some(&Some(parent)) = self.parents.get(&cur) {
            path.push(parent);
            cur = parent;
        }
        path.reverse();
        path
    }
}

impl Walker for PathFinder<'_> {
    fn is_eligible(&self, p: Pt) -> bool {
        self.grid.at(p).is_some_and(|&c| terrain::passable(c)) && !self.parents.contains_key(&p)
    }

    fn visit_current(&mut self, p: Pt) {
        self.last = p;
    }

    fn visit_new_neighbor(&mut self, p: Pt) {
        self.parents.insert(p, Some(self.last));
        if p == self.dest {
            self.result = self.reconstruct(p);
            self.stop = true;
        }
    }

    fn is_stopped(&self) -> bool {
        self.stop
    }
}

/// Compute a shortest 4-connected path from `start` to `dest`.
///
/// Returns the full path including both endpoints: `[start]` when
/// `start == dest`, and an empty vector when `dest` cannot be reached.
/// Fails if either endpoint is outside the grid or `start` is not
/// traversable.
pub fn find_shortest_path(grid: &CharGrid, start: Pt, dest: Pt) -> Result<Vec<Pt>, SearchError> {
    grid.get(dest)?;
    if start == dest {
        if !terrain::passable(grid.get(start)?) {
            return Err(SearchError::BlockedStart(start));
        }
        return Ok(vec![start]);
    }
    let mut finder = PathFinder::new(grid, start, dest);
    bfs(grid, start, &mut finder)?;
    if finder.result().is_empty() {
        log::debug!("no path from {start} to {dest}");
    }
    Ok(finder.into_result())
}
