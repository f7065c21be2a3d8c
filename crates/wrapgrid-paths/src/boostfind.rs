//! Weighted frontier search: pick the cheapest cell worth moving toward.
//!
//! The walk spreads out from the bot, charging 1.0 per step and refunding
//! [`BoostParams::boost_tradeoff`] on booster cells. It stops once every
//! listed border cell has been discovered. Only then is each discovered
//! cell charged [`BoostParams::wrap_penalty`] for every manipulator offset
//! that would land on an already wrapped (or blocked) cell, and the
//! cheapest remaining cell is chosen.

use std::collections::{BTreeMap, HashSet};

use wrapgrid_core::{CharGrid, Pt, terrain};

use crate::bfs::bfs;
use crate::error::SearchError;
use crate::traits::Walker;

/// Cost tunables for [`find_best_frontier_cell`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoostParams {
    /// Steps a booster pickup is worth.
    pub boost_tradeoff: f32,
    /// Charge per manipulator offset that would wrap nothing new.
    pub wrap_penalty: f32,
}

impl Default for BoostParams {
    fn default() -> Self {
        Self {
            boost_tradeoff: 5.0,
            wrap_penalty: 20.0,
        }
    }
}

impl BoostParams {
    /// Default tradeoff with a penalty scaled to the map, `2 * (height + width)`,
    /// so that one wasted offset outweighs crossing the whole map.
    pub fn for_grid(grid: &CharGrid) -> Self {
        Self {
            wrap_penalty: (2 * (grid.height() + grid.width())) as f32,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Node {
    cost: f32,
    parent: Option<Pt>,
}

/// Walker behind [`find_best_frontier_cell`].
///
/// Discovered cells live in a `BTreeMap`, so the penalty sweep and the
/// candidate selection visit them in row-major order and ties resolve to
/// the top-most, then left-most cell.
pub struct BoostFinder<'a> {
    grid: &'a CharGrid,
    wrapped: &'a CharGrid,
    manips: &'a [Pt],
    border: HashSet<Pt>,
    boosters: HashSet<Pt>,
    countdown: usize,
    params: BoostParams,
    last: Pt,
    nodes: BTreeMap<Pt, Node>,
    candidate: Option<Pt>,
    swept: bool,
    stop: bool,
}

impl<'a> BoostFinder<'a> {
    pub fn new(
        grid: &'a CharGrid,
        wrapped: &'a CharGrid,
        start: Pt,
        manips: &'a [Pt],
        border: &[Pt],
        boosters: &[Pt],
        params: BoostParams,
    ) -> Self {
        Self {
            grid,
            wrapped,
            manips,
            border: border.iter().copied().collect(),
            boosters: boosters.iter().copied().collect(),
            countdown: border.len(),
            params,
            last: start,
            nodes: BTreeMap::from([(
                start,
                Node {
                    cost: 0.0,
                    parent: None,
                },
            )]),
            candidate: None,
            swept: false,
            stop: false,
        }
    }

    /// Accumulated cost of a discovered cell.
    pub fn cost(&self, p: Pt) -> Option<f32> {
        self.nodes.get(&p).map(|n| n.cost)
    }

    /// Number of border cells still to be discovered.
    pub fn countdown(&self) -> usize {
        self.countdown
    }

    /// The chosen cell, once the penalty sweep has run.
    pub fn candidate(&self) -> Option<Pt> {
        self.candidate
    }

    /// Charge deferred wrap penalties to every discovered cell, then pick
    /// the cheapest cell that is not an obstacle in the wrapped grid.
    ///
    /// Runs at most once.
    pub fn apply_penalties(&mut self) {
        if self.swept {
            return;
        }
        self.swept = true;

        let wrapped = self.wrapped;
        let manips = self.manips;
        let penalty = self.params.wrap_penalty;
        let mut best: Option<(Pt, f32)> = None;
        for (&p, node) in self.nodes.iter_mut() {
            let stale = manips
                .iter()
                .filter_map(|&m| p.checked_add(m).and_then(|q| wrapped.at(q)))
                .filter(|&&c| c != terrain::FREE)
                .count();
            node.cost += penalty * stale as f32;

            if wrapped.at(p) == Some(&terrain::OBSTACLE) {
                continue;
            }
            if best.is_none_or(|(_, c)| node.cost < c) {
                best = Some((p, node.cost));
            }
        }
        self.candidate = best.map(|(p, _)| p);
        log::debug!(
            "frontier sweep over {} cells picked {:?}",
            self.nodes.len(),
            best
        );
    }

    /// Path from the start to the chosen cell.
    pub fn candidate_path(&self) -> Option<Vec<Pt>> {
        let target = self.candidate?;
        let mut path = vec![target];
        let mut cur = target;
        while let Some(parent) = self.nodes.get(&cur)?.parent {
            path.push(parent);
            cur = parent;
        }
        path.reverse();
        Some(path)
    }
}

impl Walker for BoostFinder<'_> {
    fn is_eligible(&self, p: Pt) -> bool {
        self.grid.at(p).is_some_and(|&c| terrain::passable(c)) && !self.nodes.contains_key(&p)
    }

    fn visit_current(&mut self, p: Pt) {
        self.last = p;
    }

    fn visit_new_neighbor(&mut self, p: Pt) {
        let mut cost = self.nodes.get(&self.last).map_or(0.0, |n| n.cost) + 1.0;
        if self.boosters.contains(&p) {
            cost -= self.params.boost_tradeoff;
        }
        self.nodes.insert(
            p,
            Node {
                cost,
                parent: Some(self.last),
            },
        );

        if self.border.contains(&p) {
            self.countdown = self.countdown.saturating_sub(1);
        }
        if self.countdown == 0 {
            self.apply_penalties();
            self.stop = true;
        }
    }

    fn is_stopped(&self) -> bool {
        self.stop
    }
}

/// Find the path to the best cell to move toward.
///
/// Walks `grid` from `start` until every cell of `border` has been
/// discovered (or nothing more is reachable), then applies the deferred
/// wrap penalties against `wrapped` using the `manips` offsets and returns
/// the path from `start` to the cheapest discovered cell that is not an
/// obstacle in `wrapped`. Equal costs resolve to the first cell in
/// row-major order.
///
/// `wrapped` must have the same shape as `grid`.
pub fn find_best_frontier_cell(
    grid: &CharGrid,
    wrapped: &CharGrid,
    start: Pt,
    manips: &[Pt],
    border: &[Pt],
    boosters: &[Pt],
    params: BoostParams,
) -> Result<Vec<Pt>, SearchError> {
    if wrapped.size() != grid.size() {
        return Err(SearchError::ShapeMismatch {
            expected: grid.size(),
            found: wrapped.size(),
        });
    }
    let mut finder = BoostFinder::new(grid, wrapped, start, manips, border, boosters, params);
    bfs(grid, start, &mut finder)?;
    if !finder.is_stopped() {
        log::debug!(
            "frontier walk from {start} exhausted with {} border cells unseen",
            finder.countdown()
        );
        finder.apply_penalties();
    }
    finder.candidate_path().ok_or(SearchError::NoCandidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_PENALTY: BoostParams = BoostParams {
        boost_tradeoff: 5.0,
        wrap_penalty: 0.0,
    };

    fn open(h: i32, w: i32) -> CharGrid {
        CharGrid::new(h, w, terrain::FREE).unwrap()
    }

    #[test]
    fn countdown_hits_zero_after_first_expansion() {
        let grid = open(5, 5);
        let wrapped = grid.clone();
        let start = Pt::new(2, 2);
        let border = [Pt::new(2, 3), Pt::new(3, 2), Pt::new(2, 1), Pt::new(1, 2)];
        let manips = [Pt::new(1, 0), Pt::new(1, 1), Pt::new(1, -1)];

        let mut finder = BoostFinder::new(
            &grid,
            &wrapped,
            start,
            &manips,
            &border,
            &[],
            BoostParams::default(),
        );
        bfs(&grid, start, &mut finder).unwrap();

        assert!(finder.is_stopped());
        assert_eq!(finder.countdown(), 0);
        for b in border {
            // No wrapped cells anywhere, so the sweep adds nothing.
            assert_eq!(finder.cost(b), Some(1.0));
        }
        assert_eq!(finder.cost(Pt::new(2, 4)), None);
        // The start itself is the cheapest discovered cell.
        assert_eq!(finder.candidate(), Some(start));
        assert_eq!(finder.candidate_path(), Some(vec![start]));
    }

    #[test]
    fn wrapped_start_picks_first_neighbor_in_row_major_order() {
        let grid = open(5, 5);
        let mut wrapped = grid.clone();
        let start = Pt::new(2, 2);
        wrapped.set(start, terrain::WRAPPED).unwrap();
        let border = [Pt::new(2, 3), Pt::new(3, 2), Pt::new(2, 1), Pt::new(1, 2)];
        // The offset (0, 0) penalizes standing on a wrapped cell.
        let manips = [Pt::ZERO];

        let path = find_best_frontier_cell(
            &grid,
            &wrapped,
            start,
            &manips,
            &border,
            &[],
            BoostParams::default(),
        )
        .unwrap();
        // All four neighbors cost 1.0; (2, 1) comes first row-major.
        assert_eq!(path, vec![start, Pt::new(2, 1)]);
    }

    #[test]
    fn booster_pulls_the_choice() {
        let grid = open(1, 7);
        let mut wrapped = grid.clone();
        let start = Pt::new(3, 0);
        wrapped.set(start, terrain::WRAPPED).unwrap();
        let border = [Pt::new(0, 0), Pt::new(6, 0)];
        let boosters = [Pt::new(5, 0)];
        let manips = [Pt::ZERO];

        let path =
            find_best_frontier_cell(&grid, &wrapped, start, &manips, &border, &boosters, NO_PENALTY)
                .unwrap();
        assert_eq!(path, vec![start, Pt::new(4, 0), Pt::new(5, 0)]);
    }

    #[test]
    fn booster_cost_carries_forward() {
        let grid = open(1, 5);
        let wrapped = grid.clone();
        let start = Pt::new(0, 0);
        let boosters = [Pt::new(1, 0)];
        let params = BoostParams {
            boost_tradeoff: 1.5,
            wrap_penalty: 0.0,
        };
        let mut finder =
            BoostFinder::new(&grid, &wrapped, start, &[], &[Pt::new(4, 0)], &boosters, params);
        bfs(&grid, start, &mut finder).unwrap();
        assert_eq!(finder.cost(Pt::new(1, 0)), Some(-0.5));
        assert_eq!(finder.cost(Pt::new(2, 0)), Some(0.5));
        assert_eq!(finder.cost(Pt::new(4, 0)), Some(2.5));
        assert_eq!(finder.candidate(), Some(Pt::new(1, 0)));
    }

    #[test]
    fn penalty_pushes_away_from_wrapped_area() {
        // Left half already wrapped. Offsets look one cell left and right.
        let grid = open(1, 6);
        let wrapped = CharGrid::from_lines(&["+++..."]).unwrap();
        let start = Pt::new(2, 0);
        let manips = [Pt::new(-1, 0), Pt::new(1, 0)];
        let border = [Pt::new(0, 0), Pt::new(5, 0)];

        let mut finder = BoostFinder::new(
            &grid,
            &wrapped,
            start,
            &manips,
            &border,
            &[],
            BoostParams::default(),
        );
        bfs(&grid, start, &mut finder).unwrap();
        assert!(finder.is_stopped());
        // (2,0): left wrapped, right free -> 0 + 20
        assert_eq!(finder.cost(Pt::new(2, 0)), Some(20.0));
        // (3,0): left wrapped -> 1 + 20
        assert_eq!(finder.cost(Pt::new(3, 0)), Some(21.0));
        // (4,0): both free -> 2
        assert_eq!(finder.cost(Pt::new(4, 0)), Some(2.0));
        // (1,0): both neighbors wrapped -> 1 + 40
        assert_eq!(finder.cost(Pt::new(1, 0)), Some(41.0));
        assert_eq!(
            finder.candidate_path(),
            Some(vec![start, Pt::new(3, 0), Pt::new(4, 0)])
        );
    }

    #[test]
    fn offsets_off_the_map_are_ignored() {
        let grid = open(1, 2);
        let wrapped = grid.clone();
        let start = Pt::new(0, 0);
        let manips = [Pt::new(-1, 0), Pt::new(0, -1)];
        let mut finder =
            BoostFinder::new(&grid, &wrapped, start, &manips, &[], &[], BoostParams::default());
        bfs(&grid, start, &mut finder).unwrap();
        // Empty border: the first discovery already triggers the sweep.
        assert!(finder.is_stopped());
        assert_eq!(finder.cost(start), Some(0.0));
        assert_eq!(finder.cost(Pt::new(1, 0)), Some(1.0));
    }

    #[test]
    fn far_offsets_do_not_overflow() {
        let grid = open(1, 3);
        let mut wrapped = grid.clone();
        let start = Pt::new(1, 0);
        wrapped.set(start, terrain::WRAPPED).unwrap();
        let manips = [Pt::ZERO, Pt::new(i32::MAX, 0), Pt::new(i32::MIN, 0)];
        let border = [Pt::new(0, 0), Pt::new(2, 0)];
        let path = find_best_frontier_cell(
            &grid,
            &wrapped,
            start,
            &manips,
            &border,
            &[],
            BoostParams::default(),
        )
        .unwrap();
        // Only the start pays, for its own wrapped cell.
        assert_eq!(path, vec![start, Pt::new(0, 0)]);
    }

    #[test]
    fn exhausted_walk_still_selects() {
        let grid = CharGrid::from_lines(&["..#."]).unwrap();
        let mut wrapped = grid.clone();
        wrapped.set(Pt::new(0, 0), terrain::WRAPPED).unwrap();
        let start = Pt::new(0, 0);
        // (3, 0) is never reachable, so the countdown never hits zero.
        let border = [Pt::new(3, 0)];
        let path = find_best_frontier_cell(
            &grid,
            &wrapped,
            start,
            &[Pt::ZERO],
            &border,
            &[],
            BoostParams::default(),
        )
        .unwrap();
        assert_eq!(path, vec![start, Pt::new(1, 0)]);
    }

    #[test]
    fn no_candidate_when_everything_is_blocked() {
        let grid = open(1, 3);
        let wrapped = CharGrid::from_lines(&["###"]).unwrap();
        let res = find_best_frontier_cell(
            &grid,
            &wrapped,
            Pt::new(1, 0),
            &[],
            &[Pt::new(0, 0), Pt::new(2, 0)],
            &[],
            BoostParams::default(),
        );
        assert_eq!(res, Err(SearchError::NoCandidate));
    }

    #[test]
    fn rejects_mismatched_wrapped_grid() {
        let grid = open(2, 3);
        let wrapped = open(3, 2);
        let res = find_best_frontier_cell(
            &grid,
            &wrapped,
            Pt::ZERO,
            &[],
            &[],
            &[],
            BoostParams::default(),
        );
        assert_eq!(
            res,
            Err(SearchError::ShapeMismatch {
                expected: Pt::new(3, 2),
                found: Pt::new(2, 3),
            })
        );
    }

    #[test]
    fn params_for_grid() {
        let grid = open(10, 20);
        let p = BoostParams::for_grid(&grid);
        assert_eq!(p.wrap_penalty, 60.0);
        assert_eq!(p.boost_tradeoff, 5.0);
    }
}
