//! Breadth-first search over character grids.
//!
//! This crate provides the traversal machinery used by the grid solvers:
//!
//! - a level-synchronous walk ([`bfs`]) driven by a pluggable [`Walker`]
//! - **shortest paths** between two cells ([`find_shortest_path`])
//! - **weighted frontier selection** with a border countdown and deferred
//!   wrap penalties ([`find_best_frontier_cell`])
//! - **multi-source distance fields** ([`build_distance_field`])
//!
//! Every walk expands neighbors in the same fixed order (south, east,
//! north, west) and keeps per-call state only, so identical inputs give
//! identical answers.

mod bfs;
mod boostfind;
mod distance;
mod error;
mod neighbors;
mod pathfind;
mod traits;

pub use bfs::bfs;
pub use boostfind::{BoostFinder, BoostParams, find_best_frontier_cell};
pub use distance::{UNREACHABLE, build_distance_field, manhattan};
pub use error::SearchError;
pub use neighbors::{DIRS, Neighbors};
pub use pathfind::{PathFinder, find_shortest_path};
pub use traits::Walker;
