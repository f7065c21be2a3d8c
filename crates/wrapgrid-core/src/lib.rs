//! **wrapgrid-core** — core types for grid solvers.
//!
//! This crate provides the foundational types used across the *wrapgrid*
//! crates: an integer coordinate with vector arithmetic and rotations, a
//! half-open rectangle, and a dense bounds-checked [`Grid`] of cell values.

pub mod geom;
pub mod grid;
pub mod terrain;

pub use geom::{Pt, Range};
pub use grid::{ByteGrid, CharGrid, Grid, GridError, IntGrid};
