//! Coverage utilities for manipulator bots.
//!
//! A bot standing on a map grid wraps the cells its manipulator offsets
//! can see. This crate tracks that in a second "wrapped" grid:
//! - **Line of sight** between two cells ([`visible`])
//! - **Wrapping** the visible manipulator cells ([`mark_wrapped`],
//!   [`manipulators_will_wrap`])
//! - **Border cells**, the unwrapped edge of the wrapped area
//!   ([`border_cells`]), which feed the frontier search in `wrapgrid-paths`

pub mod coverage;
pub mod sight;

pub use coverage::{
    border_cells, is_border_cell, list_unwrapped, manipulators_will_wrap, mark_wrapped,
};
pub use sight::visible;
