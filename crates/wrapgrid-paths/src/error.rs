use std::fmt;

use wrapgrid_core::{GridError, Pt};

/// Errors that can occur when starting or finishing a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A grid access failed, e.g. a start or destination outside the grid.
    Grid(GridError),
    /// The walk was asked to start on a cell it cannot stand on.
    BlockedStart(Pt),
    /// A distance-field source is not a traversable cell.
    BlockedSource(Pt),
    /// Two grids that must describe the same map have different sizes.
    /// Sizes are `(width, height)`.
    ShapeMismatch { expected: Pt, found: Pt },
    /// No discovered cell qualified as a frontier candidate.
    NoCandidate,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid access failed: {e}"),
            Self::BlockedStart(p) => write!(f, "search start {p} is not traversable"),
            Self::BlockedSource(p) => write!(f, "distance source {p} is not traversable"),
            Self::ShapeMismatch { expected, found } => {
                write!(f, "grid shape mismatch: expected {expected}, found {found}")
            }
            Self::NoCandidate => f.write_str("no discovered cell qualifies as a candidate"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
