use wrapgrid_core::Pt;

/// The four axis-aligned steps in expansion order: south, east, north, west.
///
/// Every walk in this crate enumerates neighbors in this order, which makes
/// tie-breaking reproducible for identical grids.
pub const DIRS: [Pt; 4] = [Pt::new(0, 1), Pt::new(1, 0), Pt::new(0, -1), Pt::new(-1, 0)];

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal neighbors of a grid point in [`DIRS`] order,
/// filtered by a predicate, reusing one buffer across calls.
pub struct Neighbors {
    buf: Vec<Pt>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the 4-directional neighbors of `p`, keeping only those for
    /// which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Pt, mut keep: impl FnMut(Pt) -> bool) -> &[Pt] {
        self.buf.clear();
        for d in DIRS {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
