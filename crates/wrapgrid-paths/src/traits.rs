use wrapgrid_core::Pt;

/// Per-cell policy driven by [`bfs`](crate::bfs).
///
/// The engine keeps no discovered-set of its own: a walker decides which
/// neighbors are eligible (terrain *and* "not seen yet") and records
/// whatever it needs when a cell is discovered.
pub trait Walker {
    /// Whether the in-bounds neighbor `p` may be discovered.
    fn is_eligible(&self, p: Pt) -> bool;

    /// Called when `p` is taken from the current frontier, before its
    /// neighbors are enumerated.
    fn visit_current(&mut self, p: Pt);

    /// Called once for every newly discovered cell. May stop the walk.
    fn visit_new_neighbor(&mut self, p: Pt);

    /// Whether the walk must end now. Checked after every visit.
    fn is_stopped(&self) -> bool;
}
