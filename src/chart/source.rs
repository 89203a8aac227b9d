// Chart source contract
// Read-only query seam to the externally parsed chart

use crate::chart::types::{Arc, ArcSegment, ArcTap, Hold, QueryScope, Tap};

/// Read-only access to a parsed chart.
///
/// The chart parser, the full element model, and the chart's own tempo
/// timeline all live behind this trait; beat analysis only needs these
/// queries. Implementations must be side-effect free.
pub trait ChartSource {
    /// Segments of connected arc chains. Chains are tracked at the top
    /// level of the chart only; arcs living inside timing groups do not
    /// take part in them.
    fn connected_arc_segments(&self) -> Vec<ArcSegment>;

    /// Tap notes within the given scope.
    fn taps(&self, scope: QueryScope) -> Vec<Tap>;

    /// Hold notes within the given scope.
    fn holds(&self, scope: QueryScope) -> Vec<Hold>;

    /// Arc-tap notes within the given scope.
    fn arc_taps(&self, scope: QueryScope) -> Vec<ArcTap>;

    /// Arc elements within the given scope.
    fn arcs(&self, scope: QueryScope) -> Vec<Arc>;

    /// The chart's own tempo in effect at the given timestamp, independent
    /// of any override set. Charts with degenerate timing may report 0.
    fn native_bpm_at(&self, time: i64) -> f64;
}
