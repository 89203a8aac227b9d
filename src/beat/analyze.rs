// Beat analysis pipeline
// Gathers event timestamps from the chart, resolves the effective tempo per
// gap, and quantizes each gap into a BeatNote

use crate::beat::quantize::quantize_gap;
use crate::beat::tempo::TempoOverrideSet;
use crate::beat::types::{summarize, BeatNote};
use crate::chart::{ChartSource, QueryScope};

/// Adjacent events separated by this many milliseconds or less are treated
/// as coincident, not as a distinct rhythmic gap.
const MIN_GAP_MS: i64 = 3;

/// Analyze a chart into an ordered sequence of beat notes.
///
/// Algorithm:
/// 1. Normalize the override set if present; its `base_bpm_override`
///    replaces `base_bpm` as the global fallback for this call.
/// 2. Collect the timestamp of every distinct playable event and sort.
/// 3. For each adjacent pair, resolve the tempo in effect at the gap's
///    start (override timeline first, chart-native tempo second) and
///    quantize the gap; a gap the local tempo cannot classify is retried
///    against the fallback tempo.
///
/// Gaps that neither tempo can classify are still emitted, with
/// `divide = -1`; the analysis never aborts on a single gap. Charts with
/// fewer than two event timestamps produce an empty sequence.
pub fn analyze_chart<C: ChartSource + ?Sized>(
    chart: &C,
    base_bpm: f64,
    overrides: Option<&TempoOverrideSet>,
) -> Vec<BeatNote> {
    let overrides = overrides.map(TempoOverrideSet::normalize);
    let base_bpm = overrides
        .as_ref()
        .and_then(|set| set.base_bpm_override)
        .unwrap_or(base_bpm);

    let time_points = collect_time_points(chart);
    log::debug!("analyzing {} event time points", time_points.len());

    let mut notes = Vec::new();
    for pair in time_points.windows(2) {
        let (start, next) = (pair[0], pair[1]);
        let gap = next - start;
        if gap <= MIN_GAP_MS {
            continue;
        }

        let bpm = match overrides.as_ref().and_then(|set| set.bpm_at(start)) {
            Some(bpm) => bpm,
            None => chart.native_bpm_at(start),
        };

        let note = quantize_gap(gap, bpm)
            .or_else(|| quantize_gap(gap, base_bpm))
            .map(|m| BeatNote::from_match(start, gap, m))
            .unwrap_or_else(|| BeatNote::unresolved(start, gap));
        notes.push(note);
    }

    let summary = summarize(&notes);
    log::debug!(
        "classified {} of {} gaps ({} dotted, {} beyond a whole note)",
        summary.resolved,
        summary.total,
        summary.dotted,
        summary.beyond_full_note
    );

    notes
}

/// Every timestamp at which a distinct playable event begins: heads of
/// connected arc chains, void timing-marker arcs, taps, hold starts, and
/// arc-taps. Duplicates are kept; the result is sorted ascending.
fn collect_time_points<C: ChartSource + ?Sized>(chart: &C) -> Vec<i64> {
    let scope = QueryScope::playable();
    let mut time_points = Vec::new();

    for segment in chart.connected_arc_segments() {
        if segment.has_head {
            time_points.push(segment.start_time);
        }
    }

    for arc in chart.arcs(scope) {
        if arc.is_timing_marker() {
            time_points.push(arc.start_time);
        }
    }

    for tap in chart.taps(scope) {
        time_points.push(tap.time);
    }

    for hold in chart.holds(scope) {
        time_points.push(hold.start_time);
    }

    for arc_tap in chart.arc_taps(scope) {
        time_points.push(arc_tap.time);
    }

    time_points.sort();
    time_points
}
