// Beatline - Beat Subdivision Analyzer
// Module declarations and public API

pub mod beat;
pub mod chart;

pub use beat::{
    analyze_chart, quantize_gap, summarize, whole_note_ms, BeatNote, BeatSummary, GapMatch,
    TempoOverrideError, TempoOverrideSegment, TempoOverrideSet, MATCH_TOLERANCE_MS,
};
pub use chart::{Arc, ArcColor, ArcSegment, ArcTap, ChartSource, Hold, QueryScope, Tap};
