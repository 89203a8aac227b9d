// Beat analysis core
// Tempo override timeline, gap quantization, and the analysis pipeline

pub mod analyze;
pub mod quantize;
pub mod tempo;
pub mod types;

pub use analyze::analyze_chart;
pub use quantize::{quantize_gap, whole_note_ms, GapMatch, MATCH_TOLERANCE_MS};
pub use tempo::{TempoOverrideError, TempoOverrideSegment, TempoOverrideSet};
pub use types::{summarize, BeatNote, BeatSummary};
