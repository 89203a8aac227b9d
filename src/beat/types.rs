// Beat annotation types
// Output data model produced by the beat analysis pipeline

use serde::{Deserialize, Serialize};

use crate::beat::quantize::GapMatch;

/// One analyzed gap between adjacent distinct chart events, annotated with
/// the subdivision that best explains it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeatNote {
    /// Timestamp in milliseconds where the gap begins
    pub time_point: i64,

    /// Gap length in milliseconds to the next distinct event
    pub duration: i64,

    /// Subdivision denominator relative to a whole note; -1 when the gap
    /// could not be classified
    pub divide: i32,

    /// The gap exceeds one whole note at the effective tempo
    pub beyond_full_note: bool,

    /// The matched subdivision is a dotted (1.5x) length
    pub has_dot: bool,
}

impl BeatNote {
    pub(crate) fn from_match(time_point: i64, duration: i64, m: GapMatch) -> Self {
        BeatNote {
            time_point,
            duration,
            divide: m.divide,
            beyond_full_note: m.beyond_full_note,
            has_dot: m.has_dot,
        }
    }

    pub(crate) fn unresolved(time_point: i64, duration: i64) -> Self {
        BeatNote {
            time_point,
            duration,
            divide: -1,
            beyond_full_note: false,
            has_dot: false,
        }
    }

    /// Whether quantization produced any classification for this gap.
    /// Downstream consumers must not read `divide` without checking this.
    pub fn is_resolved(&self) -> bool {
        self.divide > 0 || self.beyond_full_note
    }

    /// Text form of the annotation as renderers print it next to the
    /// track: the divisor when known, `'.'` appended for dotted lengths,
    /// `'-'` appended when the gap exceeds a whole note.
    pub fn label(&self) -> String {
        let mut text = if self.divide > 0 {
            self.divide.to_string()
        } else {
            String::new()
        };
        if self.has_dot {
            text.push('.');
        }
        if self.beyond_full_note {
            text.push('-');
        }
        text
    }
}

/// Aggregate counts over an analyzed note sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeatSummary {
    pub total: usize,
    pub resolved: usize,
    pub dotted: usize,
    pub beyond_full_note: usize,
    pub unresolved: usize,
}

/// Count how the gaps of an analyzed sequence were classified.
pub fn summarize(notes: &[BeatNote]) -> BeatSummary {
    let mut summary = BeatSummary {
        total: notes.len(),
        ..BeatSummary::default()
    };

    for note in notes {
        if note.beyond_full_note {
            summary.beyond_full_note += 1;
        }
        if note.is_resolved() {
            summary.resolved += 1;
        } else {
            summary.unresolved += 1;
        }
        if note.has_dot {
            summary.dotted += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(divide: i32, has_dot: bool, beyond_full_note: bool) -> BeatNote {
        BeatNote {
            time_point: 0,
            duration: 500,
            divide,
            beyond_full_note,
            has_dot,
        }
    }

    #[test]
    fn test_label_plain_and_dotted() {
        assert_eq!(note(4, false, false).label(), "4");
        assert_eq!(note(8, true, false).label(), "8.");
    }

    #[test]
    fn test_label_beyond_and_unresolved() {
        assert_eq!(note(-1, false, true).label(), "-");
        assert_eq!(note(-1, false, false).label(), "");
    }

    #[test]
    fn test_is_resolved() {
        assert!(note(4, false, false).is_resolved());
        assert!(note(-1, false, true).is_resolved());
        assert!(!note(-1, false, false).is_resolved());
    }

    #[test]
    fn test_summarize() {
        let notes = vec![
            note(4, false, false),
            note(6, true, false),
            note(-1, false, true),
            note(-1, false, false),
        ];

        let summary = summarize(&notes);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.resolved, 3);
        assert_eq!(summary.dotted, 1);
        assert_eq!(summary.beyond_full_note, 1);
        assert_eq!(summary.unresolved, 1);
    }
}
