// Tempo override timeline
// User-supplied BPM ranges that supersede the chart's own tempo during
// beat analysis

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a tempo override description
#[derive(Debug, Error)]
pub enum TempoOverrideError {
    #[error("Failed to read override description: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid override description: {0}")]
    Json(#[from] serde_json::Error),
}

/// One tempo override range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempoOverrideSegment {
    /// Tempo in beats per minute applied within the range
    pub bpm: f64,

    /// Start timestamp in milliseconds, inclusive
    pub start_time: i64,

    /// End timestamp in milliseconds, exclusive; `None` means the range is
    /// open-ended
    #[serde(default)]
    pub end_time: Option<i64>,
}

/// A set of tempo overrides for one chart.
///
/// The raw form may contain unsorted, overlapping, or open-ended segments;
/// [`TempoOverrideSet::normalize`] turns it into a sorted timeline of
/// half-open `[start_time, end_time)` intervals suitable for point lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TempoOverrideSet {
    /// Replaces the global fallback tempo when present
    #[serde(default)]
    pub base_bpm_override: Option<f64>,

    /// Override ranges; the description file format names this field
    /// `items`
    #[serde(default, alias = "items")]
    pub segments: Vec<TempoOverrideSegment>,
}

impl TempoOverrideSet {
    /// Load an override set from a JSON description string.
    pub fn from_json_str(data: &str) -> Result<Self, TempoOverrideError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Load an override set from a JSON description file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, TempoOverrideError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Produce the normalized form of this set: segments sorted ascending
    /// by start time, every end time concrete. Overlaps are resolved by
    /// truncating a segment at the next segment's start; an open end on the
    /// last segment becomes `i64::MAX`.
    ///
    /// Normalizing an already-normalized set is a no-op.
    pub fn normalize(&self) -> TempoOverrideSet {
        let mut segments = self.segments.clone();
        segments.sort_by_key(|segment| segment.start_time);

        let count = segments.len();
        for index in 0..count {
            let end = segments[index].end_time.unwrap_or(i64::MAX);
            let capped = if index + 1 < count {
                end.min(segments[index + 1].start_time)
            } else {
                end
            };
            segments[index].end_time = Some(capped);
        }

        TempoOverrideSet {
            base_bpm_override: self.base_bpm_override,
            segments,
        }
    }

    /// Effective override tempo at a timestamp, on a normalized set.
    ///
    /// Scans segments in ascending order and stops as soon as one starts
    /// past `time`; no later segment can contain it. Falls back to
    /// `base_bpm_override`; `None` means the caller should use the chart's
    /// own tempo.
    pub fn bpm_at(&self, time: i64) -> Option<f64> {
        for segment in &self.segments {
            if segment.start_time > time {
                break;
            }
            if time < segment.end_time.unwrap_or(i64::MAX) {
                return Some(segment.bpm);
            }
        }
        self.base_bpm_override
    }
}
