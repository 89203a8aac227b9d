// Chart element types
// Minimal element model consumed from the externally parsed chart

use serde::{Deserialize, Serialize};

/// Arc color tag as it appears in chart data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcColor {
    Blue,
    Red,
    Green,

    /// Carries no visual or skyline role; void arcs are used as timing
    /// markers inside the chart.
    Void,
}

impl ArcColor {
    pub fn is_void(&self) -> bool {
        matches!(self, ArcColor::Void)
    }
}

/// A tap note
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tap {
    /// Timestamp in milliseconds from chart start
    pub time: i64,

    /// Track lane the note sits on
    pub lane: i32,
}

/// A hold note spanning a time range on one lane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hold {
    /// Start timestamp in milliseconds
    pub start_time: i64,

    /// End timestamp in milliseconds
    pub end_time: i64,

    /// Track lane the note sits on
    pub lane: i32,
}

/// A tap note riding on an arc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcTap {
    /// Timestamp in milliseconds from chart start
    pub time: i64,
}

/// An arc element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    /// Start timestamp in milliseconds
    pub start_time: i64,

    /// End timestamp in milliseconds
    pub end_time: i64,

    /// Vertical position at the start, normalized to the track
    pub y_start: f64,

    /// Vertical position at the end, normalized to the track
    pub y_end: f64,

    /// Color tag
    pub color: ArcColor,

    /// Whether the arc is drawn as a skyline element
    pub is_skyline: bool,
}

impl Arc {
    /// A void-color, zero-length, non-skyline arc acts as a pure timing
    /// marker rather than a playable or visual arc.
    pub fn is_timing_marker(&self) -> bool {
        self.color.is_void()
            && self.start_time == self.end_time
            && self.y_start == self.y_end
            && !self.is_skyline
    }
}

/// One segment of a connected arc chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    /// Start timestamp of the segment in milliseconds
    pub start_time: i64,

    /// True for the first segment of a chain; only head segments start a
    /// distinct playable event.
    pub has_head: bool,
}

/// Scope of an element query against the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryScope {
    /// Also search elements that live inside timing groups
    pub search_in_timing_groups: bool,

    /// Skip elements in non-interactive (noinput) groups
    pub exclude_noninput: bool,
}

impl QueryScope {
    /// The scope used for beat analysis: everything playable, wherever it
    /// lives.
    pub fn playable() -> Self {
        QueryScope {
            search_in_timing_groups: true,
            exclude_noninput: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn void_arc(start_time: i64, end_time: i64) -> Arc {
        Arc {
            start_time,
            end_time,
            y_start: 0.0,
            y_end: 0.0,
            color: ArcColor::Void,
            is_skyline: false,
        }
    }

    #[test]
    fn test_timing_marker_requires_zero_length() {
        assert!(void_arc(1000, 1000).is_timing_marker());
        assert!(!void_arc(1000, 1200).is_timing_marker());
    }

    #[test]
    fn test_timing_marker_requires_flat_y() {
        let mut arc = void_arc(1000, 1000);
        arc.y_end = 1.0;
        assert!(!arc.is_timing_marker());
    }

    #[test]
    fn test_timing_marker_excludes_skyline_and_colored() {
        let mut skyline = void_arc(1000, 1000);
        skyline.is_skyline = true;
        assert!(!skyline.is_timing_marker());

        let mut colored = void_arc(1000, 1000);
        colored.color = ArcColor::Blue;
        assert!(!colored.is_timing_marker());
    }
}
