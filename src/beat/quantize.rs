// Beat gap quantization
// Tolerance-based nearest-match search over a curated set of subdivisions

/// Absolute tolerance in milliseconds for a candidate length to count as a
/// match.
pub const MATCH_TOLERANCE_MS: f64 = 3.5;

/// Duration of one whole note (four beats) in milliseconds at the given
/// tempo.
pub fn whole_note_ms(bpm: f64) -> f64 {
    240_000.0 / bpm
}

/// Outcome of matching one gap against the subdivision table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapMatch {
    /// Subdivision denominator relative to a whole note; -1 when the gap
    /// exceeds a whole note and no finer classification was attempted
    pub divide: i32,

    /// The gap matched the dotted (1.5x) variant of the subdivision
    pub has_dot: bool,

    /// The gap is longer than one whole note
    pub beyond_full_note: bool,
}

/// Find the subdivision that best explains a time gap at the given tempo.
///
/// Algorithm:
/// 1. A tempo of zero cannot classify anything; return `None`.
/// 2. Gaps longer than a whole note are flagged and never subdivided.
/// 3. Gaps within tolerance of a whole note resolve to divide 1.
/// 4. Otherwise probe each candidate divisor in its plain and dotted form
///    and keep the candidate with the strictly smallest absolute distance;
///    ties keep the earliest candidate (smaller divisor, plain before
///    dotted).
///
/// Returns `None` when no candidate lands within [`MATCH_TOLERANCE_MS`].
pub fn quantize_gap(gap_ms: i64, bpm: f64) -> Option<GapMatch> {
    if bpm == 0.0 {
        return None;
    }

    let whole = whole_note_ms(bpm);
    let gap = gap_ms as f64;

    if gap > whole {
        return Some(GapMatch {
            divide: -1,
            has_dot: false,
            beyond_full_note: true,
        });
    }

    if (gap - whole).abs() <= MATCH_TOLERANCE_MS {
        return Some(GapMatch {
            divide: 1,
            has_dot: false,
            beyond_full_note: false,
        });
    }

    let mut best: Option<GapMatch> = None;
    let mut best_distance = f64::INFINITY;

    let mut divisor = 2;
    while divisor <= 64 {
        let plain = whole / divisor as f64;
        let dotted = plain * 1.5;

        let plain_distance = (gap - plain).abs();
        if plain_distance <= MATCH_TOLERANCE_MS && plain_distance < best_distance {
            best = Some(GapMatch {
                divide: divisor,
                has_dot: false,
                beyond_full_note: false,
            });
            best_distance = plain_distance;
        }

        let dotted_distance = (gap - dotted).abs();
        if dotted_distance <= MATCH_TOLERANCE_MS && dotted_distance < best_distance {
            best = Some(GapMatch {
                divide: divisor,
                has_dot: true,
                beyond_full_note: false,
            });
            best_distance = dotted_distance;
        }

        divisor = next_divisor(divisor);
    }

    best.map(canonicalize_dotted)
}

/// Candidate divisors are probed on a non-uniform ladder: every value below
/// 4, even values up to 28, multiples of 4 up to 32, multiples of 8 up to
/// 64.
fn next_divisor(divisor: i32) -> i32 {
    if divisor < 4 {
        divisor + 1
    } else if divisor < 28 {
        divisor + 2
    } else if divisor < 32 {
        divisor + 4
    } else {
        divisor + 8
    }
}

/// A dotted note arithmetically identical to a plain shorter subdivision is
/// reported in plain form (dotted 1/6 and plain 1/4 have the same length).
/// The plain candidate is normally found first with an equal distance and
/// wins the tie-break, so this only fires when floating point rounding puts
/// the dotted length strictly closer to the gap.
fn canonicalize_dotted(m: GapMatch) -> GapMatch {
    if m.has_dot && (m.divide * 2) % 3 == 0 {
        GapMatch {
            divide: m.divide * 2 / 3,
            has_dot: false,
            beyond_full_note: m.beyond_full_note,
        }
    } else {
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_note_at_120() {
        // Whole note at 120 bpm is 2000ms
        let m = quantize_gap(1000, 120.0).unwrap();
        assert_eq!(m.divide, 2);
        assert!(!m.has_dot);
        assert!(!m.beyond_full_note);
    }

    #[test]
    fn test_whole_note_at_120() {
        let m = quantize_gap(2000, 120.0).unwrap();
        assert_eq!(m.divide, 1);
        assert!(!m.has_dot);
    }

    #[test]
    fn test_beyond_whole_note() {
        let m = quantize_gap(2200, 120.0).unwrap();
        assert!(m.beyond_full_note);
        assert_eq!(m.divide, -1);
        assert!(!m.has_dot);
    }

    #[test]
    fn test_whole_note_tolerance_applies_from_below_only() {
        // 1997 is within 3.5ms of the 2000ms whole note
        let m = quantize_gap(1997, 120.0).unwrap();
        assert_eq!(m.divide, 1);

        // 2003 is also within 3.5ms, but longer gaps are flagged first
        let m = quantize_gap(2003, 120.0).unwrap();
        assert!(m.beyond_full_note);

        // 1996 is 4ms short of a whole note and matches nothing else
        assert_eq!(quantize_gap(1996, 120.0), None);
    }

    #[test]
    fn test_triplet_equivalent_at_180() {
        // Whole note at 180 bpm is ~1333.33ms; 444ms is a third of it
        let m = quantize_gap(444, 180.0).unwrap();
        assert_eq!(m.divide, 3);
        assert!(!m.has_dot);
    }

    #[test]
    fn test_dotted_quarter_at_120() {
        // 750ms = 500ms quarter * 1.5
        let m = quantize_gap(750, 120.0).unwrap();
        assert_eq!(m.divide, 4);
        assert!(m.has_dot);
    }

    #[test]
    fn test_tie_break_prefers_plain_quarter_over_dotted_sixth() {
        // 500ms matches both plain 1/4 and dotted 1/6 exactly; the plain
        // quarter is found first and kept
        let m = quantize_gap(500, 120.0).unwrap();
        assert_eq!(m.divide, 4);
        assert!(!m.has_dot);
    }

    #[test]
    fn test_zero_tempo_never_matches() {
        assert_eq!(quantize_gap(500, 0.0), None);
        assert_eq!(quantize_gap(2000, 0.0), None);
        assert_eq!(quantize_gap(0, 0.0), None);
    }

    #[test]
    fn test_unmatched_gap() {
        // 433ms at 120 bpm sits between every candidate length
        assert_eq!(quantize_gap(433, 120.0), None);
    }

    #[test]
    fn test_divisor_ladder() {
        let mut divisors = Vec::new();
        let mut d = 2;
        while d <= 64 {
            divisors.push(d);
            d = next_divisor(d);
        }
        assert_eq!(
            divisors,
            vec![2, 3, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 32, 40, 48, 56, 64]
        );
    }

    #[test]
    fn test_canonicalize_dotted() {
        let dotted_sixth = GapMatch {
            divide: 6,
            has_dot: true,
            beyond_full_note: false,
        };
        let plain = canonicalize_dotted(dotted_sixth);
        assert_eq!(plain.divide, 4);
        assert!(!plain.has_dot);

        // Dotted lengths with no plain equivalent stay dotted
        let dotted_eighth = GapMatch {
            divide: 8,
            has_dot: true,
            beyond_full_note: false,
        };
        assert_eq!(canonicalize_dotted(dotted_eighth), dotted_eighth);

        // Plain matches pass through untouched
        let plain_third = GapMatch {
            divide: 3,
            has_dot: false,
            beyond_full_note: false,
        };
        assert_eq!(canonicalize_dotted(plain_third), plain_third);
    }

    #[test]
    fn test_fine_subdivisions() {
        // Whole note at 120 bpm is 2000ms; 1/32 is 62.5ms
        let m = quantize_gap(62, 120.0).unwrap();
        assert_eq!(m.divide, 32);
        assert!(!m.has_dot);

        // 1/64 is 31.25ms
        let m = quantize_gap(31, 120.0).unwrap();
        assert_eq!(m.divide, 64);
    }
}
