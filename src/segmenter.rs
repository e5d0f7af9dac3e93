//! GPS track segmentation
//!
//! Splits a time-ordered fix sequence into maximal runs sharing one
//! remote-control status, additionally breaking a run wherever the gap to
//! the next fix exceeds a threshold. Every break records the index of the
//! fix before it so the caller can draw a low-emphasis connector across
//! the boundary.

use std::collections::BTreeSet;

use chrono::Duration;

use crate::error::{Result, TrackError};
use crate::types::{Fix, Segment, SegmentedTrack};

/// Gap above which a run is broken, in seconds
pub const DEFAULT_GAP_THRESHOLD_SECS: i64 = 30;

/// Segment a fix sequence by RC status and time gaps
///
/// The fixes must be ordered by timestamp. Runs end when the RC status
/// flips or when the gap to the next fix exceeds `gap_threshold`; the
/// last fix has no successor and never triggers a gap break. A run of a
/// single fix still yields a one-point segment.
///
/// # Errors
/// `InvalidInput` when `fixes` is empty or `gap_threshold` is not
/// positive.
pub fn segment_track(fixes: &[Fix], gap_threshold: Duration) -> Result<SegmentedTrack> {
    if fixes.is_empty() {
        return Err(TrackError::InvalidInput(
            "fix sequence is empty".to_string(),
        ));
    }
    if gap_threshold <= Duration::zero() {
        return Err(TrackError::InvalidInput(format!(
            "gap threshold must be positive, got {}s",
            gap_threshold.num_seconds()
        )));
    }

    let mut segments = Vec::new();
    let mut link_indexes = BTreeSet::new();
    let mut n = 0;

    while n < fixes.len() {
        let status = fixes[n].remote_control;
        let mut points = Vec::new();

        while n < fixes.len() && fixes[n].remote_control == status {
            if n > 0 && fixes[n - 1].remote_control != status {
                // Status switched between n-1 and n
                link_indexes.insert(n - 1);
            }
            points.push(fixes[n].point());

            if gap_after(fixes, n, gap_threshold) {
                // Current fix ends the run, connector spans the gap
                link_indexes.insert(n);
                n += 1;
                break;
            }
            n += 1;
        }

        if !points.is_empty() {
            segments.push(Segment {
                points,
                remote_control: status,
            });
        }
    }

    Ok(SegmentedTrack {
        segments,
        link_indexes,
    })
}

/// True when the gap between fix `n` and fix `n + 1` exceeds the threshold
fn gap_after(fixes: &[Fix], n: usize, threshold: Duration) -> bool {
    match fixes.get(n + 1) {
        Some(next) => next.timestamp - fixes[n].timestamp > threshold,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fix(offset_secs: i64, remote_control: bool) -> Fix {
        let base = NaiveDate::from_ymd_opt(2018, 7, 4)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Fix {
            timestamp: base + Duration::seconds(offset_secs),
            latitude: 60.1 + offset_secs as f64 * 1e-4,
            longitude: 19.9 + offset_secs as f64 * 1e-4,
            remote_control,
        }
    }

    fn threshold() -> Duration {
        Duration::seconds(DEFAULT_GAP_THRESHOLD_SECS)
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = segment_track(&[], threshold()).unwrap_err();
        assert!(matches!(err, TrackError::InvalidInput(_)));
    }

    #[test]
    fn test_non_positive_threshold_is_rejected() {
        let fixes = vec![fix(0, true)];
        assert!(segment_track(&fixes, Duration::seconds(0)).is_err());
        assert!(segment_track(&fixes, Duration::seconds(-5)).is_err());
    }

    #[test]
    fn test_single_fix_yields_one_point_segment() {
        let fixes = vec![fix(0, true)];
        let track = segment_track(&fixes, threshold()).unwrap();
        assert_eq!(track.segments.len(), 1);
        assert_eq!(track.segments[0].len(), 1);
        assert!(track.segments[0].remote_control);
        assert!(track.link_indexes.is_empty());
    }

    #[test]
    fn test_uniform_track_is_one_segment() {
        let fixes = vec![fix(0, false), fix(10, false), fix(20, false), fix(30, false)];
        let track = segment_track(&fixes, threshold()).unwrap();
        assert_eq!(track.segments.len(), 1);
        assert_eq!(track.segments[0].len(), 4);
        assert!(track.link_indexes.is_empty());
    }

    #[test]
    fn test_time_gap_breaks_run() {
        // Fixes at 0s, 10s, 50s: the 40s gap after index 1 breaks the run
        let fixes = vec![fix(0, true), fix(10, true), fix(50, true)];
        let track = segment_track(&fixes, threshold()).unwrap();

        assert_eq!(track.segments.len(), 2);
        assert_eq!(track.segments[0].len(), 2);
        assert_eq!(track.segments[1].len(), 1);
        assert!(track.segments.iter().all(|s| s.remote_control));
        assert_eq!(track.link_indexes, BTreeSet::from([1]));
    }

    #[test]
    fn test_gap_exactly_at_threshold_does_not_break() {
        let fixes = vec![fix(0, true), fix(30, true)];
        let track = segment_track(&fixes, threshold()).unwrap();
        assert_eq!(track.segments.len(), 1);
        assert!(track.link_indexes.is_empty());
    }

    #[test]
    fn test_gap_after_first_fix_breaks() {
        let fixes = vec![fix(0, false), fix(120, false), fix(130, false)];
        let track = segment_track(&fixes, threshold()).unwrap();
        assert_eq!(track.segments.len(), 2);
        assert_eq!(track.link_indexes, BTreeSet::from([0]));
    }

    #[test]
    fn test_alternating_status_yields_single_point_segments() {
        // T, F, T at 0s, 10s, 20s: three one-point segments, links {0, 1}
        let fixes = vec![fix(0, true), fix(10, false), fix(20, true)];
        let track = segment_track(&fixes, threshold()).unwrap();

        assert_eq!(track.segments.len(), 3);
        assert!(track.segments.iter().all(|s| s.len() == 1));
        assert_eq!(
            track
                .segments
                .iter()
                .map(|s| s.remote_control)
                .collect::<Vec<_>>(),
            vec![true, false, true]
        );
        assert_eq!(track.link_indexes, BTreeSet::from([0, 1]));
    }

    #[test]
    fn test_status_switch_and_gap_at_same_boundary_link_once() {
        // Status flips between 1 and 2 while the same boundary also gaps;
        // the set keeps a single connector for index 1
        let fixes = vec![fix(0, true), fix(10, true), fix(60, false), fix(70, false)];
        let track = segment_track(&fixes, threshold()).unwrap();

        assert_eq!(track.segments.len(), 2);
        assert_eq!(track.link_indexes, BTreeSet::from([1]));
    }

    #[test]
    fn test_segments_are_status_homogeneous_and_cover_input() {
        let fixes = vec![
            fix(0, true),
            fix(10, true),
            fix(20, false),
            fix(80, false),
            fix(90, true),
            fix(100, true),
            fix(200, true),
        ];
        let track = segment_track(&fixes, threshold()).unwrap();

        // Coverage: flattened segment points reproduce the input in order
        let flattened = track.all_points();
        let original: Vec<_> = fixes.iter().map(Fix::point).collect();
        assert_eq!(flattened, original);

        // Link indexes hold exactly the boundaries with a switch or a gap
        let expected: BTreeSet<usize> = (0..fixes.len() - 1)
            .filter(|&i| {
                fixes[i].remote_control != fixes[i + 1].remote_control
                    || fixes[i + 1].timestamp - fixes[i].timestamp > threshold()
            })
            .collect();
        assert_eq!(track.link_indexes, expected);

        // Time contiguity inside each segment
        let mut offset = 0;
        for segment in &track.segments {
            for pair in fixes[offset..offset + segment.len()].windows(2) {
                assert!(pair[1].timestamp - pair[0].timestamp <= threshold());
                assert_eq!(pair[0].remote_control, pair[1].remote_control);
            }
            offset += segment.len();
        }
    }
}
