use std::collections::BTreeSet;

use crate::types::TrackPoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A maximal contiguous run of fixes sharing one RC status, with no
/// internal time gap above the segmentation threshold
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub points: Vec<TrackPoint>,
    pub remote_control: bool,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Output of track segmentation
///
/// A link index `i` means a connector belongs between fix `i` and fix
/// `i + 1` of the original sequence, because the RC status switched or a
/// time gap broke the run there. The indexes are a set: each boundary gets
/// exactly one connector no matter how it was detected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentedTrack {
    pub segments: Vec<Segment>,
    pub link_indexes: BTreeSet<usize>,
}

impl SegmentedTrack {
    /// Total number of points across all segments
    pub fn total_points(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    /// All segment points flattened back into original order
    pub fn all_points(&self) -> Vec<TrackPoint> {
        self.segments
            .iter()
            .flat_map(|segment| segment.points.iter().copied())
            .collect()
    }
}
