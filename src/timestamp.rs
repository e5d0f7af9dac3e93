//! Log timestamp parsing
//!
//! ASPire log timestamps look like `2018-07-04_13:37:02.496` with an
//! optional fractional-second suffix. The fraction is discarded before
//! parsing: gap detection runs on whole-second resolution only.

use chrono::NaiveDateTime;

use crate::error::{Result, TrackError};

/// Timestamp layout after sub-second truncation
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

/// Parse a log timestamp, discarding any fractional-second suffix
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let whole_seconds = raw.split('.').next().unwrap_or(raw);
    NaiveDateTime::parse_from_str(whole_seconds, TIMESTAMP_FORMAT).map_err(|err| {
        TrackError::Parse {
            value: raw.to_string(),
            reason: format!("expected {} timestamp: {}", TIMESTAMP_FORMAT, err),
        }
    })
}
