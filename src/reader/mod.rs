//! CSV record sources
//!
//! Turns the extracted telemetry CSVs into in-memory fixes and waypoints.
//! Column positions are resolved by header name up front, so a missing
//! column fails the run before any row is processed.

pub mod columns;
pub mod gps;
pub mod mission;

pub use columns::lookup_column;
pub use gps::{read_gps_csv, DEFAULT_MIN_SATELLITES};
pub use mission::read_mission_csv;

use std::fmt;
use std::str::FromStr;

use csv::StringRecord;

use crate::error::{Result, TrackError};

/// Fetch one field of a record, failing with the row number on ragged rows
pub(crate) fn field<'r>(record: &'r StringRecord, index: usize, row: usize) -> Result<&'r str> {
    record.get(index).ok_or_else(|| TrackError::Parse {
        value: format!("row {}", row),
        reason: format!("field {} missing from record", index),
    })
}

/// Parse one field of a record into `T`, failing with the offending value
pub(crate) fn parse_field<T>(record: &StringRecord, index: usize, row: usize) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = field(record, index, row)?;
    raw.trim().parse().map_err(|err: T::Err| TrackError::Parse {
        value: raw.to_string(),
        reason: format!("row {}: {}", row, err),
    })
}
