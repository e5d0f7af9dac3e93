//! GPS telemetry CSV reading
//!
//! Expects the column layout produced by the log extraction step:
//! `t_timestamp`, `latitude`, `longitude`, `satellites_used`, `rc_on`.
//! Rows below the satellite threshold are dropped; anything else that
//! fails to parse aborts the read.

use std::path::Path;

use crate::error::Result;
use crate::reader::{field, lookup_column, parse_field};
use crate::timestamp::parse_timestamp;
use crate::types::Fix;

/// Fixes with fewer satellites in view are considered unreliable
pub const DEFAULT_MIN_SATELLITES: u32 = 5;

/// Read GPS fixes from a telemetry CSV, dropping low-quality rows
pub fn read_gps_csv(path: &Path, min_satellites: u32) -> Result<Vec<Fix>> {
    let mut reader = csv::Reader::from_path(path)?;
    let header = reader.headers()?.clone();

    let time_col = lookup_column(&header, "t_timestamp")?;
    let lat_col = lookup_column(&header, "latitude")?;
    let lon_col = lookup_column(&header, "longitude")?;
    let sat_col = lookup_column(&header, "satellites_used")?;
    let rc_col = lookup_column(&header, "rc_on")?;

    let mut fixes = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = index + 2; // 1-based, after the header line

        let satellites: u32 = parse_field(&record, sat_col, row)?;
        if satellites < min_satellites {
            continue;
        }

        // rc_on is logged as 0.0/1.0, anything non-zero counts as engaged
        let rc_raw: f64 = parse_field(&record, rc_col, row)?;

        fixes.push(Fix {
            timestamp: parse_timestamp(field(&record, time_col, row)?)?,
            latitude: parse_field(&record, lat_col, row)?,
            longitude: parse_field(&record, lon_col, row)?,
            remote_control: rc_raw != 0.0,
        });
    }

    Ok(fixes)
}
