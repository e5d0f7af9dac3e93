//! Mission waypoint CSV reading
//!
//! The current-mission export carries one waypoint per row with
//! `latitude`, `longitude` and `radius` columns.

use std::path::Path;

use crate::error::Result;
use crate::reader::{lookup_column, parse_field};
use crate::types::Waypoint;

/// Read mission waypoints from a current-mission CSV
pub fn read_mission_csv(path: &Path) -> Result<Vec<Waypoint>> {
    let mut reader = csv::Reader::from_path(path)?;
    let header = reader.headers()?.clone();

    let lat_col = lookup_column(&header, "latitude")?;
    let lon_col = lookup_column(&header, "longitude")?;
    let radius_col = lookup_column(&header, "radius")?;

    let mut waypoints = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = index + 2;

        waypoints.push(Waypoint {
            latitude: parse_field(&record, lat_col, row)?,
            longitude: parse_field(&record, lon_col, row)?,
            radius_m: parse_field(&record, radius_col, row)?,
        });
    }

    Ok(waypoints)
}
