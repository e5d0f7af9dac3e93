//! Map viewport derivation
//!
//! Computes the centroid of the displayed points and an integer zoom
//! level fitting their bounding box into a pixel viewport, using the
//! standard Web-Mercator viewport-fit heuristic: at zoom 0 the whole
//! world occupies a 256 x 256 pixel tile, and each zoom step doubles it.

use std::f64::consts::PI;

use crate::error::{Result, TrackError};
use crate::types::TrackPoint;

/// Pixel size of the world tile at zoom level 0
const WORLD_TILE_PX: f64 = 256.0;

/// Offset in degrees added to latitudes before the Mercator transform.
/// Carried over from the heuristic this formula reproduces; keeping it
/// keeps zoom output comparable with maps produced so far. Revisit before
/// reusing the transform anywhere else.
pub const LAT_RAD_OFFSET_DEG: f64 = PI / 180.0;

/// Largest zoom level the estimator will return
pub const DEFAULT_ZOOM_MAX: u32 = 21;

/// Target map viewport in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub height_px: u32,
    pub width_px: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            height_px: 900,
            width_px: 1900,
        }
    }
}

/// Arithmetic mean of the points, used as the map center
///
/// # Errors
/// `InvalidInput` when `points` is empty.
pub fn centroid(points: &[TrackPoint]) -> Result<TrackPoint> {
    if points.is_empty() {
        return Err(TrackError::InvalidInput(
            "no points to center the map on".to_string(),
        ));
    }
    let count = points.len() as f64;
    let lat_sum: f64 = points.iter().map(|p| p.latitude).sum();
    let lon_sum: f64 = points.iter().map(|p| p.longitude).sum();
    Ok(TrackPoint::new(lat_sum / count, lon_sum / count))
}

/// Mercator latitude transform, clamped to one world height
fn lat_rad(lat: f64) -> f64 {
    let sinus = (lat + LAT_RAD_OFFSET_DEG).to_radians().sin();
    let rad_2 = ((1.0 + sinus) / (1.0 - sinus)).ln() / 2.0;
    rad_2.clamp(-PI, PI) / 2.0
}

/// Estimate the zoom level fitting the points' bounding box into the
/// viewport
///
/// Returns `min(zoom_lat, zoom_lon, zoom_max)`, never below 0. A
/// degenerate bounding box (all points on one latitude or one longitude)
/// leaves nothing to fit and falls back to `zoom_max` instead of failing
/// the whole plot.
///
/// # Errors
/// `InvalidInput` when `points` is empty.
pub fn estimate_zoom(points: &[TrackPoint], viewport: Viewport, zoom_max: u32) -> Result<u32> {
    if points.is_empty() {
        return Err(TrackError::InvalidInput(
            "no points to derive a zoom level from".to_string(),
        ));
    }

    let mut min_lat = f64::MAX;
    let mut max_lat = f64::MIN;
    let mut min_lon = f64::MAX;
    let mut max_lon = f64::MIN;
    for point in points {
        min_lat = min_lat.min(point.latitude);
        max_lat = max_lat.max(point.latitude);
        min_lon = min_lon.min(point.longitude);
        max_lon = max_lon.max(point.longitude);
    }

    let diff_lon = max_lon - min_lon;
    let fraction_lon = if diff_lon < 0.0 {
        // Antimeridian wraparound, not expected in this domain
        (diff_lon + 360.0) / 360.0
    } else {
        diff_lon / 360.0
    };
    let fraction_lat = (lat_rad(max_lat) - lat_rad(min_lat)) / PI;

    if fraction_lat <= 0.0 || fraction_lon <= 0.0 {
        return Ok(zoom_max);
    }

    let zoom_lat = (viewport.height_px as f64 / WORLD_TILE_PX / fraction_lat)
        .log2()
        .floor();
    let zoom_lon = (viewport.width_px as f64 / WORLD_TILE_PX / fraction_lon)
        .log2()
        .floor();

    let zoom = zoom_lat.min(zoom_lon).min(zoom_max as f64).max(0.0);
    Ok(zoom as u32)
}
