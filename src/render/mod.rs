//! Map rendering abstraction
//!
//! The toolkit decides what to draw; where it ends up is a `MapSink`
//! concern. The shipped sink writes GeoJSON, tests use a recording sink.

pub mod geojson;
pub mod plot;

pub use geojson::GeoJsonMap;
pub use plot::{plot_track, PlotOptions};

use std::path::Path;

use crate::error::Result;
use crate::types::TrackPoint;

/// Route drawn while the remote control was engaged
pub const RC_ON_COLOR: &str = "#e67e22";
/// Route drawn while the vessel steered itself
pub const RC_OFF_COLOR: &str = "#2980b9";
/// Connector across a status switch or time gap
pub const LINK_COLOR: &str = "yellow";
/// Interval timestamp markers
pub const TIME_MARKER_COLOR: &str = "lightsalmon";
/// Mission waypoints, their radii and the path between them
pub const WAYPOINT_COLOR: &str = "crimson";

/// Stroke styling for a polyline
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineStyle {
    pub color: String,
    pub width: f64,
    pub opacity: f64,
    /// Close the line back to its first point
    pub closed: bool,
}

impl PolylineStyle {
    /// Opaque open stroke
    pub fn solid(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
            opacity: 1.0,
            closed: false,
        }
    }

    /// Translucent stroke used for gap and status-switch connectors
    pub fn link(color: &str, width: f64) -> Self {
        Self {
            opacity: 0.3,
            ..Self::solid(color, width)
        }
    }

    /// Opaque stroke closed into a ring
    pub fn ring(color: &str, width: f64) -> Self {
        Self {
            closed: true,
            ..Self::solid(color, width)
        }
    }
}

/// Sink accepting the drawing primitives a track plot needs
///
/// Calls arrive in no particular order except `save`, which is last.
pub trait MapSink {
    /// Center the map and set its initial zoom level
    fn init_map(&mut self, center: TrackPoint, zoom: u32);

    fn draw_polyline(&mut self, points: &[TrackPoint], style: &PolylineStyle);

    fn draw_marker(&mut self, point: TrackPoint, label: &str, color: &str);

    fn draw_circle(&mut self, center: TrackPoint, radius_m: f64, color: &str);

    /// Write everything drawn so far to `path`
    fn save(&self, path: &Path) -> Result<()>;
}
