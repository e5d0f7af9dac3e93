//! Track plotting driver
//!
//! Turns fixes, waypoints and plotting options into sink calls: one
//! polyline per segment coloured by RC status, a translucent connector per
//! link index, interval timestamp markers, and the mission overlay.

use chrono::Duration;

use crate::error::Result;
use crate::render::{
    MapSink, PolylineStyle, LINK_COLOR, RC_OFF_COLOR, RC_ON_COLOR, TIME_MARKER_COLOR,
    WAYPOINT_COLOR,
};
use crate::segmenter::{segment_track, DEFAULT_GAP_THRESHOLD_SECS};
use crate::timestamp::TIMESTAMP_FORMAT;
use crate::types::{Fix, SegmentedTrack, TrackPoint, Waypoint};
use crate::zoom::{centroid, estimate_zoom, Viewport, DEFAULT_ZOOM_MAX};

/// Stroke width shared by route, connector and waypoint polylines
const EDGE_WIDTH: f64 = 2.0;

/// Options controlling the plot
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Place a timestamp marker every this many fixes, 0 disables markers
    pub marker_interval: usize,
    pub gap_threshold: Duration,
    pub viewport: Viewport,
    pub zoom_max: u32,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            marker_interval: 0,
            gap_threshold: Duration::seconds(DEFAULT_GAP_THRESHOLD_SECS),
            viewport: Viewport::default(),
            zoom_max: DEFAULT_ZOOM_MAX,
        }
    }
}

/// Plot a telemetry track and mission overlay into `sink`
///
/// Returns the segmented track so callers can report segment and
/// connector counts. The sink is not saved; that stays with the caller.
pub fn plot_track(
    sink: &mut dyn MapSink,
    fixes: &[Fix],
    waypoints: &[Waypoint],
    options: &PlotOptions,
) -> Result<SegmentedTrack> {
    let track = segment_track(fixes, options.gap_threshold)?;

    let points: Vec<TrackPoint> = fixes.iter().map(Fix::point).collect();
    let center = centroid(&points)?;
    let zoom = estimate_zoom(&points, options.viewport, options.zoom_max)?;
    sink.init_map(center, zoom);

    for segment in &track.segments {
        let color = if segment.remote_control {
            RC_ON_COLOR
        } else {
            RC_OFF_COLOR
        };
        sink.draw_polyline(&segment.points, &PolylineStyle::solid(color, EDGE_WIDTH));
    }

    // Connectors read as breaks, not travelled path, hence the low opacity
    let link_style = PolylineStyle::link(LINK_COLOR, EDGE_WIDTH);
    for &index in &track.link_indexes {
        sink.draw_polyline(&[points[index], points[index + 1]], &link_style);
    }

    if options.marker_interval > 0 {
        for fix in fixes.iter().step_by(options.marker_interval) {
            let label = format!(
                "{} {} {}",
                fix.timestamp.format(TIMESTAMP_FORMAT),
                fix.latitude,
                fix.longitude
            );
            sink.draw_marker(fix.point(), &label, TIME_MARKER_COLOR);
        }
    }

    for (number, waypoint) in waypoints.iter().enumerate() {
        let label = format!(
            "WAYPOINT {} {} {} {}",
            number, waypoint.latitude, waypoint.longitude, waypoint.radius_m
        );
        sink.draw_marker(waypoint.point(), &label, WAYPOINT_COLOR);
        sink.draw_circle(waypoint.point(), waypoint.radius_m, WAYPOINT_COLOR);
    }
    if !waypoints.is_empty() {
        let route: Vec<TrackPoint> = waypoints.iter().map(Waypoint::point).collect();
        sink.draw_polyline(&route, &PolylineStyle::ring(WAYPOINT_COLOR, EDGE_WIDTH));
    }

    Ok(track)
}
