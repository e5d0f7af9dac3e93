//! Track Plotter Library
//!
//! A Rust library for plotting ASPire GPS telemetry tracks. It reads the
//! CSV files produced by the log extraction step, splits the track into
//! segments by remote-control status and time gaps, derives a map
//! viewport from the plotted points, and drives a rendering sink.
//!
//! # Features
//!
//! - **`cli`** (default): Build the command-line binary
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Segment parsed fixes and inspect the breaks:
//! ```rust,no_run
//! use chrono::Duration;
//! use track_plotter::{read_gps_csv, segment_track, DEFAULT_MIN_SATELLITES};
//! use std::path::Path;
//!
//! let fixes = read_gps_csv(Path::new("gps.csv"), DEFAULT_MIN_SATELLITES).unwrap();
//! let track = segment_track(&fixes, Duration::seconds(30)).unwrap();
//! println!("{} segments, {} connectors", track.segments.len(), track.link_indexes.len());
//! ```
//!
//! Plot a full map to GeoJSON:
//! ```rust,no_run
//! use track_plotter::{plot_track, read_gps_csv, GeoJsonMap, MapSink, PlotOptions};
//! use std::path::Path;
//!
//! let fixes = read_gps_csv(Path::new("gps.csv"), 5).unwrap();
//! let mut sink = GeoJsonMap::new();
//! plot_track(&mut sink, &fixes, &[], &PlotOptions::default()).unwrap();
//! sink.save(Path::new("track.geojson")).unwrap();
//! ```
//!
//! # Public API
//!
//! ## Core Functions
//! - [`segment_track`] - Split fixes into status/time-gap segments
//! - [`estimate_zoom`] - Fit a bounding box into a pixel viewport
//! - [`centroid`] - Arithmetic-mean map center
//!
//! ## Readers
//! - [`read_gps_csv`] - GPS telemetry CSV to fixes
//! - [`read_mission_csv`] - Current-mission CSV to waypoints
//! - [`lookup_column`] - Resolve a column index by header name
//!
//! ## Rendering
//! - [`plot_track`] - Drive a [`MapSink`] with a full plot
//! - [`GeoJsonMap`] - GeoJSON FeatureCollection sink
//!
//! ## Data Types
//! - [`Fix`], [`TrackPoint`], [`Waypoint`]
//! - [`Segment`], [`SegmentedTrack`]
//! - [`Viewport`], [`PlotOptions`], [`PolylineStyle`]

// Module declarations
pub mod error;
pub mod reader;
pub mod render;
pub mod segmenter;
pub mod timestamp;
pub mod types;
pub mod zoom;

// Re-export the public surface for convenience
pub use error::{Result, TrackError};
pub use reader::{lookup_column, read_gps_csv, read_mission_csv, DEFAULT_MIN_SATELLITES};
pub use render::{
    plot_track, GeoJsonMap, MapSink, PlotOptions, PolylineStyle, LINK_COLOR, RC_OFF_COLOR,
    RC_ON_COLOR, TIME_MARKER_COLOR, WAYPOINT_COLOR,
};
pub use segmenter::{segment_track, DEFAULT_GAP_THRESHOLD_SECS};
pub use timestamp::{parse_timestamp, TIMESTAMP_FORMAT};
pub use types::{Fix, Segment, SegmentedTrack, TrackPoint, Waypoint};
pub use zoom::{centroid, estimate_zoom, Viewport, DEFAULT_ZOOM_MAX, LAT_RAD_OFFSET_DEG};
