//! GeoJSON map sink
//!
//! Accumulates draw calls as GeoJSON features and writes one
//! FeatureCollection on save. Polylines carry simplestyle stroke
//! properties, markers and circles become Point features; the map center
//! and zoom ride along as foreign members of the collection so a viewer
//! can initialise itself without rescanning the features.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use serde_json::{json, Value};

use crate::error::Result;
use crate::render::{MapSink, PolylineStyle};
use crate::types::TrackPoint;

/// GeoJSON-writing `MapSink`
#[derive(Debug, Default)]
pub struct GeoJsonMap {
    features: Vec<Value>,
    center: Option<TrackPoint>,
    zoom: Option<u32>,
}

impl GeoJsonMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of features accumulated so far
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// The full FeatureCollection as a JSON value
    pub fn to_value(&self) -> Value {
        let mut collection = json!({
            "type": "FeatureCollection",
            "features": self.features,
        });
        if let Some(center) = self.center {
            collection["center"] = json!([center.longitude, center.latitude]);
        }
        if let Some(zoom) = self.zoom {
            collection["zoom"] = json!(zoom);
        }
        collection
    }
}

/// GeoJSON wants [longitude, latitude] coordinate order
fn coordinates(points: &[TrackPoint]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.longitude, p.latitude]).collect()
}

impl MapSink for GeoJsonMap {
    fn init_map(&mut self, center: TrackPoint, zoom: u32) {
        self.center = Some(center);
        self.zoom = Some(zoom);
    }

    fn draw_polyline(&mut self, points: &[TrackPoint], style: &PolylineStyle) {
        let mut coords = coordinates(points);
        if style.closed {
            if let Some(&first) = coords.first() {
                coords.push(first);
            }
        }
        self.features.push(json!({
            "type": "Feature",
            "properties": {
                "stroke": style.color,
                "stroke-width": style.width,
                "stroke-opacity": style.opacity,
            },
            "geometry": {
                "type": "LineString",
                "coordinates": coords,
            },
        }));
    }

    fn draw_marker(&mut self, point: TrackPoint, label: &str, color: &str) {
        self.features.push(json!({
            "type": "Feature",
            "properties": {
                "title": label,
                "marker-color": color,
            },
            "geometry": {
                "type": "Point",
                "coordinates": [point.longitude, point.latitude],
            },
        }));
    }

    fn draw_circle(&mut self, center: TrackPoint, radius_m: f64, color: &str) {
        self.features.push(json!({
            "type": "Feature",
            "properties": {
                "marker-color": color,
                "radius_m": radius_m,
            },
            "geometry": {
                "type": "Point",
                "coordinates": [center.longitude, center.latitude],
            },
        }));
    }

    fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.to_value()).map_err(io::Error::from)?;
        Ok(())
    }
}
