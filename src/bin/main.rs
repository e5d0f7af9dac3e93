//! CLI binary for Track Plotter
//!
//! Reads an extracted GPS telemetry CSV (and optionally a current-mission
//! CSV), segments the track by RC status and time gaps, and writes a
//! GeoJSON map.

use anyhow::{bail, Context, Result};
use chrono::Duration;
use clap::{Arg, Command};
use std::path::PathBuf;
use track_plotter::{
    plot_track, read_gps_csv, read_mission_csv, GeoJsonMap, MapSink, PlotOptions,
    DEFAULT_GAP_THRESHOLD_SECS, DEFAULT_MIN_SATELLITES,
};

/// Below this interval the markers cluster badly on a dense track
const LOW_MARKER_INTERVAL: usize = 35;

fn main() -> Result<()> {
    let matches = Command::new("Track Plotter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plot ASPire GPS telemetry tracks from extracted CSV logs to GeoJSON maps.")
        .arg(
            Arg::new("gps-csv")
                .help("GPS CSV with t_timestamp, latitude, longitude, satellites_used and rc_on columns")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("mission")
                .long("mission")
                .help("Current-mission CSV with latitude, longitude and radius columns")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("marker-interval")
                .long("marker-interval")
                .help("Place a timestamp marker every N fixes (0 disables markers)")
                .value_name("N")
                .default_value("0")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("min-satellites")
                .long("min-satellites")
                .help("Drop fixes with fewer satellites in view")
                .value_name("N")
                .default_value(DEFAULT_MIN_SATELLITES.to_string())
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("gap-seconds")
                .long("gap-seconds")
                .help("Break the track where consecutive fixes are further apart than this")
                .value_name("SECONDS")
                .default_value(DEFAULT_GAP_THRESHOLD_SECS.to_string())
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output GeoJSON file")
                .value_name("FILE")
                .default_value("track.geojson"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Print segmentation and viewport details")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let gps_csv = PathBuf::from(matches.get_one::<String>("gps-csv").unwrap());
    let mission = matches.get_one::<String>("mission").map(PathBuf::from);
    let marker_interval = *matches.get_one::<usize>("marker-interval").unwrap();
    let min_satellites = *matches.get_one::<u32>("min-satellites").unwrap();
    let gap_seconds = *matches.get_one::<i64>("gap-seconds").unwrap();
    let output = PathBuf::from(matches.get_one::<String>("output").unwrap());
    let debug = matches.get_flag("debug");

    if marker_interval > 0 && marker_interval < LOW_MARKER_INTERVAL {
        eprintln!("Warning: low marker interval may cause overdensity and a sluggish map");
    }

    let fixes = read_gps_csv(&gps_csv, min_satellites)
        .with_context(|| format!("Failed to read GPS CSV {gps_csv:?}"))?;
    if fixes.is_empty() {
        bail!(
            "No fixes with at least {min_satellites} satellites in {gps_csv:?}; \
             nothing to plot"
        );
    }
    if debug {
        println!(
            "Read {} fixes from {} (satellite threshold {})",
            fixes.len(),
            gps_csv.display(),
            min_satellites
        );
    }

    let waypoints = match &mission {
        Some(path) => read_mission_csv(path)
            .with_context(|| format!("Failed to read mission CSV {path:?}"))?,
        None => Vec::new(),
    };
    if debug && !waypoints.is_empty() {
        println!("Read {} mission waypoints", waypoints.len());
    }

    let options = PlotOptions {
        marker_interval,
        gap_threshold: Duration::seconds(gap_seconds),
        ..PlotOptions::default()
    };

    let mut sink = GeoJsonMap::new();
    let track = plot_track(&mut sink, &fixes, &waypoints, &options)
        .context("Failed to plot the track")?;
    if debug {
        println!(
            "{} segments covering {} points, {} connectors, {} features",
            track.segments.len(),
            track.total_points(),
            track.link_indexes.len(),
            sink.feature_count()
        );
    }

    sink.save(&output)
        .with_context(|| format!("Failed to write map file {output:?}"))?;
    println!("Map creation successful: {}", output.display());

    Ok(())
}
