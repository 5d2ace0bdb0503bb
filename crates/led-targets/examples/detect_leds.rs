//! Detect a four-LED constellation in an image file.
//!
//! Usage: `detect_leds <image_path> [params.json] [report.json]`
//!
//! Prints `YES` or `NO` and writes a JSON report with the accepted outlines.

use std::{env, fs, path::PathBuf};

use image::ImageReader;
use led_targets::detect::detect_leds_dynamic;
use led_targets::{LedDetectionResult, LedFinderParams};
use serde::Serialize;

#[cfg(not(feature = "tracing"))]
use log::{info, LevelFilter};

#[cfg(feature = "tracing")]
use tracing::info;

#[cfg(feature = "tracing")]
use led_targets::core::init_tracing;
#[cfg(not(feature = "tracing"))]
use led_targets::core::init_with_level;

#[derive(Debug, Serialize)]
struct ExampleReport {
    image_path: String,
    params: LedFinderParams,
    detection: LedDetectionResult,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(feature = "tracing"))]
    init_with_level(LevelFilter::Info)?;

    #[cfg(feature = "tracing")]
    init_tracing(false);

    run()
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let Some(image_path) = args.next() else {
        eprintln!("Usage: detect_leds <image_path> [params.json] [report.json]");
        return Ok(());
    };
    let params = match args.next() {
        Some(path) => load_params(&PathBuf::from(path))?,
        None => LedFinderParams::default(),
    };
    let report_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tmpdata/detect_leds_report.json"));

    let img = ImageReader::open(&image_path)?.decode()?;
    info!("loaded {image_path}: {}x{}", img.width(), img.height());

    let detection = detect_leds_dynamic(&img, &params)?;
    info!(
        "{} candidates, {} full clusters",
        detection.num_candidates, detection.num_clusters
    );
    println!("{}", if detection.found { "YES" } else { "NO" });

    write_report(
        &report_path,
        &ExampleReport {
            image_path,
            params,
            detection,
        },
    )
}

fn load_params(path: &PathBuf) -> Result<LedFinderParams, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn write_report(path: &PathBuf, report: &ExampleReport) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    info!("wrote report JSON to {}", path.display());
    Ok(())
}
