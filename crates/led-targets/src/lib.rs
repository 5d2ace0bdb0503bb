//! High-level facade crate for the `led-targets-*` workspace.
//!
//! This crate provides:
//! - re-exports of the core primitives and the quadrant detector
//! - (feature-gated) end-to-end helpers that trace boundaries with
//!   `imageproc` and run the detector on an image or raw buffer.
//!
//! ## Quickstart
//!
//! ```no_run
//! use led_targets::detect;
//! use led_targets::LedFinderParams;
//! use image::ImageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = ImageReader::open("leds.png")?.decode()?.to_luma8();
//! let result = detect::detect_leds(&img, &LedFinderParams::default())?;
//! println!("{}", if result.found { "YES" } else { "NO" });
//! for outline in &result.outlines {
//!     println!("outline with {} points", outline.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `led_targets::core`: gray image views, binarization, contour measurements, logging.
//! - `led_targets::quad`: quadrant search, shape scoring, clustering and decision.
//! - `led_targets::detect` (feature `image`): end-to-end helpers from `image::GrayImage`.

pub use led_targets_core as core;
pub use led_targets_quad as quad;

pub use led_targets_core::{GrayImage, GrayImageView, Outline};
pub use led_targets_quad::{
    BoundaryTracer, LedDetectError, LedDetectionResult, LedFinder, LedFinderParams, LedMarker,
    ShapeDescriptor,
};

#[cfg(feature = "image")]
pub mod detect;
