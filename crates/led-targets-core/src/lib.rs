//! Core raster and contour primitives for LED constellation detection.
//!
//! This crate is small and free of any concrete image or contour-tracing
//! library. Detectors build on the types here and receive traced boundaries
//! from an external tracer.

mod contour;
mod image;
mod logger;

pub use contour::{closed_perimeter, mean_point, polygon_area, translate, upper_median, Outline};
pub use image::{binarize, GrayImage, GrayImageView};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
