use crate::core::{GrayImageView, Outline};
use crate::quad::{BoundaryTracer, LedDetectError, LedDetectionResult, LedFinder, LedFinderParams};
use imageproc::contours::find_contours;
use nalgebra::Point2;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("invalid grayscale image buffer length (expected {expected} bytes, got {got})")]
    InvalidGrayBuffer { expected: usize, got: usize },

    #[error("invalid grayscale image dimensions (width={width}, height={height})")]
    InvalidGrayDimensions { width: u32, height: u32 },

    #[error(transparent)]
    Led(#[from] LedDetectError),
}

/// Boundary tracer backed by `imageproc`'s border following.
///
/// Outer borders and hole borders are both returned; the parent links are
/// dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageprocTracer;

impl BoundaryTracer for ImageprocTracer {
    fn trace(&self, binary: &GrayImageView<'_>) -> Vec<Outline> {
        let Some(img) = ::image::GrayImage::from_raw(
            binary.width as u32,
            binary.height as u32,
            binary.data.to_vec(),
        ) else {
            return Vec::new();
        };
        find_contours::<i32>(&img)
            .into_iter()
            .map(|c| c.points.into_iter().map(|p| Point2::new(p.x, p.y)).collect())
            .collect()
    }
}

/// Convert an `image::GrayImage` into the lightweight `led-targets-core` view type.
pub fn gray_view(img: &::image::GrayImage) -> GrayImageView<'_> {
    GrayImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Run the LED detector end-to-end on a grayscale image.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, params), fields(width = img.width(), height = img.height()))
)]
pub fn detect_leds(
    img: &::image::GrayImage,
    params: &LedFinderParams,
) -> Result<LedDetectionResult, DetectError> {
    let finder = LedFinder::new(params.clone())?;
    Ok(finder.detect(&gray_view(img), &ImageprocTracer)?)
}

/// Convenience overload using `LedFinderParams::default()`.
pub fn detect_leds_default(img: &::image::GrayImage) -> Result<LedDetectionResult, DetectError> {
    detect_leds(img, &LedFinderParams::default())
}

/// Convert any decoded image to 8-bit luma and run the detector.
pub fn detect_leds_dynamic(
    img: &::image::DynamicImage,
    params: &LedFinderParams,
) -> Result<LedDetectionResult, DetectError> {
    detect_leds(&img.to_luma8(), params)
}

/// Build an `image::GrayImage` from a raw grayscale buffer.
pub fn gray_image_from_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<::image::GrayImage, DetectError> {
    let w = usize::try_from(width).ok();
    let h = usize::try_from(height).ok();
    let Some((w, h)) = w.zip(h) else {
        return Err(DetectError::InvalidGrayDimensions { width, height });
    };
    let Some(expected) = w.checked_mul(h) else {
        return Err(DetectError::InvalidGrayDimensions { width, height });
    };
    if pixels.len() != expected {
        return Err(DetectError::InvalidGrayBuffer {
            expected,
            got: pixels.len(),
        });
    }
    ::image::GrayImage::from_raw(width, height, pixels.to_vec())
        .ok_or(DetectError::InvalidGrayDimensions { width, height })
}

pub fn detect_leds_from_gray_u8(
    width: u32,
    height: u32,
    pixels: &[u8],
    params: &LedFinderParams,
) -> Result<LedDetectionResult, DetectError> {
    let img = gray_image_from_slice(width, height, pixels)?;
    detect_leds(&img, params)
}
