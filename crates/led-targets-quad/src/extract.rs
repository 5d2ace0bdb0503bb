use led_targets_core::{binarize, GrayImageView, Outline};
use log::debug;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::params::LedFinderParams;
use crate::quadrant::Quadrant;
use crate::shape::{describe_boundaries, ShapeDescriptor};

/// Boundary tracing on a binary raster.
///
/// Implementations must return every closed boundary of the non-zero
/// pixels (outer borders and hole borders alike, no hierarchy) with all
/// traced points preserved, in the raster's own coordinates.
pub trait BoundaryTracer {
    fn trace(&self, binary: &GrayImageView<'_>) -> Vec<Outline>;
}

impl<F> BoundaryTracer for F
where
    F: Fn(&GrayImageView<'_>) -> Vec<Outline>,
{
    fn trace(&self, binary: &GrayImageView<'_>) -> Vec<Outline> {
        self(binary)
    }
}

/// Binarization threshold for a quadrant whose brightest pixel is `max_intensity`.
///
/// `round(threshold_frac * max_intensity)`, never below `min_threshold`.
pub fn adaptive_threshold(max_intensity: u8, params: &LedFinderParams) -> u8 {
    let scaled = (max_intensity as f32 * params.threshold_frac + 0.5).floor();
    scaled.clamp(0.0, 255.0).max(params.min_threshold as f32) as u8
}

/// Binarize one quadrant and trace its boundaries (quadrant-local coordinates).
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(image, tracer, params), fields(quadrant = quadrant.index))
)]
pub fn extract_boundaries<T: BoundaryTracer + ?Sized>(
    image: &GrayImageView<'_>,
    quadrant: &Quadrant,
    tracer: &T,
    params: &LedFinderParams,
) -> Vec<Outline> {
    let region = image.crop(quadrant.x0, quadrant.y0, quadrant.width, quadrant.height);
    if region.data.is_empty() {
        return Vec::new();
    }

    let max_intensity = region.view().max_intensity();
    let threshold = adaptive_threshold(max_intensity, params);
    let binary = binarize(&region.view(), threshold);
    if binary.data.iter().all(|&v| v > 0) {
        // No background left: the only boundary would be the quadrant frame.
        debug!(
            "quadrant {}: saturated at threshold {threshold}",
            quadrant.index
        );
        return Vec::new();
    }
    let boundaries = tracer.trace(&binary.view());
    debug!(
        "quadrant {}: max {max_intensity}, threshold {threshold}, {} boundaries",
        quadrant.index,
        boundaries.len()
    );
    boundaries
}

/// Candidate LEDs of one quadrant, in image coordinates.
pub fn quadrant_candidates<T: BoundaryTracer + ?Sized>(
    image: &GrayImageView<'_>,
    quadrant: &Quadrant,
    tracer: &T,
    params: &LedFinderParams,
) -> Vec<ShapeDescriptor> {
    let boundaries = extract_boundaries(image, quadrant, tracer, params);
    describe_boundaries(&boundaries, quadrant, params)
}
