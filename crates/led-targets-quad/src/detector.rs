use led_targets_core::GrayImageView;
use log::debug;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::cluster::{build_validated_clusters, cluster_gap, sort_by_distance};
use crate::decide::select_cluster;
use crate::error::LedDetectError;
use crate::extract::{quadrant_candidates, BoundaryTracer};
use crate::params::LedFinderParams;
use crate::quadrant::partition;
use crate::result::LedDetectionResult;
use crate::shape::ShapeDescriptor;

/// Four-LED constellation detector.
///
/// Stateless apart from its parameters: every call to [`LedFinder::detect`]
/// starts from scratch and returns its own result.
#[derive(Clone, Debug)]
pub struct LedFinder {
    params: LedFinderParams,
}

impl LedFinder {
    pub fn new(params: LedFinderParams) -> Result<Self, LedDetectError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// All candidates of the four quadrants, sorted by distance to the image center.
    pub fn candidates<T: BoundaryTracer + ?Sized>(
        &self,
        image: &GrayImageView<'_>,
        tracer: &T,
    ) -> Result<Vec<ShapeDescriptor>, LedDetectError> {
        check_image(image)?;
        let mut candidates: Vec<ShapeDescriptor> = partition(image.width, image.height)
            .iter()
            .flat_map(|q| quadrant_candidates(image, q, tracer, &self.params))
            .collect();
        sort_by_distance(&mut candidates);
        Ok(candidates)
    }

    /// Decide whether the image shows four LEDs, one per quadrant.
    ///
    /// A negative outcome is `Ok` with `found == false`; errors are only
    /// returned for malformed images.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, image, tracer), fields(width = image.width, height = image.height))
    )]
    pub fn detect<T: BoundaryTracer + ?Sized>(
        &self,
        image: &GrayImageView<'_>,
        tracer: &T,
    ) -> Result<LedDetectionResult, LedDetectError> {
        let candidates = self.candidates(image, tracer)?;
        let gap = cluster_gap(image.width, image.height, &self.params);
        let clusters = build_validated_clusters(&candidates, gap);
        debug!(
            "{} candidates, {} validated clusters (gap {gap})",
            candidates.len(),
            clusters.len()
        );

        let Some(chosen) =
            select_cluster(&clusters, &candidates, self.params.max_accept_circularity)
        else {
            return Ok(LedDetectionResult::not_found(
                candidates.len(),
                clusters.len(),
            ));
        };

        Ok(LedDetectionResult::accepted(
            chosen.members.iter().map(|&idx| &candidates[idx]),
            candidates.len(),
            clusters.len(),
        ))
    }
}

fn check_image(image: &GrayImageView<'_>) -> Result<(), LedDetectError> {
    if !image.is_consistent() {
        return Err(LedDetectError::InvalidBuffer {
            expected: image.width.saturating_mul(image.height),
            got: image.data.len(),
        });
    }
    if image.width < 2 || image.height < 2 {
        return Err(LedDetectError::ImageTooSmall {
            width: image.width,
            height: image.height,
        });
    }
    Ok(())
}
