use led_targets_core::Outline;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::shape::ShapeDescriptor;

/// Summary of one accepted LED.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedMarker {
    pub quadrant_index: usize,
    pub center: Point2<f32>,
    pub radius: f32,
    pub circularity: f32,
    pub distance_to_image_center: f32,
}

impl From<&ShapeDescriptor> for LedMarker {
    fn from(d: &ShapeDescriptor) -> Self {
        Self {
            quadrant_index: d.quadrant_index,
            center: d.center,
            radius: d.radius,
            circularity: d.circularity,
            distance_to_image_center: d.distance_to_image_center,
        }
    }
}

/// Outcome of one detection run.
///
/// `outlines` and `leds` hold exactly four entries, ordered by quadrant,
/// when `found` is set, and are empty otherwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedDetectionResult {
    pub found: bool,
    /// Accepted outlines in image coordinates.
    pub outlines: Vec<Outline>,
    pub leds: Vec<LedMarker>,
    /// Candidates that survived shape triage, over all quadrants.
    pub num_candidates: usize,
    /// Clusters that covered all four quadrants.
    pub num_clusters: usize,
}

impl LedDetectionResult {
    pub fn not_found(num_candidates: usize, num_clusters: usize) -> Self {
        Self {
            found: false,
            outlines: Vec::new(),
            leds: Vec::new(),
            num_candidates,
            num_clusters,
        }
    }

    /// Accepted result built from the chosen representatives.
    pub fn accepted<'a>(
        representatives: impl IntoIterator<Item = &'a ShapeDescriptor>,
        num_candidates: usize,
        num_clusters: usize,
    ) -> Self {
        let (outlines, leds) = representatives
            .into_iter()
            .map(|d| (d.outline.clone(), LedMarker::from(d)))
            .unzip();
        Self {
            found: true,
            outlines,
            leds,
            num_candidates,
            num_clusters,
        }
    }
}
