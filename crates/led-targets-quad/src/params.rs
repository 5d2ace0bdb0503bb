use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::LedDetectError;

/// Tunables of the LED constellation detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedFinderParams {
    /// Binarization threshold as a fraction of the quadrant's brightest pixel.
    pub threshold_frac: f32,
    /// Lower clamp on the binarization threshold, keeps dark quadrants empty.
    pub min_threshold: u8,
    /// Boundaries with fewer traced points are discarded.
    pub min_contour_points: usize,
    /// Coarse triage: candidates above this circularity are discarded early.
    pub max_triage_circularity: f32,
    /// Minimum median radius in pixels.
    pub min_radius: f32,
    /// Cluster gap is `min(width, height) / cluster_divisor` (integer division).
    pub cluster_divisor: usize,
    /// Final acceptance: every representative must score strictly below this.
    pub max_accept_circularity: f32,
}

impl Default for LedFinderParams {
    fn default() -> Self {
        Self {
            threshold_frac: 0.8,
            min_threshold: 127,
            min_contour_points: 10,
            max_triage_circularity: 5.0,
            min_radius: 5.0,
            cluster_divisor: 7,
            max_accept_circularity: 2.0,
        }
    }
}

impl LedFinderParams {
    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), LedDetectError> {
        if !(self.threshold_frac > 0.0 && self.threshold_frac <= 1.0) {
            return Err(LedDetectError::InvalidParams(format!(
                "threshold_frac must be in (0, 1], got {}",
                self.threshold_frac
            )));
        }
        if self.cluster_divisor == 0 {
            return Err(LedDetectError::InvalidParams(
                "cluster_divisor must be positive".to_string(),
            ));
        }
        for (name, value) in [
            ("max_triage_circularity", self.max_triage_circularity),
            ("max_accept_circularity", self.max_accept_circularity),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LedDetectError::InvalidParams(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        if !self.min_radius.is_finite() || self.min_radius < 0.0 {
            return Err(LedDetectError::InvalidParams(format!(
                "min_radius must be finite and non-negative, got {}",
                self.min_radius
            )));
        }
        if self.max_accept_circularity > self.max_triage_circularity {
            warn!(
                "acceptance circularity {} is looser than triage {}; triage decides",
                self.max_accept_circularity, self.max_triage_circularity
            );
        }
        Ok(())
    }
}
