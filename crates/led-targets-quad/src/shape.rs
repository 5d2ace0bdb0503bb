//! Per-candidate shape descriptors.
//!
//! Every traced boundary is reduced to a centroid, a robust radius and a
//! circularity score. Cheap filters on point count, circularity and radius
//! throw away noise before clustering.

use std::f64::consts::PI;

use led_targets_core::{
    closed_perimeter, mean_point, polygon_area, translate, upper_median, Outline,
};
use log::trace;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::params::LedFinderParams;
use crate::quadrant::Quadrant;

/// Scored LED candidate, in image coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    /// Traced boundary, kept for visualization.
    pub outline: Outline,
    /// 1.0 for a perfect circle, larger for irregular shapes.
    pub circularity: f32,
    /// Median distance from boundary points to `center`.
    pub radius: f32,
    /// Mean of the boundary points.
    pub center: Point2<f32>,
    pub distance_to_image_center: f32,
    pub quadrant_index: usize,
}

/// Why a boundary did not become a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeRejection {
    TooFewPoints { points: usize },
    ZeroArea,
    NotCircular { circularity: f32 },
    TooSmall { radius: f32 },
}

/// Squared ratio of the perimeter-implied radius to the area-implied radius.
///
/// `None` for zero (or negative) area.
pub fn circularity(perimeter: f64, area: f64) -> Option<f64> {
    if area <= 0.0 {
        return None;
    }
    let r_perimeter = perimeter / (2.0 * PI);
    Some(r_perimeter * r_perimeter * PI / area)
}

/// Score one boundary given in quadrant-local coordinates.
pub fn describe_boundary(
    boundary: &[Point2<i32>],
    quadrant: &Quadrant,
    params: &LedFinderParams,
) -> Result<ShapeDescriptor, ShapeRejection> {
    let points = boundary.len();
    if points < params.min_contour_points || points == 0 {
        return Err(ShapeRejection::TooFewPoints { points });
    }

    let area = polygon_area(boundary);
    let perimeter = closed_perimeter(boundary);
    let circularity = circularity(perimeter, area).ok_or(ShapeRejection::ZeroArea)? as f32;
    if circularity > params.max_triage_circularity {
        return Err(ShapeRejection::NotCircular { circularity });
    }

    let center = mean_point(boundary).ok_or(ShapeRejection::TooFewPoints { points })?;
    let mut distances: Vec<f32> = boundary
        .iter()
        .map(|p| ((p.x as f32 - center.x).powi(2) + (p.y as f32 - center.y).powi(2)).sqrt())
        .collect();
    let radius = upper_median(&mut distances).ok_or(ShapeRejection::TooFewPoints { points })?;
    if radius < params.min_radius {
        return Err(ShapeRejection::TooSmall { radius });
    }

    let (dx, dy) = quadrant.offset();
    let center = Point2::new(center.x + dx as f32, center.y + dy as f32);
    let distance_to_image_center = nalgebra::distance(&center, &quadrant.image_center());

    Ok(ShapeDescriptor {
        outline: translate(boundary, dx, dy),
        circularity,
        radius,
        center,
        distance_to_image_center,
        quadrant_index: quadrant.index,
    })
}

/// Score all boundaries of one quadrant, keeping the survivors in input order.
pub fn describe_boundaries(
    boundaries: &[Outline],
    quadrant: &Quadrant,
    params: &LedFinderParams,
) -> Vec<ShapeDescriptor> {
    boundaries
        .iter()
        .filter_map(|b| match describe_boundary(b, quadrant, params) {
            Ok(d) => Some(d),
            Err(reason) => {
                trace!("quadrant {}: rejected boundary: {reason:?}", quadrant.index);
                None
            }
        })
        .collect()
}
