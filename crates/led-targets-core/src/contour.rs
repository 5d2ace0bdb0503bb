//! Measurements on closed integer boundaries.
//!
//! A boundary is the ordered point sequence produced by a contour tracer;
//! the last point connects back to the first.

use nalgebra::Point2;

/// Ordered, implicitly closed boundary in pixel coordinates.
pub type Outline = Vec<Point2<i32>>;

/// Unsigned enclosed area of a closed polygon (shoelace formula).
pub fn polygon_area(points: &[Point2<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice = 0i64;
    for (k, p) in points.iter().enumerate() {
        let q = points[(k + 1) % points.len()];
        twice += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    twice.abs() as f64 * 0.5
}

/// Length of the closed polyline, including the closing segment.
pub fn closed_perimeter(points: &[Point2<i32>]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p, q)| {
            let dx = (q.x - p.x) as f64;
            let dy = (q.y - p.y) as f64;
            (dx * dx + dy * dy).sqrt()
        })
        .sum()
}

/// Arithmetic mean of the points (not area weighted).
pub fn mean_point(points: &[Point2<i32>]) -> Option<Point2<f32>> {
    if points.is_empty() {
        return None;
    }
    let (sx, sy) = points
        .iter()
        .fold((0i64, 0i64), |(sx, sy), p| (sx + p.x as i64, sy + p.y as i64));
    let n = points.len() as f64;
    Some(Point2::new((sx as f64 / n) as f32, (sy as f64 / n) as f32))
}

/// Median of the values, taking the upper middle element for even counts.
///
/// Sorts `values` in place.
pub fn upper_median(values: &mut [f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f32::total_cmp);
    Some(values[values.len() / 2])
}

/// Shift every point by `(dx, dy)`.
pub fn translate(points: &[Point2<i32>], dx: i32, dy: i32) -> Outline {
    points
        .iter()
        .map(|p| Point2::new(p.x + dx, p.y + dy))
        .collect()
}
