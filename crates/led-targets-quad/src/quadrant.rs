use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Number of quadrants a constellation must cover.
pub const QUADRANT_COUNT: usize = 4;

/// One quarter of the image searched independently.
///
/// Index order: 0 top-left, 1 top-right, 2 bottom-left, 3 bottom-right.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Quadrant {
    pub index: usize,
    /// Top-left pixel of the quadrant in image coordinates.
    pub x0: usize,
    pub y0: usize,
    pub width: usize,
    pub height: usize,
    /// Image center expressed in quadrant-local coordinates.
    pub center_local: Point2<i32>,
}

impl Quadrant {
    /// Offset that maps quadrant-local points to image coordinates.
    #[inline]
    pub fn offset(&self) -> (i32, i32) {
        (self.x0 as i32, self.y0 as i32)
    }

    /// Image center in image coordinates.
    pub fn image_center(&self) -> Point2<f32> {
        let (dx, dy) = self.offset();
        Point2::new(
            (self.center_local.x + dx) as f32,
            (self.center_local.y + dy) as f32,
        )
    }
}

/// Split a `width` x `height` image into four equally sized quadrants.
///
/// Each quadrant is `width / 2` x `height / 2`; for odd sizes the last
/// column/row is not covered. The image center is `(width / 2, height / 2)`.
pub fn partition(width: usize, height: usize) -> [Quadrant; QUADRANT_COUNT] {
    let hw = width / 2;
    let hh = height / 2;
    let (cx, cy) = (hw as i32, hh as i32);
    let origins = [(0, 0), (hw, 0), (0, hh), (hw, hh)];

    let mut out = [Quadrant {
        index: 0,
        x0: 0,
        y0: 0,
        width: hw,
        height: hh,
        center_local: Point2::new(cx, cy),
    }; QUADRANT_COUNT];

    for (index, (q, &(x0, y0))) in out.iter_mut().zip(origins.iter()).enumerate() {
        q.index = index;
        q.x0 = x0;
        q.y0 = y0;
        q.center_local = Point2::new(cx - x0 as i32, cy - y0 as i32);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrants_tile_even_image() {
        let qs = partition(200, 100);
        let origins: Vec<_> = qs.iter().map(|q| (q.x0, q.y0)).collect();
        assert_eq!(origins, vec![(0, 0), (100, 0), (0, 50), (100, 50)]);
        for (k, q) in qs.iter().enumerate() {
            assert_eq!(q.index, k);
            assert_eq!((q.width, q.height), (100, 50));
        }
    }

    #[test]
    fn local_center_maps_to_image_center() {
        for q in partition(201, 99) {
            let c = q.image_center();
            assert_eq!((c.x, c.y), (100.0, 49.0));
        }
        let qs = partition(200, 100);
        assert_eq!(qs[0].center_local, Point2::new(100, 50));
        assert_eq!(qs[1].center_local, Point2::new(0, 50));
        assert_eq!(qs[2].center_local, Point2::new(100, 0));
        assert_eq!(qs[3].center_local, Point2::new(0, 0));
    }
}
