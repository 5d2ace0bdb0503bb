#![allow(dead_code)]

use image::{GrayImage, Luma};

pub const SIZE: u32 = 200;

/// LED centers at equal radius, one per quadrant (TL, TR, BL, BR).
pub const SYMMETRIC_CENTERS: [(f32, f32); 4] =
    [(50.0, 50.0), (150.0, 50.0), (50.0, 150.0), (150.0, 150.0)];

/// Uniform image of the given gray level.
pub fn blank(level: u8) -> GrayImage {
    GrayImage::from_pixel(SIZE, SIZE, Luma([level]))
}

/// Paint an axis-aligned filled ellipse.
pub fn fill_ellipse(img: &mut GrayImage, (cx, cy): (f32, f32), rx: f32, ry: f32, level: u8) {
    for y in 0..img.height() {
        for x in 0..img.width() {
            let dx = (x as f32 - cx) / rx;
            let dy = (y as f32 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                img.put_pixel(x, y, Luma([level]));
            }
        }
    }
}

pub fn fill_disk(img: &mut GrayImage, center: (f32, f32), r: f32, level: u8) {
    fill_ellipse(img, center, r, r, level);
}

pub fn fill_rect(img: &mut GrayImage, x0: u32, y0: u32, w: u32, h: u32, level: u8) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            img.put_pixel(x, y, Luma([level]));
        }
    }
}

/// Four bright disks of radius 12 on a dark background.
pub fn four_leds() -> GrayImage {
    let mut img = blank(10);
    for c in SYMMETRIC_CENTERS {
        fill_disk(&mut img, c, 12.0, 255);
    }
    img
}
