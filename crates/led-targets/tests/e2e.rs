#![cfg(feature = "image")]

mod common;

use approx::assert_abs_diff_eq;
use common::*;
use image::DynamicImage;
use led_targets::detect::{detect_leds, detect_leds_default, detect_leds_dynamic, ImageprocTracer};
use led_targets::{LedFinder, LedFinderParams};

#[test]
fn four_symmetric_disks_are_found() {
    let res = detect_leds_default(&four_leds()).expect("detect");
    assert!(res.found);
    assert_eq!(res.outlines.len(), 4);
    assert_eq!(res.leds.len(), 4);

    for (k, led) in res.leds.iter().enumerate() {
        assert_eq!(led.quadrant_index, k);
        let (ex, ey) = SYMMETRIC_CENTERS[k];
        assert_abs_diff_eq!(led.center.x, ex, epsilon = 1.0);
        assert_abs_diff_eq!(led.center.y, ey, epsilon = 1.0);
        // Traced digital disks stay close to the ideal circle score of 1.0.
        assert!(
            led.circularity >= 1.0 && led.circularity < 1.2,
            "circularity {}",
            led.circularity
        );
        assert_abs_diff_eq!(led.radius, 11.5, epsilon = 1.0);
        assert_abs_diff_eq!(led.distance_to_image_center, 50.0 * 2f32.sqrt(), epsilon = 1.0);
    }

    for (outline, (ex, ey)) in res.outlines.iter().zip(SYMMETRIC_CENTERS) {
        assert!(outline.len() >= 10);
        assert!(outline
            .iter()
            .all(|p| (p.x as f32 - ex).abs() <= 12.5 && (p.y as f32 - ey).abs() <= 12.5));
    }
}

#[test]
fn uniform_images_are_rejected() {
    for level in [0, 128, 255] {
        let res = detect_leds_default(&blank(level)).expect("detect");
        assert!(!res.found, "level {level}");
        assert!(res.outlines.is_empty());
        assert!(res.leds.is_empty());
    }
}

#[test]
fn three_lit_quadrants_are_rejected() {
    let mut img = blank(10);
    for c in &SYMMETRIC_CENTERS[..3] {
        fill_disk(&mut img, *c, 12.0, 255);
    }
    let res = detect_leds_default(&img).expect("detect");
    assert!(!res.found);
    assert!(res.outlines.is_empty());
    assert_eq!(res.num_candidates, 3);
    assert_eq!(res.num_clusters, 0);
}

#[test]
fn elongated_marker_is_rejected() {
    let mut img = blank(10);
    for c in &SYMMETRIC_CENTERS[..3] {
        fill_disk(&mut img, *c, 12.0, 255);
    }
    fill_ellipse(&mut img, SYMMETRIC_CENTERS[3], 30.0, 5.0, 255);

    let res = detect_leds_default(&img).expect("detect");
    assert!(!res.found);
    assert!(res.outlines.is_empty());
    // The ellipse survives triage and forms a full cluster, but fails acceptance.
    assert_eq!(res.num_clusters, 1);
}

#[test]
fn uneven_brightness_is_tolerated() {
    let mut img = blank(20);
    for (c, level) in SYMMETRIC_CENTERS.iter().zip([255, 140, 200, 170]) {
        fill_disk(&mut img, *c, 12.0, level);
    }
    let res = detect_leds_default(&img).expect("detect");
    assert!(res.found);
    assert_eq!(res.outlines.len(), 4);
}

#[test]
fn duplicate_in_quadrant_resolved_by_roundness() {
    let mut img = four_leds();
    // A square blob at a similar distance from the center, same quadrant.
    fill_rect(&mut img, 64, 24, 14, 14, 255);

    let res = detect_leds_default(&img).expect("detect");
    assert!(res.found);
    assert_eq!(res.num_candidates, 5);
    let tl = &res.leds[0];
    assert_eq!(tl.quadrant_index, 0);
    assert_abs_diff_eq!(tl.center.x, 50.0, epsilon = 1.0);
    assert_abs_diff_eq!(tl.center.y, 50.0, epsilon = 1.0);
}

#[test]
fn clutter_at_other_radius_does_not_interfere() {
    let mut img = four_leds();
    // Same brightness, close to the image center and far from the LED ring.
    fill_disk(&mut img, (80.0, 80.0), 6.0, 255);

    let res = detect_leds_default(&img).expect("detect");
    assert!(res.found);
    assert_abs_diff_eq!(res.leds[0].center.x, 50.0, epsilon = 1.0);
}

#[test]
fn detection_is_idempotent() {
    let img = four_leds();
    let finder = LedFinder::new(LedFinderParams::default()).expect("params");
    let view = led_targets::detect::gray_view(&img);
    let first = finder.detect(&view, &ImageprocTracer).expect("first");
    let second = finder.detect(&view, &ImageprocTracer).expect("second");
    assert!(first.found);
    assert_eq!(first, second);
}

#[test]
fn stricter_acceptance_rejects_digital_disks() {
    let params = LedFinderParams {
        max_accept_circularity: 1.05,
        ..LedFinderParams::default()
    };
    let res = detect_leds(&four_leds(), &params).expect("detect");
    assert!(!res.found);
    assert_eq!(res.num_clusters, 1);
}

#[test]
fn color_input_is_converted() {
    let img = DynamicImage::ImageLuma8(four_leds()).to_rgb8();
    let res = detect_leds_dynamic(&DynamicImage::ImageRgb8(img), &LedFinderParams::default())
        .expect("detect");
    assert!(res.found);
}
