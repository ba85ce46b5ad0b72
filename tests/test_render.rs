//! Tests for the results renderer: annotation geometry, the detections
//! table and the class-frequency aggregation/chart.

mod common;

use common::*;

use defectlens::render::{annotate, class_counts, render_class_chart, table_rows};
use image::{DynamicImage, Rgb, RgbImage, Rgba};

#[test]
fn bounding_box_corners_are_exact() {
    let det = make_detection("stain", 100.0, 50.0, 20.0, 10.0);
    assert_eq!(det.top_left(), (90.0, 45.0));
    assert_eq!(det.bottom_right(), (110.0, 55.0));
    assert_eq!(det.label_anchor(), (95.0, 50.0));
}

#[test]
fn corner_math_holds_for_every_detection_in_a_result() {
    let result = make_result(&["stain", "tear", "print_error", "stain"]);
    for det in &result.predictions {
        let (left, top) = det.top_left();
        let (right, bottom) = det.bottom_right();
        assert_eq!(left, det.x - det.width / 2.0);
        assert_eq!(top, det.y - det.height / 2.0);
        assert_eq!(right, det.x + det.width / 2.0);
        assert_eq!(bottom, det.y + det.height / 2.0);
        assert_eq!(det.label_anchor(), (left + 5.0, top + 5.0));
    }
}

#[test]
fn annotation_draws_the_box_outline() {
    let white = DynamicImage::ImageRgb8(RgbImage::from_pixel(200, 100, Rgb([255, 255, 255])));
    let result = InferenceResult {
        predictions: vec![make_detection("stain", 100.0, 50.0, 20.0, 10.0)],
    };

    let annotated = annotate(&white, &result);

    assert_eq!((annotated.width(), annotated.height()), (200, 100));
    let green = Rgba([0u8, 128u8, 0u8, 255u8]);
    // Outline corners of the (90,45)-(110,55) box.
    assert_eq!(*annotated.get_pixel(90, 45), green);
    assert_eq!(*annotated.get_pixel(109, 54), green);
    // Far away from the box nothing changes.
    assert_eq!(*annotated.get_pixel(5, 5), Rgba([255, 255, 255, 255]));
}

#[test]
fn annotation_without_detections_changes_nothing() {
    let white = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 64, Rgb([255, 255, 255])));
    let annotated = annotate(&white, &InferenceResult::default());
    assert_eq!(*annotated.get_pixel(32, 32), Rgba([255, 255, 255, 255]));
}

#[test]
fn table_rows_follow_response_order() {
    let result = make_result(&["stain", "tear"]);
    let rows = table_rows(&result);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].index, 0);
    assert_eq!(rows[1].index, 1);
    assert_eq!(rows[0].class, "stain");
    assert_eq!(rows[1].class, "tear");
    assert_eq!(
        rows[0].detection_id,
        result.predictions[0].detection_id.to_string()
    );
}

#[test]
fn table_formats_the_bounding_box() {
    let result = InferenceResult {
        predictions: vec![make_detection("stain", 100.0, 50.0, 20.0, 10.0)],
    };
    let rows = table_rows(&result);
    assert_eq!(rows[0].bounding_box, "(100, 50, 20, 10)");
}

#[test]
fn class_counts_aggregate_regardless_of_order() {
    let forward = class_counts(&make_result(&["stain", "stain", "tear"]));
    let backward = class_counts(&make_result(&["tear", "stain", "stain"]));

    let as_map = |counts: &[(String, usize)]| {
        let mut sorted: Vec<_> = counts.to_vec();
        sorted.sort();
        sorted
    };
    assert_eq!(as_map(&forward), as_map(&backward));
    assert_eq!(as_map(&forward), vec![
        ("stain".to_string(), 2),
        ("tear".to_string(), 1)
    ]);
}

#[test]
fn class_counts_display_in_first_occurrence_order() {
    let counts = class_counts(&make_result(&["tear", "stain", "stain"]));
    assert_eq!(counts, vec![
        ("tear".to_string(), 1),
        ("stain".to_string(), 2)
    ]);
}

#[test]
fn chart_draws_one_bar_per_class() {
    let counts = class_counts(&make_result(&["stain", "stain", "tear"]));
    let chart = render_class_chart(&counts);

    // Fixed width, height grows with the class count.
    assert_eq!(chart.width(), 640);
    assert_eq!(chart.height(), 152);

    let bar = Rgb([135u8, 206u8, 235u8]);
    let background = Rgb([255u8, 255u8, 255u8]);
    // First row: stain, the longest bar, spans the full plot width.
    assert_eq!(*chart.get_pixel(550, 60), bar);
    // Second row: tear, half the length.
    assert_eq!(*chart.get_pixel(300, 95), bar);
    assert_eq!(*chart.get_pixel(500, 95), background);
    // Left of the plot area stays clear of bars.
    assert_eq!(*chart.get_pixel(150, 60), background);
}

#[test]
fn chart_for_a_single_class_still_renders() {
    let chart = render_class_chart(&class_counts(&make_result(&["stain"])));
    assert_eq!(chart.height(), 116);
    assert_eq!(*chart.get_pixel(550, 60), Rgb([135u8, 206u8, 235u8]));
}
