use ab_glyph::PxScale;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use super::label_font;
use crate::models::InferenceResult;

const CHART_WIDTH: u32 = 640;
const LABEL_COL: u32 = 160;
const RIGHT_PAD: u32 = 70;
const ROW_HEIGHT: u32 = 36;
const BAR_HEIGHT: u32 = 22;
const TOP_MARGIN: u32 = 44;
const BOTTOM_MARGIN: u32 = 36;

const BACKGROUND: Rgb<u8> = Rgb([255u8, 255u8, 255u8]);
const TEXT_COLOR: Rgb<u8> = Rgb([30u8, 30u8, 30u8]);
const BAR_COLOR: Rgb<u8> = Rgb([135u8, 206u8, 235u8]);

/// Count occurrences per distinct class label, preserving the order of each
/// class's first appearance in the result.
pub fn class_counts(result: &InferenceResult) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for det in &result.predictions {
        if let Some(entry) = counts.iter_mut().find(|(name, _)| *name == det.class) {
            entry.1 += 1;
        } else {
            counts.push((det.class.clone(), 1));
        }
    }
    counts
}

/// Render the class counts as a horizontal bar chart: one bar per distinct
/// class, longest bar scaled to the plot width, counts printed at bar ends.
pub fn render_class_chart(counts: &[(String, usize)]) -> RgbImage {
    let rows = counts.len() as u32;
    let height = TOP_MARGIN + rows * ROW_HEIGHT + BOTTOM_MARGIN;
    let mut canvas = RgbImage::from_pixel(CHART_WIDTH, height, BACKGROUND);
    let font = label_font();

    draw_text_mut(
        &mut canvas,
        TEXT_COLOR,
        LABEL_COL as i32,
        10,
        PxScale::from(20.0),
        font,
        "Occurrences of Defect Classes",
    );

    let max_count = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let plot_width = CHART_WIDTH - LABEL_COL - RIGHT_PAD;

    for (i, (class, count)) in counts.iter().enumerate() {
        let row_top = TOP_MARGIN + i as u32 * ROW_HEIGHT;
        let bar_top = row_top + (ROW_HEIGHT - BAR_HEIGHT) / 2;

        draw_text_mut(
            &mut canvas,
            TEXT_COLOR,
            10,
            bar_top as i32 + 2,
            PxScale::from(16.0),
            font,
            class,
        );

        let bar_len = ((*count as f32 / max_count as f32) * plot_width as f32).round() as u32;
        if bar_len > 0 {
            let rect = Rect::at(LABEL_COL as i32, bar_top as i32).of_size(bar_len, BAR_HEIGHT);
            draw_filled_rect_mut(&mut canvas, rect, BAR_COLOR);
        }

        draw_text_mut(
            &mut canvas,
            TEXT_COLOR,
            (LABEL_COL + bar_len + 8) as i32,
            bar_top as i32 + 2,
            PxScale::from(16.0),
            font,
            &count.to_string(),
        );
    }

    draw_text_mut(
        &mut canvas,
        TEXT_COLOR,
        LABEL_COL as i32,
        (height - BOTTOM_MARGIN + 8) as i32,
        PxScale::from(16.0),
        font,
        "Number of Occurrences",
    );

    canvas
}
