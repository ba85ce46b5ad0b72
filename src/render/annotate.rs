use ab_glyph::PxScale;
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use super::label_font;
use crate::models::InferenceResult;

const BOX_COLOR: Rgba<u8> = Rgba([0u8, 128u8, 0u8, 255u8]);
const BOX_THICKNESS: i32 = 3;
const LABEL_SCALE: f32 = 20.0;

/// Draw the detections onto a copy of the image: one rectangle per detection
/// plus its zero-based position index as the label, anchored just inside the
/// top-left corner. The index ties the drawing to table row order; the
/// detection id stays in the table.
pub fn annotate(image: &DynamicImage, result: &InferenceResult) -> RgbaImage {
    let mut canvas = image.to_rgba8();

    for (idx, det) in result.predictions.iter().enumerate() {
        let (left, top) = det.top_left();
        let x0 = left.round() as i32;
        let y0 = top.round() as i32;
        let w = det.width.round().max(1.0) as u32;
        let h = det.height.round().max(1.0) as u32;

        // A hollow rect is one pixel wide; nest insets for a thicker border.
        for t in 0..BOX_THICKNESS {
            let inset = 2 * t as u32;
            if w <= inset || h <= inset {
                break;
            }
            let rect = Rect::at(x0 + t, y0 + t).of_size(w - inset, h - inset);
            draw_hollow_rect_mut(&mut canvas, rect, BOX_COLOR);
        }

        let (anchor_x, anchor_y) = det.label_anchor();
        draw_text_mut(
            &mut canvas,
            BOX_COLOR,
            anchor_x.round() as i32,
            anchor_y.round() as i32,
            PxScale::from(LABEL_SCALE),
            label_font(),
            &idx.to_string(),
        );
    }

    canvas
}
