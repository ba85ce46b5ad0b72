use crate::models::InferenceResult;

/// One table row per detection, in the original response order.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionRow {
    /// Zero-based position; matches the label drawn on the annotated image.
    pub index: usize,
    pub detection_id: String,
    pub class: String,
    pub confidence: f32,
    /// Formatted "(x, y, width, height)" string.
    pub bounding_box: String,
}

pub fn table_rows(result: &InferenceResult) -> Vec<DetectionRow> {
    result
        .predictions
        .iter()
        .enumerate()
        .map(|(index, det)| DetectionRow {
            index,
            detection_id: det.detection_id.to_string(),
            class: det.class.clone(),
            confidence: det.confidence,
            bounding_box: format!("({}, {}, {}, {})", det.x, det.y, det.width, det.height),
        })
        .collect()
}
