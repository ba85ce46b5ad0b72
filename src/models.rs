use std::path::Path;

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Media types accepted by the upload surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Png,
    Jpeg,
}

impl MediaType {
    /// Match a file extension (case-insensitive) against the accepted types.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(MediaType::Png),
            "jpg" | "jpeg" => Some(MediaType::Jpeg),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Png => "image/png",
            MediaType::Jpeg => "image/jpeg",
        }
    }

    /// File suffix used when materializing the image to a temporary path.
    pub fn suffix(&self) -> &'static str {
        match self {
            MediaType::Png => ".png",
            MediaType::Jpeg => ".jpg",
        }
    }
}

/// A user-submitted image, held in memory for the lifetime of the session.
///
/// Replaced wholesale on each new upload; equality on the raw bytes is what
/// the analysis guard uses to recognize a re-submitted image.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub file_name: String,
    pub media_type: MediaType,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    pub fn new(file_name: impl Into<String>, media_type: MediaType, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type,
            bytes,
        }
    }

    /// Load an image file from disk, rejecting anything but png/jpg/jpeg.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let media_type = MediaType::from_path(path).ok_or_else(|| {
            anyhow::anyhow!(
                "unsupported image type: {} (expected png, jpg or jpeg)",
                path.display()
            )
        })?;
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(file_name, media_type, bytes))
    }

    pub fn decode(&self) -> anyhow::Result<DynamicImage> {
        image::load_from_memory(&self.bytes)
            .map_err(|e| anyhow::anyhow!("failed to decode {}: {}", self.file_name, e))
    }
}

/// One predicted defect instance as returned by the remote service.
///
/// The bounding box is given as center coordinates plus width and height, in
/// the source image's pixel space. All seven fields are required in the wire
/// payload; a missing field on any element makes the whole response invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub detection_id: Uuid,
    pub class: String,
    pub confidence: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Inset of the index label from the box's top-left corner, in pixels.
const LABEL_INSET: f32 = 5.0;

impl Detection {
    /// Top-left corner of the bounding box.
    pub fn top_left(&self) -> (f32, f32) {
        (self.x - self.width / 2.0, self.y - self.height / 2.0)
    }

    /// Bottom-right corner of the bounding box.
    pub fn bottom_right(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Anchor point for the on-image index label, just inside the box.
    pub fn label_anchor(&self) -> (f32, f32) {
        let (left, top) = self.top_left();
        (left + LABEL_INSET, top + LABEL_INSET)
    }
}

/// The ordered sequence of detections for one analyzed image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub predictions: Vec<Detection>,
}

impl InferenceResult {
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}
