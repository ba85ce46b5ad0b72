use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use image::{ImageBuffer, Rgb};
use uuid::Uuid;

use defectlens::inference::{InferenceBackend, InferenceError};
use defectlens::models::{Detection, InferenceResult, MediaType, UploadedImage};

/// Creates a small red PNG in memory and wraps it as an upload.
pub fn make_upload(file_name: &str) -> UploadedImage {
    let img = ImageBuffer::from_fn(64, 64, |_, _| Rgb([255u8, 0u8, 0u8]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("Failed to encode test image");
    UploadedImage::new(file_name, MediaType::Png, bytes)
}

/// Detection with a fresh id and a fixed confidence.
pub fn make_detection(class: &str, x: f32, y: f32, width: f32, height: f32) -> Detection {
    Detection {
        detection_id: Uuid::new_v4(),
        class: class.to_string(),
        confidence: 0.9,
        x,
        y,
        width,
        height,
    }
}

/// One detection per class label, laid out left to right.
pub fn make_result(classes: &[&str]) -> InferenceResult {
    InferenceResult {
        predictions: classes
            .iter()
            .enumerate()
            .map(|(i, class)| make_detection(class, 10.0 * (i as f32 + 1.0), 20.0, 8.0, 6.0))
            .collect(),
    }
}

/// Canned backend: returns a fixed result, counts its calls and remembers
/// the temporary path it was handed (for cleanup assertions).
pub struct StubBackend {
    result: InferenceResult,
    calls: AtomicUsize,
    last_path: Mutex<Option<PathBuf>>,
}

impl StubBackend {
    pub fn new(result: InferenceResult) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_path: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_path(&self) -> Option<PathBuf> {
        self.last_path.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceBackend for StubBackend {
    async fn infer(
        &self,
        image_path: &Path,
        _model_id: &str,
    ) -> Result<InferenceResult, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert!(image_path.exists(), "image should exist during the call");
        *self.last_path.lock().unwrap() = Some(image_path.to_path_buf());
        Ok(self.result.clone())
    }
}

/// Backend that always reports a malformed response.
pub struct FailingBackend {
    calls: AtomicUsize,
    last_path: Mutex<Option<PathBuf>>,
}

impl FailingBackend {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_path: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_path(&self) -> Option<PathBuf> {
        self.last_path.lock().unwrap().clone()
    }
}

impl Default for FailingBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InferenceBackend for FailingBackend {
    async fn infer(
        &self,
        image_path: &Path,
        _model_id: &str,
    ) -> Result<InferenceResult, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_path.lock().unwrap() = Some(image_path.to_path_buf());
        Err(InferenceError::Response(
            "missing field `confidence`".to_string(),
        ))
    }
}
