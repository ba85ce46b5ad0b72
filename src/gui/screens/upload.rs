use std::convert::Infallible;
use std::path::Path;

use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, text},
};
use rfd::AsyncFileDialog;

use crate::analysis;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};
use crate::models::{InferenceResult, MediaType, UploadedImage};

#[derive(Debug, Clone, Default)]
pub struct UploadScreen {
    status: UploadStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum UploadStatus {
    #[default]
    Idle,
    Analyzing(String),
    Completed,
    Failed(String),
}

#[derive(Debug, Clone)]
pub enum UploadMessage {
    PickFile,
    FileChosen(Option<UploadedImage>),
    AnalysisFinished(Result<InferenceResult, String>),
}

impl Screen for UploadScreen {
    type Message = UploadMessage;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let status: Element<'_, ScreenMessage<Self>> = match &self.status {
            UploadStatus::Idle => text("").into(),
            UploadStatus::Analyzing(name) => text(format!("Analyzing {name}...")).into(),
            UploadStatus::Completed => {
                text("Analysis completed! Open the Results tab.").into()
            }
            UploadStatus::Failed(err) => text(format!("Analysis failed: {err}")).into(),
        };

        let content = column![
            text("Upload an Image").size(32),
            button("Choose an image (png / jpg / jpeg)")
                .on_press(ScreenMessage::ScreenMessage(UploadMessage::PickFile)),
            status,
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            UploadMessage::PickFile => Task::perform(pick_image(), |upload| {
                ScreenMessage::ScreenMessage(UploadMessage::FileChosen(upload))
            }),
            UploadMessage::FileChosen(None) => Task::none(),
            UploadMessage::FileChosen(Some(upload)) => {
                // One inference in flight at a time.
                if matches!(self.status, UploadStatus::Analyzing(_)) {
                    return Task::none();
                }
                if !analysis::accept_upload(&mut state.session, &upload) {
                    self.status = UploadStatus::Completed;
                    return Task::none();
                }
                self.status = UploadStatus::Analyzing(upload.file_name.clone());
                let backend = state.backend.clone();
                let model_id = state.model_id.clone();
                Task::perform(
                    async move {
                        analysis::run_inference(backend.as_ref(), &model_id, &upload)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |result| ScreenMessage::ScreenMessage(UploadMessage::AnalysisFinished(result)),
                )
            }
            UploadMessage::AnalysisFinished(Ok(result)) => {
                // A result for a session that was reset mid-flight is dropped.
                if state.session.set_result(result).is_ok() {
                    self.status = UploadStatus::Completed;
                }
                Task::none()
            }
            UploadMessage::AnalysisFinished(Err(err)) => {
                self.status = UploadStatus::Failed(err);
                Task::none()
            }
        }
    }
}

/// File picker restricted to the accepted image types.
async fn pick_image() -> Option<UploadedImage> {
    let handle = AsyncFileDialog::new()
        .set_title("Choose an image")
        .add_filter("Images", &["png", "jpg", "jpeg"])
        .pick_file()
        .await?;
    let file_name = handle.file_name();
    let media_type = MediaType::from_path(Path::new(&file_name))?;
    let bytes = handle.read().await;
    Some(UploadedImage::new(file_name, media_type, bytes))
}
