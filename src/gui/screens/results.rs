use std::convert::Infallible;
use std::io::Cursor;

use iced::widget::image::Handle;
use iced::{
    Element, Length, Task,
    widget::{column, container, row, scrollable, text},
};
use image::DynamicImage;

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};
use crate::models::{InferenceResult, UploadedImage};
use crate::render::{DetectionRow, annotate, class_counts, render_class_chart, table_rows};
use crate::session::SessionState;

/// Results view. The displayed artifacts are built once, on navigation, from
/// the session snapshot; the screen itself holds no session state.
#[derive(Debug, Clone)]
pub struct ResultsScreen {
    content: Option<ResultsContent>,
    error: Option<String>,
}

#[derive(Debug, Clone)]
struct ResultsContent {
    original: Handle,
    annotated: Handle,
    rows: Vec<DetectionRow>,
    chart: Handle,
}

#[derive(Debug, Clone)]
pub enum ResultsMessage {}

impl ResultsScreen {
    pub fn new(session: &SessionState) -> Self {
        let (Some(upload), Some(result)) = (session.image(), session.result()) else {
            return Self {
                content: None,
                error: None,
            };
        };
        match build_content(upload, result) {
            Ok(content) => Self {
                content: Some(content),
                error: None,
            },
            Err(e) => Self {
                content: None,
                error: Some(e.to_string()),
            },
        }
    }
}

impl Screen for ResultsScreen {
    type Message = ResultsMessage;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        if let Some(err) = &self.error {
            return container(text(format!("Failed to render results: {err}")))
                .padding(20)
                .into();
        }
        let Some(content) = &self.content else {
            // Valid state, not a failure: the user navigated here before
            // uploading anything.
            return container(text("No results available. Please upload an image first."))
                .padding(20)
                .into();
        };

        let mut table = column![header_row()].spacing(4);
        for r in &content.rows {
            table = table.push(
                row![
                    text(r.index.to_string()).width(Length::FillPortion(1)),
                    text(r.detection_id.clone()).width(Length::FillPortion(5)),
                    text(r.class.clone()).width(Length::FillPortion(2)),
                    text(format!("{:.2}", r.confidence)).width(Length::FillPortion(2)),
                    text(r.bounding_box.clone()).width(Length::FillPortion(4)),
                ]
                .spacing(10),
            );
        }

        let body = column![
            text("Analysis Results").size(32),
            text("Original Image").size(20),
            iced::widget::image(content.original.clone()).width(Length::Fill),
            text("Detected Defects").size(20),
            iced::widget::image(content.annotated.clone()).width(Length::Fill),
            table,
            text("Occurrences of Defect Classes").size(20),
            iced::widget::image(content.chart.clone()),
        ]
        .spacing(20)
        .padding(20);

        scrollable(body).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}

fn header_row<'a>() -> iced::widget::Row<'a, ScreenMessage<ResultsScreen>> {
    row![
        text("#").width(Length::FillPortion(1)),
        text("Detection ID").width(Length::FillPortion(5)),
        text("Class").width(Length::FillPortion(2)),
        text("Confidence").width(Length::FillPortion(2)),
        text("Bounding Box (x, y, width, height)").width(Length::FillPortion(4)),
    ]
    .spacing(10)
}

fn build_content(upload: &UploadedImage, result: &InferenceResult) -> anyhow::Result<ResultsContent> {
    let decoded = upload.decode()?;
    let annotated = annotate(&decoded, result);
    let chart = render_class_chart(&class_counts(result));
    Ok(ResultsContent {
        original: Handle::from_bytes(upload.bytes.clone()),
        annotated: png_handle(DynamicImage::ImageRgba8(annotated))?,
        rows: table_rows(result),
        chart: png_handle(DynamicImage::ImageRgb8(chart))?,
    })
}

fn png_handle(img: DynamicImage) -> anyhow::Result<Handle> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;
    Ok(Handle::from_bytes(buf))
}
