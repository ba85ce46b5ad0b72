use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, text},
};

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

#[derive(Debug, Clone)]
pub struct HomeScreen;

#[derive(Debug, Clone)]
pub enum HomeMessage {
    AnalyzeImage,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    AnalyzeImage,
}

impl Screen for HomeScreen {
    type Message = HomeMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let content = column![
            text("Intelligent Defect Detection").size(32),
            text("Upload a textile label image and get an automatic analysis."),
            text("Detected defects are classified, drawn onto the image and"),
            text("summarized as a table and a per-class occurrence chart."),
            button("Analyze an image")
                .on_press(ScreenMessage::ScreenMessage(HomeMessage::AnalyzeImage)),
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
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            HomeMessage::AnalyzeImage => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::AnalyzeImage))
            }
        }
    }
}
