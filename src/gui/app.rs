use std::sync::Arc;

use iced::{
    Element, Theme,
    widget::{button, column, container, row},
};

use super::{
    Message,
    screens::{Page, Screen, ScreenData, ScreenMessage, home::HomeScreen},
    state::AppState,
};
use crate::config::InferenceConfig;
use crate::inference::{HttpInferenceClient, InferenceBackend};
use crate::session::SessionState;

pub struct DefectLensApp {
    state: AppState,
    screen: ScreenData,
}

impl DefectLensApp {
    fn new(backend: Arc<dyn InferenceBackend>, model_id: String) -> Self {
        Self {
            state: AppState {
                session: SessionState::new(),
                backend,
                model_id,
            },
            screen: ScreenData::Home(HomeScreen),
        }
    }

    fn title(&self) -> String {
        "DefectLens - Intelligent Defect Detection".to_string()
    }

    fn update(&mut self, message: Message) -> iced::Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|msg| match msg {
                ScreenMessage::ScreenMessage(msg) => msg,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    fn view(&self) -> Element<'_, Message> {
        let current = self.screen.page();
        let nav = row![
            nav_button("Home", Page::Home, current),
            nav_button("Upload", Page::Upload, current),
            nav_button("Results", Page::Results, current),
            nav_button("Contact", Page::Contact, current),
        ]
        .spacing(10);

        let screen = self.screen.view().map(|msg| match msg {
            ScreenMessage::ScreenMessage(msg) => msg,
            ScreenMessage::ParentMessage(never) => match never {},
        });

        column![
            container(nav).padding(10).center_x(iced::Length::Fill),
            screen,
        ]
        .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn nav_button(label: &str, page: Page, current: Page) -> Element<'_, Message> {
    // The active tab stays disabled; Home and Upload still reset session
    // state when entered from another tab.
    button(label)
        .on_press_maybe((page != current).then_some(Message::Navigate(page)))
        .into()
}

/// Launch the windowed application.
pub fn run(config: InferenceConfig) -> anyhow::Result<()> {
    let backend: Arc<dyn InferenceBackend> = Arc::new(HttpInferenceClient::new(&config)?);
    let model_id = config.model_id.clone();

    iced::application(
        move || DefectLensApp::new(backend.clone(), model_id.clone()),
        DefectLensApp::update,
        DefectLensApp::view,
    )
    .title(DefectLensApp::title)
    .theme(DefectLensApp::theme)
    .run()?;
    Ok(())
}
