pub mod contact;
pub mod home;
pub mod results;
pub mod upload;

use iced::{Element, Task};

use crate::gui::{AppState, Message};

/// The four navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Upload,
    Results,
    Contact,
}

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Home(home::HomeScreen),
    Upload(upload::UploadScreen),
    Results(results::ResultsScreen),
    Contact(contact::ContactScreen),
}

impl ScreenData {
    pub fn page(&self) -> Page {
        match self {
            ScreenData::Home(_) => Page::Home,
            ScreenData::Upload(_) => Page::Upload,
            ScreenData::Results(_) => Page::Results,
            ScreenData::Contact(_) => Page::Contact,
        }
    }

    /// Navigation controller: build the screen for a page. Entering Home or
    /// Upload starts a new session, so a previous result cannot be reviewed
    /// without re-uploading. Deliberate, not an oversight.
    pub fn navigate(page: Page, state: &mut AppState) -> Self {
        if matches!(page, Page::Home | Page::Upload) {
            state.session.begin_new_session();
        }
        match page {
            Page::Home => ScreenData::Home(home::HomeScreen),
            Page::Upload => ScreenData::Upload(upload::UploadScreen::default()),
            Page::Results => ScreenData::Results(results::ResultsScreen::new(&state.session)),
            Page::Contact => ScreenData::Contact(contact::ContactScreen),
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Home(screen) => screen.view().map(Message::Home),
            ScreenData::Upload(screen) => screen.view().map(Message::Upload),
            ScreenData::Results(screen) => screen.view().map(Message::Results),
            ScreenData::Contact(screen) => screen.view().map(Message::Contact),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::Navigate(page)) => {
                *x = ScreenData::navigate(page, state);
                Task::none()
            }
            (ScreenData::Home(page), Message::Home(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Home)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    // The home button resets and redirects; entering Upload
                    // performs the reset.
                    home::ParentMessage::AnalyzeImage => Task::done(ScreenMessage::ScreenMessage(
                        Message::Navigate(Page::Upload),
                    )),
                },
            },
            (ScreenData::Upload(page), Message::Upload(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Upload)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {},
            },
            (ScreenData::Results(page), Message::Results(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Results)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {},
            },
            (ScreenData::Contact(page), Message::Contact(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Contact)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {},
            },
            // Messages for a departed screen (e.g. an analysis finishing
            // after navigation reset the session) are dropped.
            _ => Task::none(),
        }
    }
}
