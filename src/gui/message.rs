use crate::gui::screens::{
    Page, ScreenMessage, contact::ContactScreen, home::HomeScreen, results::ResultsScreen,
    upload::UploadScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    Home(ScreenMessage<HomeScreen>),
    Upload(ScreenMessage<UploadScreen>),
    Results(ScreenMessage<ResultsScreen>),
    Contact(ScreenMessage<ContactScreen>),
}
