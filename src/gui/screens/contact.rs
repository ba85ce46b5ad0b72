use std::convert::Infallible;

use iced::{
    Element, Task,
    widget::{column, container, scrollable, text},
};

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

pub struct ContactEntry {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

/// Fixed directory, rendered in declaration order.
pub const CONTACTS: &[ContactEntry] = &[
    ContactEntry {
        name: "Quality Inspection Team",
        email: "inspection@defectlens.example",
        phone: "+216 70 100 200",
    },
    ContactEntry {
        name: "Model Support",
        email: "models@defectlens.example",
        phone: "+216 70 100 201",
    },
    ContactEntry {
        name: "Production Line Desk",
        email: "line-desk@defectlens.example",
        phone: "+216 70 100 202",
    },
    ContactEntry {
        name: "General Inquiries",
        email: "hello@defectlens.example",
        phone: "+216 70 100 203",
    },
];

#[derive(Debug, Clone)]
pub struct ContactScreen;

#[derive(Debug, Clone)]
pub enum ContactMessage {}

impl Screen for ContactScreen {
    type Message = ContactMessage;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut content = column![
            text("Contact Us").size(32),
            text("For any inquiries or support, reach us via email or phone."),
        ]
        .spacing(12)
        .padding(20);

        for entry in CONTACTS {
            content = content
                .push(text(entry.name).size(20))
                .push(text(format!("Email: {}", entry.email)))
                .push(text(format!("Phone: {}", entry.phone)));
        }

        container(scrollable(content)).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
