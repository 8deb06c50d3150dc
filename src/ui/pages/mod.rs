use cosmic::{
    iced::Length,
    widget::{self, column, scrollable},
    Element,
};

use crate::fl;
use crate::i18n;
use crate::nav::{PageDescriptor, HOME_TITLE};
use crate::ui::app::Message;

/// What the main area shows for the current route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Home,
    Page(PageDescriptor),
    NotFound(String),
}

impl Content {
    pub fn title(&self) -> String {
        match self {
            Content::Home => i18n::tr(HOME_TITLE),
            Content::Page(page) => i18n::tr(&page.title),
            Content::NotFound(_) => fl!("page-not-found"),
        }
    }

    pub fn view(&self, route: &str, scroll_id: &widget::Id) -> Element<'_, Message> {
        let spacing = cosmic::theme::active().cosmic().spacing;

        let mut body = column::with_capacity(2)
            .push(widget::text::title1(self.title()))
            .spacing(spacing.space_s)
            .padding(spacing.space_l)
            .width(Length::Fill);

        if let Content::NotFound(missing) = self {
            body = body.push(widget::text::body(missing.clone()));
        } else {
            body = body.push(widget::text::caption(route.to_string()));
        }

        scrollable(body)
            .id(scroll_id.clone())
            .height(Length::Fill)
            .into()
    }
}
