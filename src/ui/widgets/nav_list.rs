use cosmic::{
    iced::{Alignment, Length},
    widget::{self, button, column, divider, row, scrollable},
    Element,
};

use crate::i18n;
use crate::nav::{NavEntry, NavItem, NavTarget};
use crate::ui::app::Message;
use crate::ui::icons;
use crate::ui::widgets::LanguageSwitcher;

fn link<'a>(item: &'a NavItem, active_route: &str) -> Element<'a, Message> {
    let (message, active) = match &item.target {
        NavTarget::Internal(path) => (Message::Navigate(path.clone()), path == active_route),
        NavTarget::External(url) => (Message::OpenUrl(url.clone()), false),
    };

    let content = row()
        .push(icons::get_icon(&item.icon, 16))
        .push(widget::text::body(i18n::tr(&item.title)))
        .spacing(12)
        .align_y(Alignment::Center);

    button::custom(content)
        .on_press(message)
        .padding([8, 16])
        .width(Length::Fill)
        .class(if active {
            cosmic::theme::Button::Suggested
        } else {
            cosmic::theme::Button::Text
        })
        .into()
}

fn entry<'a>(entry: &'a NavEntry, active_route: &str, switcher: &'a LanguageSwitcher) -> Element<'a, Message> {
    match entry {
        NavEntry::Link(item) => link(item, active_route),
        NavEntry::Divider => divider::horizontal::default().into(),
        NavEntry::LanguageSwitcher { icon } => switcher.view(icon).map(Message::LanguageSwitcher),
    }
}

/// Drawer contents: the entry list on top, the footer pinned to the bottom.
pub fn view<'a>(
    entries: &'a [NavEntry],
    footer: &'a NavEntry,
    active_route: &str,
    switcher: &'a LanguageSwitcher,
) -> Element<'a, Message> {
    let body = entries
        .iter()
        .fold(column::with_capacity(entries.len()), |col, e| {
            col.push(entry(e, active_route, switcher))
        })
        .width(Length::Fill);

    column::with_capacity(2)
        .push(scrollable(body).height(Length::Fill))
        .push(entry(footer, active_route, switcher))
        .height(Length::Fill)
        .into()
}
