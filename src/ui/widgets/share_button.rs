use cosmic::{
    widget::{button, icon, tooltip},
    Element,
};

use crate::error::{Error, Result};
use crate::fl;
use crate::ui::icons;

pub fn share_button<'a, M: Clone + 'static>(on_press: M) -> Element<'a, M> {
    tooltip(
        button::icon(icon::from_name(icons::icon_name("share"))).on_press(on_press),
        cosmic::widget::text(fl!("share")),
        tooltip::Position::Bottom,
    )
    .into()
}

pub fn copy_link(url: &str) -> Result<()> {
    cli_clipboard::set_contents(url.to_string()).map_err(|e| Error::Clipboard(e.to_string()))
}
