use cosmic::{
    iced::{Alignment, Length},
    widget::{dropdown, row, text, tooltip},
    Element,
};

use crate::{fl, i18n};
use crate::ui::icons;

#[derive(Debug, Clone)]
pub enum Message {
    Selected(usize),
}

/// Dropdown over the configured languages, labelled by native name.
#[derive(Debug, Clone)]
pub struct LanguageSwitcher {
    codes: Vec<String>,
    names: Vec<String>,
    selected: Option<usize>,
}

impl LanguageSwitcher {
    pub fn new(codes: &[String], current: &str) -> Self {
        let names = codes.iter().map(|c| i18n::native_name(c).to_string()).collect();
        Self {
            codes: codes.to_vec(),
            names,
            selected: codes.iter().position(|c| c == current),
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.selected.map(|i| self.codes[i].as_str())
    }

    /// Returns the newly chosen language code, if it changed.
    pub fn update(&mut self, message: Message) -> Option<String> {
        match message {
            Message::Selected(index) => {
                if index >= self.codes.len() || self.selected == Some(index) {
                    return None;
                }
                self.selected = Some(index);
                Some(self.codes[index].clone())
            }
        }
    }

    pub fn view(&self, icon: &str) -> Element<Message> {
        row()
            .push(icons::get_icon(icon, 16))
            .push(tooltip(
                dropdown(&self.names, self.selected, Message::Selected),
                text(fl!("text-language")),
                tooltip::Position::Bottom,
            ))
            .spacing(12)
            .padding([8, 16])
            .align_y(Alignment::Center)
            .width(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switcher() -> LanguageSwitcher {
        LanguageSwitcher::new(&["en".to_string(), "zh".to_string()], "en")
    }

    #[test]
    fn test_initial_selection() {
        assert_eq!(switcher().current(), Some("en"));
        let unknown = LanguageSwitcher::new(&["en".to_string()], "fr");
        assert_eq!(unknown.current(), None);
    }

    #[test]
    fn test_select_reports_change_once() {
        let mut s = switcher();
        assert_eq!(s.update(Message::Selected(1)), Some("zh".to_string()));
        assert_eq!(s.update(Message::Selected(1)), None);
        assert_eq!(s.current(), Some("zh"));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut s = switcher();
        assert_eq!(s.update(Message::Selected(7)), None);
        assert_eq!(s.current(), Some("en"));
    }
}
