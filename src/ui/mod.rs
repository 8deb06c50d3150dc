pub mod app;
pub mod icons;
pub mod pages;
pub mod widgets;

pub use app::DrawerApp;

use crate::config::AppConfig;

pub fn settings(width: f32) -> cosmic::app::Settings {
    cosmic::app::Settings::default()
        .antialiasing(true)
        .client_decorations(true)
        .size_limits(cosmic::iced::Limits::NONE.min_width(320.0).min_height(480.0))
        .size(cosmic::iced::Size::new(width, 800.0))
}

pub fn flags(config: AppConfig, language: String, width: f32) -> app::Flags {
    app::Flags {
        config,
        language,
        width,
    }
}
