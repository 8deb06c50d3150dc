pub mod language_switcher;
pub mod nav_list;
pub mod share_button;

pub use language_switcher::LanguageSwitcher;
pub use share_button::share_button;
