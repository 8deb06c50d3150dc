use cosmic::{
    app::{self, Core},
    iced::{
        event, keyboard, mouse,
        widget::{mouse_area, scrollable, Stack},
        window, Color, Event, Length, Subscription,
    },
    widget::{self, container, icon, row, tooltip},
    Application, Element,
};
use tracing::{info, warn};

use crate::{
    config::{AppConfig, DrawerClass},
    drawer::{Anchor, DrawerEvent, DrawerLayout, DrawerState, DrawerVariant, PointerEvent, SwipeTracker},
    fl, i18n,
    nav::{self, NavEntry, PathLocalizer, PrefixLocalizer, HOME_PATH},
    ui::{
        icons,
        pages::Content,
        widgets::{language_switcher, nav_list, share_button, LanguageSwitcher},
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    Drawer(DrawerEvent),
    Pointer(PointerEvent),
    WindowResized(f32),
    Navigate(String),
    OpenUrl(String),
    LanguageSwitcher(language_switcher::Message),
    Share,
    Shared(Result<String, String>),
    Opened(Result<String, String>),
}

pub struct Flags {
    pub config: AppConfig,
    pub language: String,
    pub width: f32,
}

pub struct DrawerApp {
    core: Core,
    config: AppConfig,
    localizer: PrefixLocalizer,
    language: String,
    drawer: DrawerState,
    swipe: SwipeTracker,
    width: f32,
    route: String,
    content: Content,
    entries: Vec<NavEntry>,
    footer: NavEntry,
    switcher: LanguageSwitcher,
    // Main-area scrollable, reset to the top on navigation
    scroll_id: widget::Id,
}

impl DrawerApp {
    pub fn new(core: Core, flags: Flags) -> Self {
        let Flags { config, language, width } = flags;
        let localizer = config.localizer();
        let entries = nav::build_entries(&config.pages, &language, &config.links, &localizer);
        let footer = nav::build_footer(&language, &config.links);
        let switcher = LanguageSwitcher::new(&config.site.languages, &language);
        let route = localizer.localize(&language, HOME_PATH);

        Self {
            core,
            content: Content::Home,
            config,
            localizer,
            language,
            drawer: DrawerState::new(),
            swipe: SwipeTracker::new(),
            width,
            route,
            entries,
            footer,
            switcher,
            scroll_id: widget::Id::unique(),
        }
    }

    fn layout(&self) -> DrawerLayout {
        self.drawer
            .layout(self.width, &self.config.drawer, i18n::is_rtl(&self.language))
    }

    fn resolve(&self, route: &str) -> Content {
        let (_, bare) = self.localizer.strip(route);
        if bare == HOME_PATH {
            return Content::Home;
        }
        match nav::active_page(&self.config.pages, route, &self.localizer) {
            Some(page) => Content::Page(page.clone()),
            None => Content::NotFound(route.to_string()),
        }
    }

    fn set_language(&mut self, code: &str) {
        if !self.config.supports(code) {
            warn!("language {} is not configured", code);
            if self.switcher.current() != Some(self.language.as_str()) {
                self.switcher = LanguageSwitcher::new(&self.config.site.languages, &self.language);
            }
            return;
        }

        // Configured languages without a bundle keep the fallback strings but
        // still get their own paths and links.
        if let Err(e) = i18n::set_language(code) {
            warn!("no translations for {}, using fallback: {}", code, e);
        }

        let (_, bare) = self.localizer.strip(&self.route);
        self.language = code.to_string();
        self.route = self.localizer.localize(code, &bare);
        self.content = self.resolve(&self.route);
        self.entries = nav::build_entries(&self.config.pages, code, &self.config.links, &self.localizer);
        self.footer = nav::build_footer(code, &self.config.links);
        info!("language switched to {}", code);
    }

    fn panel_class(&self) -> cosmic::theme::Container<'static> {
        match self.config.drawer.class {
            DrawerClass::Primary => cosmic::theme::Container::Primary,
            DrawerClass::Secondary => cosmic::theme::Container::Secondary,
            DrawerClass::Background => cosmic::theme::Container::Background,
            DrawerClass::Card => cosmic::theme::Container::Card,
        }
    }

    fn drawer_panel(&self, layout: &DrawerLayout) -> Element<Message> {
        container(nav_list::view(&self.entries, &self.footer, &self.route, &self.switcher))
            .width(Length::Fixed(layout.drawer_width))
            .height(Length::Fill)
            .class(self.panel_class())
            .into()
    }

    fn backdrop(&self) -> Element<Message> {
        mouse_area(
            container(widget::Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .class(cosmic::theme::Container::custom(|_| cosmic::iced::widget::container::Style {
                    background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.4).into()),
                    ..Default::default()
                })),
        )
        .on_press(Message::Drawer(DrawerEvent::BackdropPressed))
        .into()
    }

    fn with_anchor<'a>(
        anchor: Anchor,
        panel: Element<'a, Message>,
        rest: Element<'a, Message>,
    ) -> Element<'a, Message> {
        match anchor {
            Anchor::Start => row::with_capacity(2).push(panel).push(rest).into(),
            Anchor::End => row::with_capacity(2).push(rest).push(panel).into(),
        }
    }

    fn spawn_blocking<F>(job: F, done: fn(Result<String, String>) -> Message) -> app::Task<Message>
    where
        F: FnOnce() -> Result<String, String> + Send + 'static,
    {
        cosmic::Task::perform(
            async move {
                let result = tokio::task::spawn_blocking(job)
                    .await
                    .unwrap_or_else(|e| Err(e.to_string()));
                cosmic::Action::App(done(result))
            },
            |msg| msg,
        )
    }
}

fn window_events(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size.width)),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::Drawer(DrawerEvent::Close)),
        _ => None,
    }
}

fn pointer_events(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::Pointer(PointerEvent::Pressed))
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::Pointer(PointerEvent::Moved(position.x)))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::Pointer(PointerEvent::Released))
        }
        _ => None,
    }
}

impl Application for DrawerApp {
    type Executor = cosmic::executor::Default;
    type Flags = Flags;
    type Message = Message;
    const APP_ID: &'static str = "io.g0vhk.CosmicDrawer";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, app::Task<Self::Message>) {
        let app = Self::new(core, flags);
        info!(
            "drawer ready: {} pages, language {}, width {}",
            app.config.pages.len(),
            app.language,
            app.width
        );
        (app, app::Task::none())
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        let layout = self.layout();
        if layout.dismissible && layout.visible {
            Subscription::batch([event::listen_with(window_events), event::listen_with(pointer_events)])
        } else {
            event::listen_with(window_events)
        }
    }

    fn update(&mut self, message: Self::Message) -> app::Task<Self::Message> {
        match message {
            Message::Drawer(event) => {
                self.drawer.apply(event);
            }
            Message::Pointer(pointer) => {
                let layout = self.layout();
                if layout.dismissible && layout.visible {
                    if let Some(event) =
                        self.swipe
                            .on_pointer(pointer, layout.anchor, self.config.drawer.swipe_threshold)
                    {
                        self.drawer.apply(event);
                    }
                }
            }
            Message::WindowResized(width) => {
                self.width = width;
            }
            Message::Navigate(route) => {
                self.content = self.resolve(&route);
                self.route = route;
                self.drawer.apply(DrawerEvent::Navigated);
                return scrollable::snap_to(self.scroll_id.clone(), scrollable::RelativeOffset::START);
            }
            Message::OpenUrl(url) => {
                info!("opening {}", url);
                return Self::spawn_blocking(
                    move || webbrowser::open(&url).map(|_| url).map_err(|e| e.to_string()),
                    Message::Opened,
                );
            }
            Message::LanguageSwitcher(msg) => {
                if let Some(code) = self.switcher.update(msg) {
                    self.set_language(&code);
                }
            }
            Message::Share => {
                let url = self.config.site_url(&self.route);
                return Self::spawn_blocking(
                    move || {
                        share_button::copy_link(&url)
                            .map(|_| url)
                            .map_err(|e| e.to_string())
                    },
                    Message::Shared,
                );
            }
            Message::Shared(result) => match result {
                Ok(url) => info!("{}: {}", fl!("link-copied"), url),
                Err(e) => warn!("failed to copy link: {}", e),
            },
            Message::Opened(result) => {
                if let Err(e) = result {
                    warn!("failed to open link: {}", e);
                }
            }
        }

        app::Task::none()
    }

    fn view(&self) -> Element<Self::Message> {
        let layout = self.layout();
        let content = self.content.view(&self.route, &self.scroll_id);

        if !layout.visible {
            return content;
        }

        match layout.variant {
            DrawerVariant::Permanent => {
                Self::with_anchor(layout.anchor, self.drawer_panel(&layout), content)
            }
            DrawerVariant::Temporary => {
                let overlay = Self::with_anchor(layout.anchor, self.drawer_panel(&layout), self.backdrop());
                Stack::new()
                    .push(content)
                    .push(overlay)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into()
            }
        }
    }

    fn header_start(&self) -> Vec<Element<Self::Message>> {
        if !self.layout().show_menu_button {
            return Vec::new();
        }

        let label = if self.drawer.is_open() {
            fl!("close-drawer")
        } else {
            fl!("open-drawer")
        };

        vec![tooltip(
            widget::button::icon(icon::from_name(icons::icon_name("menu")))
                .on_press(Message::Drawer(DrawerEvent::MenuPressed)),
            widget::text(label),
            tooltip::Position::Bottom,
        )
        .into()]
    }

    fn header_center(&self) -> Vec<Element<Self::Message>> {
        let home = self.localizer.localize(&self.language, HOME_PATH);
        vec![widget::button::text(i18n::tr(&self.config.site.title_key))
            .on_press(Message::Navigate(home))
            .into()]
    }

    fn header_end(&self) -> Vec<Element<Self::Message>> {
        vec![share_button::share_button(Message::Share)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{ExternalLink, NavTarget};

    fn app(language: &str, width: f32) -> DrawerApp {
        let mut config = AppConfig::default();
        config.site.languages.push("ja".to_string());
        config.links.extra.insert(
            "ja".to_string(),
            vec![ExternalLink {
                href: "https://example.com/ja".to_string(),
                icon: "edit".to_string(),
                title: "text-help-us".to_string(),
            }],
        );
        DrawerApp::new(
            Core::default(),
            Flags {
                config,
                language: language.to_string(),
                width,
            },
        )
    }

    fn external_hrefs(entries: &[NavEntry]) -> Vec<&str> {
        entries
            .iter()
            .filter_map(|entry| match entry {
                NavEntry::Link(item) => match &item.target {
                    NavTarget::External(href) => Some(href.as_str()),
                    NavTarget::Internal(_) => None,
                },
                _ => None,
            })
            .collect()
    }

    fn footer_href(app: &DrawerApp) -> &str {
        match &app.footer {
            NavEntry::Link(item) => match &item.target {
                NavTarget::External(href) => href.as_str(),
                NavTarget::Internal(path) => path.as_str(),
            },
            other => panic!("footer is not a link: {:?}", other),
        }
    }

    fn select(app: &mut DrawerApp, code: &str) {
        let index = app.config.site.languages.iter().position(|l| l == code).unwrap();
        let _ = app.update(Message::LanguageSwitcher(language_switcher::Message::Selected(index)));
    }

    #[test]
    fn test_navigate_closes_drawer_and_resolves_content() {
        let mut app = app("en", 400.0);
        let _ = app.update(Message::Drawer(DrawerEvent::MenuPressed));
        assert!(app.drawer.is_open());

        let _ = app.update(Message::Navigate("/map".to_string()));
        assert!(!app.drawer.is_open());
        assert_eq!(app.route, "/map");
        assert!(matches!(&app.content, Content::Page(page) if page.to == "/map"));

        let _ = app.update(Message::Navigate("/nowhere".to_string()));
        assert_eq!(app.content, Content::NotFound("/nowhere".to_string()));

        let _ = app.update(Message::Navigate("/".to_string()));
        assert_eq!(app.content, Content::Home);
    }

    #[test]
    fn test_language_switch_relocalizes_route_and_rebuilds_nav() {
        let _guard = i18n::TEST_LANGUAGE_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let mut app = app("zh", 400.0);
        let _ = app.update(Message::Navigate("/zh/map".to_string()));
        assert_eq!(external_hrefs(&app.entries).len(), 2);
        assert!(footer_href(&app).contains("lang=zh"));

        select(&mut app, "en");
        assert_eq!(app.language, "en");
        assert_eq!(app.route, "/map");
        assert!(matches!(&app.content, Content::Page(page) if page.to == "/map"));
        assert!(external_hrefs(&app.entries).is_empty());
        assert!(footer_href(&app).contains("lang=en"));
        assert!(!footer_href(&app).contains("lang=zh"));

        select(&mut app, "zh");
        assert_eq!(app.route, "/zh/map");
        assert_eq!(external_hrefs(&app.entries).len(), 2);

        let _ = i18n::set_language("en");
    }

    #[test]
    fn test_configured_language_without_bundle_still_switches() {
        let _guard = i18n::TEST_LANGUAGE_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let mut app = app("en", 400.0);
        select(&mut app, "ja");

        assert_eq!(app.language, "ja");
        assert_eq!(app.route, "/ja/");
        assert_eq!(app.switcher.current(), Some("ja"));
        assert_eq!(external_hrefs(&app.entries), vec!["https://example.com/ja"]);
        assert!(footer_href(&app).contains("lang=ja"));
    }

    #[test]
    fn test_unconfigured_language_is_refused_and_switcher_restored() {
        let mut app = app("en", 400.0);
        app.switcher = LanguageSwitcher::new(&app.config.site.languages, "zh");

        app.set_language("fr");
        assert_eq!(app.language, "en");
        assert_eq!(app.route, "/");
        assert_eq!(app.switcher.current(), Some("en"));
    }

    #[test]
    fn test_swipe_closes_temporary_drawer() {
        let mut app = app("en", 400.0);
        let _ = app.update(Message::Drawer(DrawerEvent::MenuPressed));

        for pointer in [
            PointerEvent::Moved(200.0),
            PointerEvent::Pressed,
            PointerEvent::Moved(100.0),
            PointerEvent::Released,
        ] {
            let _ = app.update(Message::Pointer(pointer));
        }
        assert!(!app.drawer.is_open());
    }

    #[test]
    fn test_pointer_ignored_by_permanent_drawer() {
        let mut app = app("en", 400.0);
        let _ = app.update(Message::Drawer(DrawerEvent::MenuPressed));
        let _ = app.update(Message::WindowResized(1200.0));
        assert_eq!(app.layout().variant, DrawerVariant::Permanent);

        for pointer in [
            PointerEvent::Pressed,
            PointerEvent::Moved(300.0),
            PointerEvent::Moved(100.0),
            PointerEvent::Released,
        ] {
            let _ = app.update(Message::Pointer(pointer));
        }
        assert!(app.drawer.is_open());

        let _ = app.update(Message::WindowResized(400.0));
        let layout = app.layout();
        assert_eq!(layout.variant, DrawerVariant::Temporary);
        assert!(layout.visible);
    }

    #[test]
    fn test_backdrop_and_escape_close_drawer() {
        let mut app = app("en", 400.0);
        let _ = app.update(Message::Drawer(DrawerEvent::MenuPressed));
        let _ = app.update(Message::Drawer(DrawerEvent::BackdropPressed));
        assert!(!app.drawer.is_open());

        let _ = app.update(Message::Drawer(DrawerEvent::MenuPressed));
        let _ = app.update(Message::Drawer(DrawerEvent::Close));
        assert!(!app.layout().visible);
    }

    #[test]
    fn test_window_events_map_resize_and_escape() {
        let resized = window_events(
            Event::Window(window::Event::Resized(cosmic::iced::Size::new(480.0, 800.0))),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(matches!(resized, Some(Message::WindowResized(w)) if w == 480.0));

        let moved = window_events(
            Event::Mouse(mouse::Event::CursorMoved {
                position: cosmic::iced::Point::new(1.0, 2.0),
            }),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(moved.is_none());
    }

    #[test]
    fn test_pointer_events_track_horizontal_position() {
        let moved = pointer_events(
            Event::Mouse(mouse::Event::CursorMoved {
                position: cosmic::iced::Point::new(42.0, 7.0),
            }),
            event::Status::Captured,
            window::Id::unique(),
        );
        assert!(matches!(moved, Some(Message::Pointer(PointerEvent::Moved(x))) if x == 42.0));
    }
}
