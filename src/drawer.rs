//! Drawer visibility state and responsive layout.

use tracing::debug;

use crate::config::DrawerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    MenuPressed,
    BackdropPressed,
    SwipeClose,
    Close,
    /// Following a link replaces the page, which starts the drawer closed again.
    Navigated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerVariant {
    /// Overlay drawer below the breakpoint, dismissible.
    Temporary,
    /// Docked drawer at or above the breakpoint, always shown.
    Permanent,
}

impl DrawerVariant {
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width >= breakpoint {
            Self::Permanent
        } else {
            Self::Temporary
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

impl Anchor {
    pub fn for_direction(rtl: bool) -> Self {
        if rtl {
            Self::End
        } else {
            Self::Start
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerLayout {
    pub variant: DrawerVariant,
    pub visible: bool,
    pub dismissible: bool,
    pub show_menu_button: bool,
    pub anchor: Anchor,
    pub drawer_width: f32,
}

#[derive(Debug, Clone, Default)]
pub struct DrawerState {
    mobile_open: bool,
}

impl DrawerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.mobile_open
    }

    pub fn toggle(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn close(&mut self) {
        self.mobile_open = false;
    }

    pub fn apply(&mut self, event: DrawerEvent) {
        match event {
            DrawerEvent::MenuPressed => self.toggle(),
            DrawerEvent::BackdropPressed
            | DrawerEvent::SwipeClose
            | DrawerEvent::Close
            | DrawerEvent::Navigated => self.close(),
        }
        debug!("drawer {:?} -> open={}", event, self.mobile_open);
    }

    pub fn layout(&self, width: f32, config: &DrawerConfig, rtl: bool) -> DrawerLayout {
        let variant = DrawerVariant::for_width(width, config.breakpoint);
        let anchor = Anchor::for_direction(rtl);

        match variant {
            DrawerVariant::Temporary => DrawerLayout {
                variant,
                visible: self.mobile_open,
                dismissible: true,
                show_menu_button: true,
                anchor,
                drawer_width: config.width,
            },
            DrawerVariant::Permanent => DrawerLayout {
                variant,
                visible: true,
                dismissible: false,
                show_menu_button: false,
                anchor,
                drawer_width: config.width,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed,
    Moved(f32),
    Released,
}

/// Tracks a horizontal drag over the drawer and reports a close gesture.
/// The cursor position is followed between presses so a drag measures from
/// where the button went down.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    pressed: bool,
    start: Option<f32>,
    last: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Some(DrawerEvent::SwipeClose)` when a release ends a drag of
    /// at least `threshold` toward the anchor edge.
    pub fn on_pointer(&mut self, event: PointerEvent, anchor: Anchor, threshold: f32) -> Option<DrawerEvent> {
        match event {
            PointerEvent::Pressed => {
                self.pressed = true;
                self.start = self.last;
                None
            }
            PointerEvent::Moved(x) => {
                if self.pressed && self.start.is_none() {
                    self.start = Some(x);
                }
                self.last = Some(x);
                None
            }
            PointerEvent::Released => {
                let travel = match (self.start, self.last) {
                    (Some(start), Some(last)) if self.pressed => last - start,
                    _ => 0.0,
                };
                self.pressed = false;
                self.start = None;

                let toward_edge = match anchor {
                    Anchor::Start => -travel,
                    Anchor::End => travel,
                };
                (toward_edge >= threshold).then_some(DrawerEvent::SwipeClose)
            }
        }
    }
}
