//! Logic behind the page's ambient affordances: menu hover color, fragment
//! anchors, the loading indicator and the catch-all error log.

use crate::prelude::StoreError;
use crate::telemetry::LogManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const MENU_HOVER: Rgb = Rgb(0x00, 0xff, 0xcc);
pub const MENU_IDLE: Rgb = Rgb(0xff, 0xff, 0xff);

pub fn menu_color(hovered: bool) -> Rgb {
    if hovered {
        MENU_HOVER
    } else {
        MENU_IDLE
    }
}

/// Fragment of an in-page anchor, or `None` for links that are not intercepted.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Index of the section an anchor points at. Unknown targets are a no-op.
pub fn resolve_anchor<S: AsRef<str>>(href: &str, sections: &[S]) -> Option<usize> {
    let fragment = fragment_target(href)?;
    sections
        .iter()
        .position(|section| section.as_ref() == fragment)
}

/// Visible from startup until the page-load read settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingIndicator {
    visible: bool,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self { visible: true }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.visible = loading;
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

/// Catch-all for errors nothing else handled.
pub fn report_uncaught(logger: &LogManager, message: impl Into<String>) {
    logger.report(&StoreError::Runtime(message.into()));
}
