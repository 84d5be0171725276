//! Navigation state machine.
//!
//! # Invariants
//! - `current_path` is always normalized (lower case, `#/` when empty).
//! - Each `navigate` call resets scroll, then notifies listeners in
//!   registration order. Navigation is synchronous.

use crate::route::page::{normalize_path, select_page, Page};
use log::debug;

/// Side effect run after every navigation (scroll to top).
pub trait ScrollReset {
    fn reset_to_top(&mut self);
}

/// Observer notified after every navigation.
pub trait NavigationListener {
    fn on_navigate(&mut self, page: Page, path: &str);
}

/// Scroll reset for hosts without a viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScroll;

impl ScrollReset for NoScroll {
    fn reset_to_top(&mut self) {}
}

pub struct Router {
    current_path: String,
    scroll: Box<dyn ScrollReset>,
    listeners: Vec<Box<dyn NavigationListener>>,
}

impl Router {
    /// Seeds the router from the initial fragment (`None` means root).
    pub fn new(initial_fragment: Option<&str>) -> Self {
        Self::with_scroll(initial_fragment, Box::new(NoScroll))
    }

    pub fn with_scroll(initial_fragment: Option<&str>, scroll: Box<dyn ScrollReset>) -> Self {
        Self {
            current_path: normalize_path(initial_fragment.unwrap_or_default()),
            scroll,
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn NavigationListener>) {
        self.listeners.push(listener);
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn current_page(&self) -> Page {
        select_page(&self.current_path)
    }

    /// Handles a fragment-change notification and returns the selected page.
    pub fn navigate(&mut self, fragment: &str) -> Page {
        self.current_path = normalize_path(fragment);
        let page = select_page(&self.current_path);
        debug!(
            "event=route_change module=route page={:?} path={}",
            page, self.current_path
        );
        self.scroll.reset_to_top();
        for listener in &mut self.listeners {
            listener.on_navigate(page, &self.current_path);
        }
        page
    }
}
