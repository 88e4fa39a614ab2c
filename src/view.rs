//! The portfolio view: its two pieces of state and the handlers that change them.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use crate::contact::{Acknowledgement, ContactFields, ContactFormHandler, SubmitBlocked};
use crate::events::{ScrollSignal, ScrollSubscription};
use crate::models::profile::ProfileData;
use crate::render::{self, PageOptions, RenderedPage};
use crate::theme::{ThemeName, ThemeTokens};

/// Offsets strictly above this count as scrolled. No hysteresis, no debounce.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub theme: ThemeName,
    pub scrolled: bool,
}

impl ViewState {
    pub fn new(theme: ThemeName, scrolled: bool) -> Self {
        ViewState { theme, scrolled }
    }

    pub fn tokens(&self) -> &'static ThemeTokens {
        self.theme.tokens()
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn on_scroll(&mut self, offset_y: f64) {
        self.scrolled = offset_y > SCROLL_THRESHOLD;
    }
}

/// Something that can bring an element into view.
pub trait Viewport {
    fn has_element(&self, id: &str) -> bool;
    fn scroll_into_view(&mut self, id: &str);
}

/// A mounted portfolio view. Mounting subscribes to the scroll signal;
/// dropping the view (or calling [`PortfolioView::unmount`]) releases it.
pub struct PortfolioView {
    profile: Arc<ProfileData>,
    state: Rc<Cell<ViewState>>,
    contact: ContactFormHandler,
    _scroll: ScrollSubscription,
}

impl PortfolioView {
    pub fn mount(profile: Arc<ProfileData>, scroll: &ScrollSignal) -> Self {
        let state = Rc::new(Cell::new(ViewState::default()));
        let listener_state = Rc::clone(&state);
        let subscription = scroll.subscribe(move |offset_y| {
            let mut s = listener_state.get();
            s.on_scroll(offset_y);
            listener_state.set(s);
        });
        log::debug!("Mounted portfolio view for {}", profile.name);
        PortfolioView {
            profile,
            state,
            contact: ContactFormHandler::default(),
            _scroll: subscription,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state.get()
    }

    pub fn profile(&self) -> &ProfileData {
        &self.profile
    }

    pub fn toggle_theme(&mut self) {
        let mut s = self.state.get();
        s.toggle_theme();
        self.state.set(s);
    }

    /// Direct entry for a scroll offset, same effect as an event on the signal.
    pub fn on_scroll(&mut self, offset_y: f64) {
        let mut s = self.state.get();
        s.on_scroll(offset_y);
        self.state.set(s);
    }

    /// Ask `viewport` to scroll to `id`. Unknown ids are ignored.
    pub fn scroll_to_section(&self, id: &str, viewport: &mut impl Viewport) {
        if viewport.has_element(id) {
            viewport.scroll_into_view(id);
        } else {
            log::debug!("No section with id {:?}", id);
        }
    }

    pub fn submit_contact(&mut self, fields: &ContactFields) -> Result<Acknowledgement, SubmitBlocked> {
        self.contact.submit(fields)
    }

    pub fn acknowledgements(&self) -> u64 {
        self.contact.acknowledged()
    }

    pub fn render(&self, options: &PageOptions<'_>) -> RenderedPage {
        render::render_page(&self.profile, &self.state.get(), options)
    }

    pub fn unmount(self) {
        log::debug!("Unmounted portfolio view for {}", self.profile.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert_eq!(state.theme, ThemeName::Dark);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_scroll_threshold_boundary() {
        let mut state = ViewState::default();
        for (offset, expected) in [(0.0, false), (49.9, false), (50.0, false), (50.5, true), (51.0, true), (800.0, true), (10.0, false)] {
            state.on_scroll(offset);
            assert_eq!(state.scrolled, expected, "offset {}", offset);
        }
    }

    #[test]
    fn test_toggle_twice_restores_theme() {
        let mut state = ViewState::new(ThemeName::Light, true);
        state.toggle_theme();
        assert_eq!(state.theme, ThemeName::Dark);
        state.toggle_theme();
        assert_eq!(state, ViewState::new(ThemeName::Light, true));
    }

    #[test]
    fn test_toggle_resolves_new_tokens() {
        let mut state = ViewState::default();
        let before = state.tokens();
        state.toggle_theme();
        assert_ne!(state.tokens(), before);
        assert_eq!(state.tokens(), ThemeName::Light.tokens());
    }
}
