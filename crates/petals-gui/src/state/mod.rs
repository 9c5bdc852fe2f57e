//! Application state.
//!
//! `AppState` is the root of all state: the view router plus per-view UI
//! state. Entering a view resets that view's UI state, which gives each
//! page fresh-mount semantics (the hero slider restarts at slide 0, the
//! contact draft clears) without any separate lifecycle machinery.

mod contact;
mod home;

pub use contact::ContactForm;
pub use home::HomeState;

use petals_core::{Router, View};
use petals_model::{article_by_id, issue_by_number};

/// Top-level application state.
pub struct AppState {
    /// Current view and open article/issue.
    pub router: Router,
    /// Home page UI state (hero slider, issue rail affordances).
    pub home: HomeState,
    /// Contact form draft.
    pub contact: ContactForm,
    /// Root viewport scroll offset; drives the nav bar's solid state.
    pub page_offset: f32,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            home: HomeState::new(),
            contact: ContactForm::default(),
            page_offset: 0.0,
        }
    }

    /// Whether the nav bar should render solid instead of floating over
    /// the hero.
    pub fn nav_is_solid(&self) -> bool {
        self.page_offset > crate::constants::NAV_SOLID_THRESHOLD
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Jump to a top-level view. Returns whether the transition was
    /// honored (and the viewport should snap to the top).
    pub fn navigate(&mut self, view: View) -> bool {
        let moved = self.router.navigate(view);
        if moved {
            self.on_view_entered();
        }
        moved
    }

    /// Open an article by id. Unknown ids leave the state untouched.
    pub fn open_article(&mut self, id: u32) -> bool {
        let Some(article) = article_by_id(id) else {
            tracing::warn!(id, "article not in catalog");
            return false;
        };
        let moved = self.router.open_article(article.clone());
        if moved {
            self.on_view_entered();
        }
        moved
    }

    /// Open an issue by number. Only honored from the archive; unknown
    /// numbers leave the state untouched.
    pub fn open_issue(&mut self, number: u16) -> bool {
        let Some(issue) = issue_by_number(number) else {
            tracing::warn!(number, "issue not in archive");
            return false;
        };
        let moved = self.router.open_issue(issue);
        if moved {
            self.on_view_entered();
        }
        moved
    }

    /// Leave the current detail page.
    pub fn back(&mut self) -> bool {
        let moved = self.router.back();
        if moved {
            self.on_view_entered();
        }
        moved
    }

    /// Fresh-mount reset for the view just entered.
    fn on_view_entered(&mut self) {
        self.page_offset = 0.0;
        match self.router.view() {
            View::Home => self.home = HomeState::new(),
            View::Contact => self.contact = ContactForm::default(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entering_home_remounts_the_hero() {
        let mut state = AppState::new();
        state.home.hero.next();
        assert_eq!(state.home.hero.index(), 1);

        state.navigate(View::Contact);
        state.navigate(View::Home);
        assert_eq!(state.home.hero.index(), 0);
    }

    #[test]
    fn unknown_article_id_is_guarded() {
        let mut state = AppState::new();
        assert!(!state.open_article(999));
        assert_eq!(state.router.view(), View::Home);
        assert!(state.router.selected_article().is_none());
    }

    #[test]
    fn navigation_resets_the_page_offset() {
        let mut state = AppState::new();
        state.page_offset = 420.0;
        assert!(state.navigate(View::IssueArchive));
        assert_eq!(state.page_offset, 0.0);
    }
}
