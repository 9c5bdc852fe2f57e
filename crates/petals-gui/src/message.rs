//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and timer events flow through these types into
//! `App::update`.

use petals_core::{ScrollEdges, View};

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Jump to a top-level view (nav bar, banners).
    Navigate(View),

    /// Open an article's detail page by catalog id.
    OpenArticle(u32),

    /// Open an issue's detail page by issue number (archive only).
    OpenIssue(u16),

    /// Leave the current detail page.
    Back,

    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Hero slider messages.
    Hero(HeroMessage),

    /// Issue rail messages.
    Rail(RailMessage),

    /// Contact form messages.
    Contact(ContactMessage),

    // =========================================================================
    // Global events
    // =========================================================================
    /// Root viewport scrolled; drives the nav bar's solid state.
    PageScrolled(f32),

    /// Open an external link in the default browser.
    OpenUrl(String),

    /// No operation - used for placeholder actions.
    Noop,
}

/// Hero slider interactions and its autoplay clock.
#[derive(Debug, Clone, Copy)]
pub enum HeroMessage {
    /// Autoplay sampling tick.
    Tick,
    Next,
    Prev,
    /// Jump straight to a slide via the indicator bars.
    JumpTo(usize),
    /// Pause or resume autoplay (pointer entering or leaving the hero).
    SetAutoAdvance(bool),
}

/// Horizontal issue-rail interactions.
#[derive(Debug, Clone)]
pub enum RailMessage {
    /// The rail scrolled; carries freshly computed edge affordances.
    Scrolled(ScrollEdges),
    ScrollBackward,
    ScrollForward,
}

/// Contact form field edits and submission.
#[derive(Debug, Clone)]
pub enum ContactMessage {
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    BodyChanged(String),
    Submit,
}
