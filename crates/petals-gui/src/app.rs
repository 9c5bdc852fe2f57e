//! Application core.
//!
//! `App` owns the root state and implements the Elm-architecture quartet
//! (new, update, view, subscription) plus title and theme hooks consumed
//! by the `iced::application` builder in `main`.

use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{Id, container, operation, scrollable, stack};
use iced::{Element, Length, Subscription, Task, Theme, time};

use petals_core::View;

use crate::component::nav;
use crate::constants::{APP_NAME, HERO_TICK, RAIL_SCROLL_STEP};
use crate::message::{ContactMessage, HeroMessage, Message, RailMessage};
use crate::state::AppState;
use crate::theme::editorial_theme;
use crate::view;

/// Widget id of the root page viewport.
pub fn root_scroll_id() -> Id {
    Id::new("page")
}

/// Widget id of the horizontal issue rail on the home page.
pub fn rail_scroll_id() -> Id {
    Id::new("issue-rail")
}

/// Snap the root viewport back to the top of the page.
fn snap_to_top() -> Task<Message> {
    operation::scroll_to::<Message>(root_scroll_id(), AbsoluteOffset { x: 0.0, y: 0.0 })
}

/// Main application.
pub struct App {
    state: AppState,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::new(),
            },
            Task::none(),
        )
    }

    /// Window title, suffixed with the current page.
    pub fn title(&self) -> String {
        let page = match self.state.router.view() {
            View::Home => None,
            View::IssueArchive => Some("Issues"),
            View::IssueDetail => Some("Issue"),
            View::ArticleDetail => Some("Article"),
            View::Contact => Some("Contact"),
        };
        match page {
            Some(page) => format!("{APP_NAME} - {page}"),
            None => APP_NAME.to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        editorial_theme()
    }

    /// The autoplay clock only runs while the home page is showing and
    /// the hero is auto-advancing, so leaving the page stops the timer.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.state.router.view() == View::Home && self.state.home.hero.is_auto_advancing() {
            time::every(HERO_TICK).map(|_| Message::Hero(HeroMessage::Tick))
        } else {
            Subscription::none()
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(view) => {
                if self.state.navigate(view) {
                    tracing::info!(?view, "navigate");
                    snap_to_top()
                } else {
                    Task::none()
                }
            }
            Message::OpenArticle(id) => {
                if self.state.open_article(id) {
                    tracing::info!(id, "open article");
                    snap_to_top()
                } else {
                    Task::none()
                }
            }
            Message::OpenIssue(number) => {
                if self.state.open_issue(number) {
                    tracing::info!(number, "open issue");
                    snap_to_top()
                } else {
                    Task::none()
                }
            }
            Message::Back => {
                if self.state.back() {
                    snap_to_top()
                } else {
                    Task::none()
                }
            }
            Message::Hero(hero) => self.update_hero(hero),
            Message::Rail(rail) => self.update_rail(rail),
            Message::Contact(contact) => self.update_contact(contact),
            Message::PageScrolled(offset) => {
                self.state.page_offset = offset;
                Task::none()
            }
            Message::OpenUrl(url) => {
                tracing::info!(url, "open external link");
                let _ = open::that(&url);
                Task::none()
            }
            Message::Noop => Task::none(),
        }
    }

    fn update_hero(&mut self, message: HeroMessage) -> Task<Message> {
        // A tick queued just before navigating away must not advance the
        // hero of a page that is no longer showing.
        if self.state.router.view() != View::Home {
            return Task::none();
        }
        let hero = &mut self.state.home.hero;
        match message {
            HeroMessage::Tick => {
                hero.tick(HERO_TICK);
            }
            HeroMessage::Next => hero.next(),
            HeroMessage::Prev => hero.prev(),
            HeroMessage::JumpTo(index) => hero.jump_to(index),
            HeroMessage::SetAutoAdvance(auto) => hero.set_auto_advance(auto),
        }
        Task::none()
    }

    fn update_rail(&mut self, message: RailMessage) -> Task<Message> {
        match message {
            RailMessage::Scrolled(edges) => {
                self.state.home.rail_edges = edges;
                Task::none()
            }
            RailMessage::ScrollBackward => operation::scroll_by::<Message>(
                rail_scroll_id(),
                AbsoluteOffset {
                    x: -RAIL_SCROLL_STEP,
                    y: 0.0,
                },
            ),
            RailMessage::ScrollForward => operation::scroll_by::<Message>(
                rail_scroll_id(),
                AbsoluteOffset {
                    x: RAIL_SCROLL_STEP,
                    y: 0.0,
                },
            ),
        }
    }

    fn update_contact(&mut self, message: ContactMessage) -> Task<Message> {
        let form = &mut self.state.contact;
        match message {
            ContactMessage::NameChanged(value) => form.name = value,
            ContactMessage::EmailChanged(value) => form.email = value,
            ContactMessage::SubjectChanged(value) => form.subject = value,
            ContactMessage::BodyChanged(value) => form.body = value,
            ContactMessage::Submit => {
                if !form.is_blank() {
                    tracing::info!(name = %form.name, subject = %form.subject, "contact submitted");
                    form.clear();
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let page: Element<'_, Message> = match self.state.router.view() {
            View::Home => view::home::page(&self.state.home),
            View::IssueArchive => view::issue_archive::page(),
            View::IssueDetail => view::issue_detail::page(self.state.router.selected_issue()),
            View::ArticleDetail => view::article_detail::page(self.state.router.selected_article()),
            View::Contact => view::contact::page(&self.state.contact),
        };

        let viewport = scrollable(page)
            .id(root_scroll_id())
            .on_scroll(|viewport| Message::PageScrolled(viewport.absolute_offset().y))
            .height(Length::Fill)
            .width(Length::Fill);

        // Nav floats over the scrolling page.
        let bar = nav::bar(self.state.router.view(), self.state.nav_is_solid());

        stack![viewport, container(bar).width(Length::Fill)].into()
    }

    /// Read-only access to the application state, for tests.
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_ignored_off_the_home_page() {
        let (mut app, _) = App::new();
        let _ = app.update(Message::Navigate(View::Contact));
        for _ in 0..200 {
            let _ = app.update(Message::Hero(HeroMessage::Tick));
        }
        let _ = app.update(Message::Navigate(View::Home));
        assert_eq!(app.state.home.hero.index(), 0);
    }

    #[test]
    fn title_tracks_the_current_page() {
        let (mut app, _) = App::new();
        assert_eq!(app.title(), "Petals");
        let _ = app.update(Message::Navigate(View::IssueArchive));
        assert_eq!(app.title(), "Petals - Issues");
    }
}
