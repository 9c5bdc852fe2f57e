//! Top-level view router.
//!
//! The router is the single source of truth for which page is visible and
//! which article or issue is open. There is no URL or history integration;
//! "back" is a state reset, not a stack pop.
//!
//! Transition methods return whether the transition was honored so the
//! caller can run its per-navigation side effects (the GUI snaps the root
//! viewport to the top) only on actual changes.

use petals_model::{Article, Issue};

/// The mutually exclusive top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    IssueArchive,
    IssueDetail,
    ArticleDetail,
    Contact,
}

/// View state machine. Lives for the whole session; starts at [`View::Home`]
/// with nothing selected.
#[derive(Debug, Clone)]
pub struct Router {
    view: View,
    selected_article: Option<Article>,
    selected_issue: Option<Issue>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            view: View::Home,
            selected_article: None,
            selected_issue: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// The open article, if any. Detail views rendered without a selection
    /// must show a guarded empty state.
    pub fn selected_article(&self) -> Option<&Article> {
        self.selected_article.as_ref()
    }

    pub fn selected_issue(&self) -> Option<&Issue> {
        self.selected_issue.as_ref()
    }

    /// Jump to a top-level view, clearing any open article or issue.
    ///
    /// Re-selecting the current view with nothing open is a no-op.
    pub fn navigate(&mut self, view: View) -> bool {
        if self.view == view && self.selected_article.is_none() && self.selected_issue.is_none() {
            return false;
        }
        tracing::debug!(from = ?self.view, to = ?view, "navigate");
        self.view = view;
        self.selected_article = None;
        self.selected_issue = None;
        true
    }

    /// Open an article's detail page. Reachable from anywhere.
    pub fn open_article(&mut self, article: Article) -> bool {
        tracing::debug!(id = article.id, title = article.title, "open article");
        self.selected_article = Some(article);
        self.view = View::ArticleDetail;
        true
    }

    /// Open an issue's detail page. Only honored from the issue archive;
    /// elsewhere the request is ignored.
    pub fn open_issue(&mut self, issue: Issue) -> bool {
        if self.view != View::IssueArchive {
            return false;
        }
        tracing::debug!(number = issue.number, "open issue");
        self.selected_issue = Some(issue);
        self.view = View::IssueDetail;
        true
    }

    /// Leave a detail page: articles return home, issues return to the
    /// archive, and the corresponding selection is cleared. Anywhere else
    /// there is nothing to go back from.
    pub fn back(&mut self) -> bool {
        match self.view {
            View::ArticleDetail => {
                self.selected_article = None;
                self.view = View::Home;
                true
            }
            View::IssueDetail => {
                self.selected_issue = None;
                self.view = View::IssueArchive;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petals_model::{article_by_id, issue_by_number};

    fn article(id: u32) -> Article {
        article_by_id(id).cloned().expect("catalog article")
    }

    fn issue(number: u16) -> Issue {
        issue_by_number(number).expect("archive issue")
    }

    #[test]
    fn starts_at_home_with_nothing_selected() {
        let router = Router::new();
        assert_eq!(router.view(), View::Home);
        assert!(router.selected_article().is_none());
        assert!(router.selected_issue().is_none());
    }

    #[test]
    fn article_round_trip_restores_home() {
        let mut router = Router::new();
        assert!(router.open_article(article(1)));
        assert_eq!(router.view(), View::ArticleDetail);
        assert_eq!(router.selected_article().map(|a| a.id), Some(1));

        assert!(router.back());
        assert_eq!(router.view(), View::Home);
        assert!(router.selected_article().is_none());
    }

    #[test]
    fn issue_detail_is_only_reachable_from_the_archive() {
        let mut router = Router::new();
        assert!(!router.open_issue(issue(39)));
        assert_eq!(router.view(), View::Home);

        assert!(router.navigate(View::IssueArchive));
        assert!(router.open_issue(issue(39)));
        assert_eq!(router.view(), View::IssueDetail);
        assert_eq!(router.selected_issue().map(|i| i.number), Some(39));
    }

    #[test]
    fn back_from_issue_detail_returns_to_the_archive() {
        let mut router = Router::new();
        router.navigate(View::IssueArchive);
        router.open_issue(issue(12));

        assert!(router.back());
        assert_eq!(router.view(), View::IssueArchive);
        assert!(router.selected_issue().is_none());
    }

    #[test]
    fn back_is_a_no_op_outside_detail_views() {
        let mut router = Router::new();
        assert!(!router.back());
        router.navigate(View::Contact);
        assert!(!router.back());
        assert_eq!(router.view(), View::Contact);
    }

    #[test]
    fn navigation_clears_selections() {
        let mut router = Router::new();
        router.open_article(article(3));
        assert!(router.navigate(View::Contact));
        assert!(router.selected_article().is_none());
    }

    #[test]
    fn renavigating_to_the_current_view_is_not_honored() {
        let mut router = Router::new();
        assert!(!router.navigate(View::Home));
        router.navigate(View::IssueArchive);
        assert!(!router.navigate(View::IssueArchive));
    }
}
