//! Message-level tests: drive `App::update` the way the runtime would and
//! assert on the resulting state.

use petals_core::{ScrollEdges, View};
use petals_gui::app::App;
use petals_gui::message::{ContactMessage, HeroMessage, Message, RailMessage};

fn app() -> App {
    App::new().0
}

fn send(app: &mut App, message: Message) {
    let _ = app.update(message);
}

#[test]
fn issue_detail_round_trip() {
    let mut app = app();
    send(&mut app, Message::Navigate(View::IssueArchive));
    send(&mut app, Message::OpenIssue(12));
    assert_eq!(app.state().router.view(), View::IssueDetail);
    assert_eq!(
        app.state().router.selected_issue().map(|i| i.number),
        Some(12)
    );

    send(&mut app, Message::Back);
    assert_eq!(app.state().router.view(), View::IssueArchive);
    assert!(app.state().router.selected_issue().is_none());

    // Nothing left to go back from.
    send(&mut app, Message::Back);
    assert_eq!(app.state().router.view(), View::IssueArchive);
}

#[test]
fn issues_do_not_open_from_home() {
    let mut app = app();
    send(&mut app, Message::OpenIssue(39));
    assert_eq!(app.state().router.view(), View::Home);
    assert!(app.state().router.selected_issue().is_none());
}

#[test]
fn unknown_catalog_ids_leave_state_untouched() {
    let mut app = app();
    send(&mut app, Message::OpenArticle(0));
    send(&mut app, Message::OpenArticle(999));
    assert_eq!(app.state().router.view(), View::Home);

    send(&mut app, Message::Navigate(View::IssueArchive));
    send(&mut app, Message::OpenIssue(0));
    send(&mut app, Message::OpenIssue(40));
    assert_eq!(app.state().router.view(), View::IssueArchive);
}

#[test]
fn articles_open_from_anywhere() {
    let mut app = app();
    send(&mut app, Message::Navigate(View::Contact));
    send(&mut app, Message::OpenArticle(7));
    assert_eq!(app.state().router.view(), View::ArticleDetail);
    assert_eq!(
        app.state().router.selected_article().map(|a| a.id),
        Some(7)
    );

    send(&mut app, Message::Back);
    assert_eq!(app.state().router.view(), View::Home);
}

#[test]
fn hero_arrows_wrap_around() {
    let mut app = app();
    send(&mut app, Message::Hero(HeroMessage::Prev));
    assert_eq!(app.state().home.hero.index(), 4);
    send(&mut app, Message::Hero(HeroMessage::Next));
    assert_eq!(app.state().home.hero.index(), 0);
}

#[test]
fn one_interval_of_ticks_advances_one_slide() {
    let mut app = app();
    // 120 ticks at the 50ms sampling step cover the 6s interval exactly.
    for _ in 0..120 {
        send(&mut app, Message::Hero(HeroMessage::Tick));
    }
    assert_eq!(app.state().home.hero.index(), 1);
}

#[test]
fn hover_pauses_the_autoplay_clock() {
    let mut app = app();
    send(&mut app, Message::Hero(HeroMessage::SetAutoAdvance(false)));
    for _ in 0..500 {
        send(&mut app, Message::Hero(HeroMessage::Tick));
    }
    assert_eq!(app.state().home.hero.index(), 0);

    send(&mut app, Message::Hero(HeroMessage::SetAutoAdvance(true)));
    for _ in 0..120 {
        send(&mut app, Message::Hero(HeroMessage::Tick));
    }
    assert_eq!(app.state().home.hero.index(), 1);
}

#[test]
fn leaving_home_remounts_the_hero() {
    let mut app = app();
    send(&mut app, Message::Hero(HeroMessage::JumpTo(3)));
    send(&mut app, Message::Navigate(View::IssueArchive));
    send(&mut app, Message::Navigate(View::Home));
    assert_eq!(app.state().home.hero.index(), 0);
    assert!(app.state().home.hero.is_auto_advancing());
}

#[test]
fn rail_scroll_updates_the_edge_affordances() {
    let mut app = app();
    assert!(!app.state().home.rail_edges.can_scroll_backward);

    let mid = ScrollEdges::from_metrics(300.0, 8000.0, 1200.0);
    send(&mut app, Message::Rail(RailMessage::Scrolled(mid)));
    assert!(app.state().home.rail_edges.can_scroll_backward);
    assert!(app.state().home.rail_edges.can_scroll_forward);

    let end = ScrollEdges::from_metrics(6800.0, 8000.0, 1200.0);
    send(&mut app, Message::Rail(RailMessage::Scrolled(end)));
    assert!(!app.state().home.rail_edges.can_scroll_forward);
}

#[test]
fn rail_arrow_commands_only_issue_scroll_tasks() {
    let mut app = app();
    // The arrows command the viewport; the affordances update from the
    // next scroll event, not from the command itself.
    send(&mut app, Message::Rail(RailMessage::ScrollForward));
    send(&mut app, Message::Rail(RailMessage::ScrollBackward));
    assert!(!app.state().home.rail_edges.can_scroll_backward);
    assert!(app.state().home.rail_edges.can_scroll_forward);
}

#[test]
fn reading_on_from_the_last_article_wraps_to_the_first() {
    let mut app = app();
    send(&mut app, Message::OpenArticle(12));
    let next = petals_model::next_article(12).map(|a| a.id);
    assert_eq!(next, Some(1));

    send(&mut app, Message::OpenArticle(1));
    assert_eq!(
        app.state().router.selected_article().map(|a| a.id),
        Some(1)
    );
}

#[test]
fn submitting_the_contact_form_clears_the_draft() {
    let mut app = app();
    send(&mut app, Message::Navigate(View::Contact));
    send(
        &mut app,
        Message::Contact(ContactMessage::NameChanged("Ada".into())),
    );
    send(
        &mut app,
        Message::Contact(ContactMessage::BodyChanged("Loved issue 39.".into())),
    );
    assert!(!app.state().contact.is_blank());

    send(&mut app, Message::Contact(ContactMessage::Submit));
    assert!(app.state().contact.is_blank());
}

#[test]
fn page_scroll_position_resets_on_navigation() {
    let mut app = app();
    send(&mut app, Message::PageScrolled(420.0));
    assert!(app.state().nav_is_solid());

    send(&mut app, Message::Navigate(View::Contact));
    assert!(!app.state().nav_is_solid());
}
