//! Home page: hero slider, editorial sections, the issue rail, and the
//! contact banner, stacked into one scrolling column.

use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{
    Scrollable, Space, button, column, container, mouse_area, row, stack, text,
};
use iced::{Alignment, Element, Length};

use petals_core::{ScrollEdges, View};
use petals_model::{Article, articles, hero_slides, issues, latest_issue};

use crate::app::rail_scroll_id;
use crate::component::{cards, footer};
use crate::message::{HeroMessage, Message, RailMessage};
use crate::state::HomeState;
use crate::theme;
use crate::theme::typography::{SIZE_BODY, SIZE_HERO, SIZE_LABEL, SIZE_SECTION};

const HERO_HEIGHT: f32 = 560.0;
const INDICATOR_WIDTH: f32 = 48.0;

pub fn page(home: &HomeState) -> Element<'_, Message> {
    column![
        hero(home),
        latest_section(),
        sustainability_banner(),
        issue_out_banner(),
        story_grid(),
        pull_quote(),
        issue_rail(home.rail_edges),
        from_the_archive(),
        contact_banner(),
        footer::footer(),
    ]
    .width(Length::Fill)
    .into()
}

// =============================================================================
// Hero slider
// =============================================================================

fn hero(home: &HomeState) -> Element<'_, Message> {
    let slides = hero_slides();
    let current: &Article = slides[home.hero.index()];

    let backdrop = container(Space::new())
        .style(theme::plate(theme::plate_tint(current.image_ref)))
        .width(Length::Fill)
        .height(HERO_HEIGHT);

    let kicker = format!(
        "{} · Issue {}",
        current.category.label().to_uppercase(),
        current.issue_number
    );

    let headline = column![
        text(kicker)
            .font(theme::SANS_MEDIUM)
            .size(SIZE_LABEL)
            .color(theme::GOLD),
        text(current.title)
            .font(theme::SERIF)
            .size(SIZE_HERO)
            .color(theme::WHITE),
        text(current.subtitle)
            .font(theme::SERIF_ITALIC)
            .size(SIZE_BODY)
            .color(theme::faded(theme::WHITE, 0.7)),
        button(text("Read Article").size(SIZE_BODY))
            .padding([theme::SPACING_SM, theme::SPACING_XL])
            .style(theme::button_outline_on_dark)
            .on_press(Message::OpenArticle(current.id)),
    ]
    .spacing(theme::SPACING_LG)
    .max_width(820.0);

    let controls = row![
        hero_arrow("‹", HeroMessage::Prev),
        hero_arrow("›", HeroMessage::Next),
        Space::new().width(Length::Fill),
        indicators(home),
    ]
    .spacing(theme::SPACING_MD)
    .align_y(Alignment::Center)
    .width(Length::Fill);

    let overlay = container(
        column![headline, controls]
            .spacing(theme::SPACING_XXL)
            .width(Length::Fill),
    )
    .padding([theme::SPACING_XXL, theme::PAGE_MARGIN])
    .width(Length::Fill)
    .height(HERO_HEIGHT)
    .align_y(Alignment::End);

    mouse_area(stack![backdrop, overlay])
        .on_enter(Message::Hero(HeroMessage::SetAutoAdvance(false)))
        .on_exit(Message::Hero(HeroMessage::SetAutoAdvance(true)))
        .into()
}

fn hero_arrow(glyph: &'static str, message: HeroMessage) -> Element<'static, Message> {
    button(text(glyph).size(22.0))
        .padding([theme::SPACING_XS, theme::SPACING_MD])
        .style(theme::button_nav(false, false))
        .on_press(Message::Hero(message))
        .into()
}

/// One indicator bar per slide. Bars before the current slide are full,
/// the current bar fills with the countdown's progress, later bars are
/// empty tracks.
fn indicators(home: &HomeState) -> Element<'_, Message> {
    let index = home.hero.index();
    let mut bars = row![].spacing(theme::SPACING_SM).align_y(Alignment::Center);

    for slide in 0..home.hero.slide_count() {
        let fill = if slide < index {
            1.0
        } else if slide == index {
            home.hero.progress()
        } else {
            0.0
        };

        let track = stack![
            container(Space::new())
                .style(theme::progress_track)
                .width(INDICATOR_WIDTH)
                .height(3.0),
            container(Space::new())
                .style(theme::progress_fill)
                .width(INDICATOR_WIDTH * fill)
                .height(3.0),
        ];

        bars = bars.push(
            button(track)
                .padding([theme::SPACING_SM, 0.0])
                .style(|_theme, _status| iced::widget::button::Style::default())
                .on_press(Message::Hero(HeroMessage::JumpTo(slide))),
        );
    }

    bars.into()
}

// =============================================================================
// Issue rail
// =============================================================================

fn issue_rail(edges: ScrollEdges) -> Element<'static, Message> {
    let heading = row![
        text("The Archive").font(theme::SERIF).size(SIZE_SECTION),
        Space::new().width(Length::Fill),
        rail_arrow("‹", edges.can_scroll_backward, RailMessage::ScrollBackward),
        rail_arrow("›", edges.can_scroll_forward, RailMessage::ScrollForward),
        button(text("All Issues").font(theme::SANS_MEDIUM).size(SIZE_LABEL))
            .padding(0)
            .style(theme::button_ghost)
            .on_press(Message::Navigate(View::IssueArchive)),
    ]
    .spacing(theme::SPACING_MD)
    .align_y(Alignment::Center)
    .width(Length::Fill);

    let mut lane = row![].spacing(theme::SPACING_LG);
    for issue in issues() {
        // Issue pages open from inside the archive, so the rail leads
        // there rather than straight into a detail page.
        lane = lane.push(cards::issue_card(&issue, Message::Navigate(View::IssueArchive)));
    }

    let rail = Scrollable::new(lane.padding([theme::SPACING_SM, 0.0]))
        .direction(Direction::Horizontal(Scrollbar::new()))
        .id(rail_scroll_id())
        .on_scroll(rail_scrolled)
        .width(Length::Fill);

    column![heading, rail]
        .spacing(theme::SPACING_LG)
        .padding([theme::SPACING_XXL, theme::PAGE_MARGIN])
        .width(Length::Fill)
        .into()
}

fn rail_scrolled(viewport: Viewport) -> Message {
    let edges = ScrollEdges::from_metrics(
        viewport.absolute_offset().x,
        viewport.content_bounds().width,
        viewport.bounds().width,
    );
    Message::Rail(RailMessage::Scrolled(edges))
}

fn rail_arrow(glyph: &'static str, enabled: bool, message: RailMessage) -> Element<'static, Message> {
    button(text(glyph).size(18.0))
        .padding([theme::SPACING_XS, theme::SPACING_MD])
        .style(theme::button_arrow(enabled))
        .on_press_maybe(enabled.then_some(Message::Rail(message)))
        .into()
}

// =============================================================================
// Editorial sections
// =============================================================================

/// "Latest" split: one featured story beside a stack of compact rows.
fn latest_section() -> Element<'static, Message> {
    let catalog = articles();
    let featured = &catalog[0];

    let mut side = column![].spacing(theme::SPACING_MD).width(Length::FillPortion(2));
    for article in &catalog[1..4] {
        side = side.push(thumbnail_row(article));
    }

    let section = row![
        container(cards::article_card(featured)).width(Length::FillPortion(3)),
        side,
    ]
    .spacing(theme::SPACING_XL);

    column![
        text("LATEST")
            .font(theme::SANS_MEDIUM)
            .size(SIZE_LABEL)
            .color(theme::GOLD),
        section,
    ]
    .spacing(theme::SPACING_LG)
    .padding([theme::SPACING_XXL, theme::PAGE_MARGIN])
    .width(Length::Fill)
    .into()
}

/// Compact story row: small cover square beside title and category.
fn thumbnail_row(article: &Article) -> Element<'static, Message> {
    let square = container(Space::new())
        .style(theme::plate(theme::plate_tint(article.image_ref)))
        .width(72.0)
        .height(72.0);

    let copy = column![
        text(article.category.label().to_uppercase())
            .font(theme::SANS_MEDIUM)
            .size(SIZE_LABEL)
            .color(theme::GOLD),
        text(article.title).font(theme::SERIF).size(SIZE_BODY),
    ]
    .spacing(theme::SPACING_XS);

    button(
        row![square, copy]
            .spacing(theme::SPACING_MD)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(theme::SPACING_SM)
    .style(theme::button_card)
    .on_press(Message::OpenArticle(article.id))
    .into()
}

/// Full-bleed banner for the sustainability lead story.
fn sustainability_banner() -> Element<'static, Message> {
    let story = &articles()[3];
    container(
        column![
            text(story.category.label().to_uppercase())
                .font(theme::SANS_MEDIUM)
                .size(SIZE_LABEL)
                .color(theme::GOLD),
            text(story.title)
                .font(theme::SERIF)
                .size(SIZE_SECTION)
                .color(theme::WHITE),
            text(story.description)
                .font(theme::SANS_LIGHT)
                .size(SIZE_BODY)
                .color(theme::faded(theme::WHITE, 0.7)),
            button(text("Read the Story").size(SIZE_BODY))
                .padding([theme::SPACING_SM, theme::SPACING_XL])
                .style(theme::button_outline_on_dark)
                .on_press(Message::OpenArticle(story.id)),
        ]
        .spacing(theme::SPACING_LG)
        .max_width(640.0),
    )
    .style(theme::plate(theme::plate_tint(story.image_ref)))
    .padding([theme::SPACING_XXL * 2.0, theme::PAGE_MARGIN])
    .width(Length::Fill)
    .into()
}

/// Slim announcement strip for the current issue.
fn issue_out_banner() -> Element<'static, Message> {
    let latest = latest_issue();
    container(
        row![
            text(format!("Issue {} is out · {}", latest.number, latest.caption()))
                .font(theme::SERIF_ITALIC)
                .size(SIZE_BODY),
            Space::new().width(Length::Fill),
            button(text("Browse the Archive").font(theme::SANS_MEDIUM).size(SIZE_LABEL))
                .padding(0)
                .style(theme::button_ghost)
                .on_press(Message::Navigate(View::IssueArchive)),
        ]
        .align_y(Alignment::Center)
        .width(Length::Fill),
    )
    .style(theme::card_surface)
    .padding([theme::SPACING_LG, theme::PAGE_MARGIN])
    .width(Length::Fill)
    .into()
}

/// Three-across story card grid.
fn story_grid() -> Element<'static, Message> {
    let latest = latest_issue();
    let heading = column![
        text("IN THIS ISSUE")
            .font(theme::SANS_MEDIUM)
            .size(SIZE_LABEL)
            .color(theme::GOLD),
        text(format!("Issue {} · {}", latest.number, latest.caption()))
            .font(theme::SERIF)
            .size(SIZE_SECTION),
    ]
    .spacing(theme::SPACING_SM);

    let mut shelf = row![].spacing(theme::SPACING_LG);
    for article in &articles()[4..7] {
        shelf = shelf.push(cards::article_card(article));
    }

    column![heading, shelf]
        .spacing(theme::SPACING_XL)
        .padding([theme::SPACING_XXL, theme::PAGE_MARGIN])
        .width(Length::Fill)
        .into()
}

fn pull_quote() -> Element<'static, Message> {
    container(
        column![
            text("\u{201C}Scent is the most stubborn of the senses. It refuses to forget.\u{201D}")
                .font(theme::SERIF_ITALIC)
                .size(SIZE_SECTION),
            text("Editor's Letter, Issue 39")
                .font(theme::SANS_MEDIUM)
                .size(SIZE_LABEL)
                .color(theme::GREY),
        ]
        .spacing(theme::SPACING_MD)
        .align_x(Alignment::Center)
        .max_width(760.0),
    )
    .padding([theme::SPACING_XXL, theme::PAGE_MARGIN])
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .into()
}

/// Back-catalog list rows for the older digitized stories.
fn from_the_archive() -> Element<'static, Message> {
    let mut rows = column![].spacing(theme::SPACING_SM);
    for article in &articles()[7..] {
        rows = rows.push(
            button(
                row![
                    text(article.title).font(theme::SERIF).size(SIZE_BODY),
                    Space::new().width(Length::Fill),
                    text(article.category.label().to_uppercase())
                        .font(theme::SANS_MEDIUM)
                        .size(SIZE_LABEL),
                ]
                .align_y(Alignment::Center)
                .width(Length::Fill),
            )
            .width(Length::Fill)
            .padding([theme::SPACING_MD, 0.0])
            .style(theme::button_ghost)
            .on_press(Message::OpenArticle(article.id)),
        );
    }

    column![
        text("From the Archive").font(theme::SERIF).size(SIZE_SECTION),
        rows,
    ]
    .spacing(theme::SPACING_LG)
    .padding([theme::SPACING_XXL, theme::PAGE_MARGIN])
    .width(Length::Fill)
    .into()
}

fn contact_banner() -> Element<'static, Message> {
    container(
        column![
            text("From Our Readers")
                .font(theme::SERIF)
                .size(SIZE_SECTION)
                .color(theme::WHITE),
            text("Questions, story ideas, or a favorite accord? Write to the editors.")
                .font(theme::SANS_LIGHT)
                .size(SIZE_BODY)
                .color(theme::faded(theme::WHITE, 0.7)),
            button(text("Contact Us").size(SIZE_BODY))
                .padding([theme::SPACING_SM, theme::SPACING_XL])
                .style(theme::button_outline_on_dark)
                .on_press(Message::Navigate(View::Contact)),
        ]
        .spacing(theme::SPACING_LG)
        .align_x(Alignment::Center),
    )
    .style(theme::plate(theme::GREEN))
    .padding([theme::SPACING_XXL * 2.0, theme::PAGE_MARGIN])
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .into()
}
