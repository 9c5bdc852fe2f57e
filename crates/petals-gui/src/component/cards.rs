//! Article and issue cards.
//!
//! Cover art renders as a deterministic color plate derived from the
//! catalog's asset reference; no image fetching is involved.

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use petals_model::{Article, Issue};

use crate::message::Message;
use crate::theme;
use crate::theme::typography::{SIZE_CARD_TITLE, SIZE_LABEL};

/// Cover plate of the given height for an asset reference, with a serif
/// label centered on the tint.
pub fn plate(image_ref: &str, label: String, height: f32) -> Element<'static, Message> {
    container(
        text(label)
            .font(theme::SERIF)
            .size(SIZE_CARD_TITLE)
            .color(theme::faded(theme::WHITE, 0.85)),
    )
    .style(theme::plate(theme::plate_tint(image_ref)))
    .width(Length::Fill)
    .height(height)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .into()
}

/// Clickable article card: cover plate, category kicker, title, subtitle.
pub fn article_card(article: &Article) -> Element<'static, Message> {
    let cover = plate(article.image_ref, article.category.label().to_string(), 220.0);

    let body = column![
        text(article.category.label().to_uppercase())
            .font(theme::SANS_MEDIUM)
            .size(SIZE_LABEL)
            .color(theme::GOLD),
        text(article.title).font(theme::SERIF).size(SIZE_CARD_TITLE),
        text(article.subtitle)
            .font(theme::SANS_LIGHT)
            .size(SIZE_LABEL)
            .color(theme::GREY),
    ]
    .spacing(theme::SPACING_SM)
    .padding(theme::SPACING_LG);

    button(column![cover, body].width(Length::Fill))
        .width(Length::Fill)
        .padding(0)
        .style(theme::button_card)
        .on_press(Message::OpenArticle(article.id))
        .into()
}

/// Clickable issue card for the rail and the archive grid. The press
/// message is supplied by the caller: the archive opens the issue, while
/// the home rail leads into the archive first.
pub fn issue_card(issue: &Issue, on_press: Message) -> Element<'static, Message> {
    let cover = plate(issue.image_ref, format!("No. {}", issue.number), 260.0);

    let body = column![
        text(format!("Issue {}", issue.number))
            .font(theme::SERIF)
            .size(SIZE_CARD_TITLE),
        text(issue.caption())
            .font(theme::SANS_LIGHT)
            .size(SIZE_LABEL)
            .color(theme::GREY),
    ]
    .spacing(theme::SPACING_XS)
    .padding(theme::SPACING_MD);

    button(column![cover, body].width(Length::Fixed(200.0)))
        .padding(0)
        .style(theme::button_card)
        .on_press(on_press)
        .into()
}
