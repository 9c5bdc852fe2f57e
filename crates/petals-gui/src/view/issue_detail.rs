//! Single-issue page: cover plate, caption, and the issue's articles.

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Length};

use petals_model::{Issue, articles_in_issue};

use crate::component::{cards, footer};
use crate::message::Message;
use crate::theme;
use crate::theme::typography::{SIZE_BODY, SIZE_LABEL, SIZE_PAGE_TITLE, SIZE_SECTION};

pub fn page(issue: Option<&Issue>) -> Element<'_, Message> {
    let Some(issue) = issue else {
        return super::missing_selection("No issue open");
    };

    let cover = container(
        text(format!("No. {}", issue.number))
            .font(theme::SERIF)
            .size(SIZE_PAGE_TITLE)
            .color(theme::faded(theme::WHITE, 0.85)),
    )
    .style(theme::plate(theme::plate_tint(issue.image_ref)))
    .width(280.0)
    .height(360.0)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center);

    let masthead = column![
        text(issue.caption().to_uppercase())
            .font(theme::SANS_MEDIUM)
            .size(SIZE_LABEL)
            .color(theme::GOLD),
        text(format!("Issue {}", issue.number))
            .font(theme::SERIF)
            .size(SIZE_PAGE_TITLE),
    ]
    .spacing(theme::SPACING_SM);

    let contents = articles_in_issue(issue.number);
    let body: Element<'_, Message> = if contents.is_empty() {
        // Older issues have no digitized articles; say so instead of
        // padding the page with unrelated stories.
        column![
            text("Not yet digitized").font(theme::SERIF).size(SIZE_SECTION),
            text("The stories from this edition exist only in print. We are working through the archive.")
                .font(theme::SANS_LIGHT)
                .size(SIZE_BODY)
                .color(theme::GREY),
        ]
        .spacing(theme::SPACING_MD)
        .into()
    } else {
        let mut grid = column![].spacing(theme::SPACING_LG);
        for chunk in contents.chunks(3) {
            let mut shelf = row![].spacing(theme::SPACING_LG);
            for article in chunk {
                shelf = shelf.push(cards::article_card(article));
            }
            for _ in chunk.len()..3 {
                shelf = shelf.push(Space::new().width(Length::Fill));
            }
            grid = grid.push(shelf);
        }
        column![
            text("In This Issue").font(theme::SERIF).size(SIZE_SECTION),
            grid,
        ]
        .spacing(theme::SPACING_LG)
        .into()
    };

    column![
        column![
            super::back_link("‹ All Issues"),
            row![cover, masthead]
                .spacing(theme::SPACING_XXL)
                .align_y(Alignment::End),
            body,
        ]
        .spacing(theme::SPACING_XL)
        .padding([theme::NAV_HEIGHT + theme::SPACING_XL, theme::PAGE_MARGIN])
        .width(Length::Fill),
        footer::footer(),
    ]
    .width(Length::Fill)
    .into()
}
