//! Issue archive: every back issue, newest first, in a grid.

use iced::widget::{Space, column, row, text};
use iced::{Element, Length};

use petals_model::{ISSUE_COUNT, issues};

use crate::component::{cards, footer};
use crate::message::Message;
use crate::theme;
use crate::theme::typography::{SIZE_BODY, SIZE_LABEL, SIZE_PAGE_TITLE};

const COLUMNS: usize = 5;

pub fn page() -> Element<'static, Message> {
    let heading = column![
        text("THE COMPLETE COLLECTION")
            .font(theme::SANS_MEDIUM)
            .size(SIZE_LABEL)
            .color(theme::GOLD),
        text("All Issues").font(theme::SERIF).size(SIZE_PAGE_TITLE),
        text(format!("{ISSUE_COUNT} editions since 2016"))
            .font(theme::SANS_LIGHT)
            .size(SIZE_BODY)
            .color(theme::GREY),
    ]
    .spacing(theme::SPACING_SM);

    let all = issues();
    let mut grid = column![].spacing(theme::SPACING_LG);
    for chunk in all.chunks(COLUMNS) {
        let mut shelf = row![].spacing(theme::SPACING_LG);
        for issue in chunk {
            shelf = shelf.push(cards::issue_card(issue, Message::OpenIssue(issue.number)));
        }
        for _ in chunk.len()..COLUMNS {
            shelf = shelf.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(shelf);
    }

    column![
        column![heading, grid]
            .spacing(theme::SPACING_XL)
            .padding([theme::NAV_HEIGHT + theme::SPACING_XL, theme::PAGE_MARGIN])
            .width(Length::Fill),
        footer::footer(),
    ]
    .width(Length::Fill)
    .into()
}
