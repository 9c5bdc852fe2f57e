//! Page footer.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::constants::{APP_NAME, CORPORATE_LABEL, CORPORATE_URL, FOUNDED, PUBLISHER, copyright};
use crate::message::Message;
use crate::theme;
use crate::theme::typography::{SIZE_LABEL, SIZE_SECTION};

/// Dark footer with the publisher attribution, shown at the bottom of
/// every page.
pub fn footer() -> Element<'static, Message> {
    let masthead = column![
        text(APP_NAME)
            .font(theme::SERIF)
            .size(SIZE_SECTION)
            .color(theme::WHITE),
        text(PUBLISHER)
            .font(theme::SANS_LIGHT)
            .size(SIZE_LABEL)
            .color(theme::faded(theme::WHITE, 0.5)),
    ]
    .spacing(theme::SPACING_SM);

    let corporate = button(
        text(CORPORATE_LABEL)
            .font(theme::SANS_MEDIUM)
            .size(SIZE_LABEL)
            .color(theme::GOLD),
    )
    .padding(0)
    .style(theme::button_ghost)
    .on_press(Message::OpenUrl(CORPORATE_URL.to_string()));

    let bottom_line = row![
        text(copyright()).size(SIZE_LABEL),
        Space::new().width(Length::Fill),
        text(FOUNDED).font(theme::SERIF_ITALIC).size(SIZE_LABEL),
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill);

    container(
        column![
            row![masthead, Space::new().width(Length::Fill), corporate]
                .align_y(Alignment::Center)
                .width(Length::Fill),
            bottom_line,
        ]
        .spacing(theme::SPACING_XXL),
    )
    .padding([theme::SPACING_XXL, theme::PAGE_MARGIN])
    .width(Length::Fill)
    .style(theme::footer_container)
    .into()
}
