//! Page views, one module per routed view.

pub mod article_detail;
pub mod contact;
pub mod home;
pub mod issue_archive;
pub mod issue_detail;

use iced::widget::{button, column, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::theme;
use crate::theme::typography::{SIZE_BODY, SIZE_LABEL, SIZE_SECTION};

/// Quiet back link shown at the top of detail pages.
fn back_link(label: &'static str) -> Element<'static, Message> {
    button(text(label).font(theme::SANS_MEDIUM).size(SIZE_LABEL))
        .padding(0)
        .style(theme::button_ghost)
        .on_press(Message::Back)
        .into()
}

/// Empty state for a detail page rendered without a selection. Should not
/// be reachable through normal navigation, but the view must still draw
/// something sensible.
fn missing_selection(headline: &'static str) -> Element<'static, Message> {
    column![
        text(headline).font(theme::SERIF).size(SIZE_SECTION),
        text("Nothing is open here. Head back to keep browsing.")
            .font(theme::SANS_LIGHT)
            .size(SIZE_BODY)
            .color(theme::GREY),
        button(text("Back to the magazine").size(SIZE_BODY))
            .padding([theme::SPACING_SM, theme::SPACING_LG])
            .style(theme::button_outline)
            .on_press(Message::Navigate(petals_core::View::Home)),
    ]
    .spacing(theme::SPACING_LG)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .padding([160.0, theme::PAGE_MARGIN])
    .into()
}
