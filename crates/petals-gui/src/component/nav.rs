//! Floating navigation bar.
//!
//! The bar overlays the top of every page. Over the hero it renders
//! transparent with light text; once the page scrolls past the threshold
//! it turns solid cream with dark text.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};

use petals_core::View;

use crate::constants::{APP_NAME, CORPORATE_LABEL, CORPORATE_URL};
use crate::message::Message;
use crate::theme;
use crate::theme::typography::SIZE_LABEL;

/// Builds the navigation bar for the current view.
pub fn bar(current: View, solid: bool) -> Element<'static, Message> {
    let brand = button(text(APP_NAME).font(theme::SERIF).size(26.0))
        .padding(0)
        .style(theme::button_nav(true, solid))
        .on_press(Message::Navigate(View::Home));

    let links = row![
        link("Journal", View::Home, current == View::Home, solid),
        link(
            "Archive",
            View::IssueArchive,
            matches!(current, View::IssueArchive | View::IssueDetail),
            solid,
        ),
        link("Contact", View::Contact, current == View::Contact, solid),
        corporate_link(solid),
    ]
    .spacing(theme::SPACING_XL)
    .align_y(Alignment::Center);

    container(
        row![brand, Space::new().width(Length::Fill), links]
            .align_y(Alignment::Center)
            .width(Length::Fill),
    )
    .padding([0.0, theme::PAGE_MARGIN])
    .height(theme::NAV_HEIGHT)
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .style(theme::nav_bar(solid))
    .into()
}

fn link(label: &'static str, target: View, active: bool, solid: bool) -> Element<'static, Message> {
    button(text(label).font(theme::SANS_MEDIUM).size(SIZE_LABEL))
        .padding(0)
        .style(theme::button_nav(active, solid))
        .on_press(Message::Navigate(target))
        .into()
}

fn corporate_link(solid: bool) -> Element<'static, Message> {
    button(text(CORPORATE_LABEL).font(theme::SANS_MEDIUM).size(SIZE_LABEL))
        .padding(0)
        .style(theme::button_nav(false, solid))
        .on_press(Message::OpenUrl(CORPORATE_URL.to_string()))
        .into()
}
