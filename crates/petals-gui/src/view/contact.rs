//! Contact page: address block and a simple message form.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::component::footer;
use crate::constants::{CORPORATE_LABEL, CORPORATE_URL, PUBLISHER};
use crate::message::{ContactMessage, Message};
use crate::state::ContactForm;
use crate::theme;
use crate::theme::typography::{SIZE_BODY, SIZE_LABEL, SIZE_PAGE_TITLE};

const FORM_WIDTH: f32 = 560.0;

pub fn page(form: &ContactForm) -> Element<'_, Message> {
    let heading = column![
        text("WRITE TO US")
            .font(theme::SANS_MEDIUM)
            .size(SIZE_LABEL)
            .color(theme::GOLD),
        text("Contact").font(theme::SERIF).size(SIZE_PAGE_TITLE),
        text(PUBLISHER)
            .font(theme::SANS_LIGHT)
            .size(SIZE_BODY)
            .color(theme::GREY),
        button(
            text(CORPORATE_LABEL)
                .font(theme::SANS_MEDIUM)
                .size(SIZE_LABEL)
        )
        .padding(0)
        .style(theme::button_ghost)
        .on_press(Message::OpenUrl(CORPORATE_URL.to_string())),
    ]
    .spacing(theme::SPACING_SM);

    let fields = column![
        field("Name", "Your name", &form.name, ContactMessage::NameChanged),
        field(
            "Email",
            "you@example.com",
            &form.email,
            ContactMessage::EmailChanged,
        ),
        field(
            "Subject",
            "What is this about?",
            &form.subject,
            ContactMessage::SubjectChanged,
        ),
        field(
            "Message",
            "Tell us what's on your mind",
            &form.body,
            ContactMessage::BodyChanged,
        ),
        row![
            button(text("Send Message").size(SIZE_BODY))
                .padding([theme::SPACING_SM, theme::SPACING_XL])
                .style(theme::button_outline)
                .on_press_maybe((!form.is_blank()).then_some(Message::Contact(
                    ContactMessage::Submit
                ))),
        ],
    ]
    .spacing(theme::SPACING_LG)
    .width(FORM_WIDTH);

    let card = container(fields)
        .style(theme::card_surface)
        .padding(theme::SPACING_XL);

    column![
        column![heading, card]
            .spacing(theme::SPACING_XL)
            .align_x(Alignment::Center)
            .padding([theme::NAV_HEIGHT + theme::SPACING_XL, theme::PAGE_MARGIN])
            .width(Length::Fill),
        footer::footer(),
    ]
    .width(Length::Fill)
    .into()
}

fn field<'a>(
    label: &'static str,
    placeholder: &'static str,
    value: &'a str,
    on_input: fn(String) -> ContactMessage,
) -> Element<'a, Message> {
    column![
        text(label.to_uppercase())
            .font(theme::SANS_MEDIUM)
            .size(SIZE_LABEL)
            .color(theme::GREY),
        text_input(placeholder, value)
            .on_input(move |v| Message::Contact(on_input(v)))
            .padding(theme::SPACING_MD)
            .size(SIZE_BODY)
            .style(theme::text_input_editorial),
    ]
    .spacing(theme::SPACING_XS)
    .into()
}
