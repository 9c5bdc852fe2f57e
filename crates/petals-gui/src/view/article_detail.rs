//! Article reading page.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length};

use petals_model::{Article, issue_by_number, next_article};

use crate::component::footer;
use crate::message::Message;
use crate::theme;
use crate::theme::typography::{
    SIZE_BODY, SIZE_CARD_TITLE, SIZE_LABEL, SIZE_PAGE_TITLE, SIZE_SECTION,
};

const BANNER_HEIGHT: f32 = 320.0;
const INSET_HEIGHT: f32 = 260.0;
const MEASURE: f32 = 720.0;

/// Opening paragraphs of the feature body, before the inset image.
const OPENING: [&str; 3] = [
    "The scent of tobacco is one of perfumery's great paradoxes: at once warm and cool, sweet and bitter, comforting and unsettling. It carries the weight of ritual; the pipe after dinner, the ceremonial offering, the quiet moment of reflection.",
    "In the gardens of 17th century Istanbul, tobacco was celebrated through elaborate rituals. The Ottoman tobacco ceremony created an olfactive landscape that perfumers would later seek to capture. The smoky sweetness, the honeyed warmth, the leathery depth: memories encoded in the molecule.",
    "Modern tobacco accords rely on a carefully orchestrated symphony of molecules. At the heart lies coumarin, responsible for that distinctive hay-like sweetness. Around it, perfumers layer vanillin for warmth, iso-quinoline for the smoky bite, and various musks for the lingering trail.",
];

const SUBHEADING: &str = "The Molecular Architecture";

/// Closing paragraphs, after the subheading.
const CLOSING: [&str; 2] = [
    "What makes tobacco compelling in perfumery is its ability to evoke specific memories. A tobacco note can transport the wearer to a grandfather's study, a Havana street, or an autumn evening by the fire.",
    "The challenge for modern perfumers lies in recreation without reproduction. Natural tobacco absolute carries regulatory restrictions. The art is in constructing an accord that feels authentic while being entirely synthetic.",
];

/// Asset reference behind the mid-story inset plate.
const INSET_IMAGE_REF: &str = "photo-1501443762994-82bd5dace89a";

pub fn page(article: Option<&Article>) -> Element<'_, Message> {
    let Some(article) = article else {
        return super::missing_selection("No article open");
    };

    let kicker = match issue_by_number(article.issue_number) {
        Some(issue) => format!(
            "{} · Issue {} · {}",
            article.category.label().to_uppercase(),
            issue.number,
            issue.caption()
        ),
        None => article.category.label().to_uppercase(),
    };

    let banner = container(Space::new())
        .style(theme::plate(theme::plate_tint(article.image_ref)))
        .width(Length::Fill)
        .height(BANNER_HEIGHT);

    let divider = container(Space::new())
        .style(theme::plate(theme::GREEN))
        .width(48.0)
        .height(2.0);

    let mut story = column![
        super::back_link("‹ Back"),
        text(kicker)
            .font(theme::SANS_MEDIUM)
            .size(SIZE_LABEL)
            .color(theme::GOLD),
        text(article.title)
            .font(theme::SERIF)
            .size(SIZE_PAGE_TITLE),
        text(article.subtitle)
            .font(theme::SERIF_ITALIC)
            .size(SIZE_CARD_TITLE)
            .color(theme::GREY),
        banner,
        text(article.description)
            .font(theme::SERIF_ITALIC)
            .size(SIZE_CARD_TITLE)
            .color(theme::DARK_GREY)
            .line_height(1.6),
        divider,
    ]
    .spacing(theme::SPACING_XL)
    .max_width(MEASURE);

    for paragraph in OPENING {
        story = story.push(body_paragraph(paragraph));
    }

    story = story.push(
        container(Space::new())
            .style(theme::plate(theme::plate_tint(INSET_IMAGE_REF)))
            .width(Length::Fill)
            .height(INSET_HEIGHT),
    );
    story = story.push(text(SUBHEADING).font(theme::SERIF).size(SIZE_SECTION));

    for paragraph in CLOSING {
        story = story.push(body_paragraph(paragraph));
    }

    if let Some(next) = next_article(article.id) {
        story = story.push(next_affordance(next));
    }

    column![
        container(story)
            .padding([theme::NAV_HEIGHT + theme::SPACING_XL, theme::PAGE_MARGIN])
            .width(Length::Fill)
            .align_x(Alignment::Center),
        footer::footer(),
    ]
    .width(Length::Fill)
    .into()
}

fn body_paragraph(copy: &'static str) -> Element<'static, Message> {
    text(copy)
        .font(theme::SANS_LIGHT)
        .size(SIZE_BODY)
        .line_height(1.9)
        .into()
}

/// End-of-story link into the next catalog entry.
fn next_affordance(next: &Article) -> Element<'static, Message> {
    column![
        text("NEXT")
            .font(theme::SANS_MEDIUM)
            .size(SIZE_LABEL)
            .color(theme::GREY),
        button(
            text(format!("{} →", next.title))
                .font(theme::SERIF)
                .size(SIZE_SECTION)
        )
        .padding(0)
        .style(theme::button_ghost)
        .on_press(Message::OpenArticle(next.id)),
    ]
    .spacing(theme::SPACING_SM)
    .padding([theme::SPACING_XXL, 0.0])
    .into()
}
