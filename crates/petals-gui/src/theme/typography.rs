//! Typography.
//!
//! Serif display faces for headlines, the system sans for everything else.

use iced::Font;
use iced::font::{Family, Style, Weight};

/// Headline serif.
pub const SERIF: Font = Font {
    family: Family::Serif,
    ..Font::DEFAULT
};

/// Serif italic, used for pull quotes and captions.
pub const SERIF_ITALIC: Font = Font {
    family: Family::Serif,
    style: Style::Italic,
    ..Font::DEFAULT
};

/// Light sans for body copy and descriptions.
pub const SANS_LIGHT: Font = Font {
    weight: Weight::Light,
    ..Font::DEFAULT
};

/// Medium sans for labels, kickers, and nav links.
pub const SANS_MEDIUM: Font = Font {
    weight: Weight::Medium,
    ..Font::DEFAULT
};

/// Hero headline size.
pub const SIZE_HERO: f32 = 72.0;

/// Page title size.
pub const SIZE_PAGE_TITLE: f32 = 56.0;

/// Section heading size.
pub const SIZE_SECTION: f32 = 34.0;

/// Card title size.
pub const SIZE_CARD_TITLE: f32 = 22.0;

/// Body copy size.
pub const SIZE_BODY: f32 = 16.0;

/// Small label and kicker size.
pub const SIZE_LABEL: f32 = 12.0;
