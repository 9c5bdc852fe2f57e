//! Editorial theme for Petals Magazine.
//!
//! A cream-and-forest palette with serif display type, loosely following
//! the printed magazine. Style functions receive `&Theme` (or are built as
//! closures for parameterized styles) and return Iced widget styles.

pub mod spacing;
pub mod typography;

use iced::theme::Palette;
use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

pub use spacing::{
    NAV_HEIGHT, PAGE_MARGIN, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
    SPACING_XXL,
};
pub use typography::{SANS_LIGHT, SANS_MEDIUM, SERIF, SERIF_ITALIC};

// =============================================================================
// COLORS
// =============================================================================

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        a: 1.0,
    }
}

/// Fade a color to the given alpha.
pub const fn faded(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

pub const GREEN: Color = rgb(0x1B, 0x3D, 0x2F);
pub const GREEN_DEEP: Color = rgb(0x0F, 0x2A, 0x1E);
pub const CREAM: Color = rgb(0xF5, 0xF0, 0xEB);
pub const WARM_WHITE: Color = rgb(0xFA, 0xF8, 0xF5);
pub const CHARCOAL: Color = rgb(0x1A, 0x1A, 0x1A);
pub const DARK_GREY: Color = rgb(0x33, 0x33, 0x33);
pub const GREY: Color = rgb(0x88, 0x88, 0x88);
pub const GREY_LIGHT: Color = rgb(0xC8, 0xC4, 0xBE);
pub const GREY_MED: Color = rgb(0xA8, 0xA4, 0x9E);
pub const WHITE: Color = rgb(0xFF, 0xFF, 0xFF);
pub const GOLD: Color = rgb(0xC4, 0xA3, 0x5A);
pub const BRICK: Color = rgb(0xA0, 0x46, 0x3C);

const SHADOW: Color = Color {
    r: 27.0 / 255.0,
    g: 61.0 / 255.0,
    b: 47.0 / 255.0,
    a: 0.16,
};

/// Cover plate tints; covers render as deterministic color plates derived
/// from the asset reference (no network image loading).
const PLATE_TINTS: [Color; 6] = [
    rgb(0x2E, 0x4A, 0x3C), // moss
    rgb(0x5C, 0x4A, 0x3A), // tobacco
    rgb(0x3C, 0x46, 0x52), // slate
    rgb(0x6E, 0x4A, 0x42), // clay
    rgb(0x4A, 0x42, 0x52), // plum
    rgb(0x70, 0x5C, 0x38), // ochre
];

/// Pick the plate tint for a cover reference. Deterministic so the same
/// cover always renders the same plate.
pub fn plate_tint(image_ref: &str) -> Color {
    let sum: usize = image_ref.bytes().map(usize::from).sum();
    PLATE_TINTS[sum % PLATE_TINTS.len()]
}

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the editorial theme.
pub fn editorial_theme() -> Theme {
    Theme::custom(
        "Petals Editorial".to_string(),
        Palette {
            background: CREAM,
            text: CHARCOAL,
            primary: GREEN,
            success: GREEN,
            warning: GOLD,
            danger: BRICK,
        },
    )
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Ghost button - bare text that darkens on hover. Used for list rows and
/// quiet links.
pub fn button_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => CHARCOAL,
        _ => GREY,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Outline call-to-action - green border, fills on hover. The "Read This
/// Issue" treatment.
pub fn button_outline(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (Some(GREEN.into()), WHITE),
        _ => (None, GREEN),
    };
    button::Style {
        background,
        text_color,
        border: Border {
            color: GREEN,
            width: 1.5,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card button - cream surface that lifts with a deeper shadow on hover.
pub fn button_card(_theme: &Theme, status: button::Status) -> button::Style {
    let shadow = match status {
        button::Status::Hovered => Shadow {
            color: SHADOW,
            offset: Vector::new(0.0, 12.0),
            blur_radius: 48.0,
        },
        _ => Shadow {
            color: faded(SHADOW, 0.08),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
    };
    button::Style {
        background: Some(CREAM.into()),
        text_color: CHARCOAL,
        shadow,
        ..Default::default()
    }
}

/// Outline button for dark surfaces (the hero and the contact banner).
pub fn button_outline_on_dark(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (Some(WHITE.into()), CHARCOAL),
        _ => (None, WHITE),
    };
    button::Style {
        background,
        text_color,
        border: Border {
            color: WHITE,
            width: 1.5,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Arrow button for rails and the hero; parameterized on whether the
/// direction is currently available.
pub fn button_arrow(enabled: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let color = if !enabled {
            GREY_LIGHT
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => CHARCOAL,
                _ => DARK_GREY,
            }
        };
        button::Style {
            background: None,
            text_color: color,
            border: Border {
                color,
                width: 1.5,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Nav bar link; parameterized on active item and bar solidity (the bar
/// floats transparent over the hero until the page scrolls).
pub fn button_nav(active: bool, solid: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let text_color = match (solid, active || hovered) {
            (true, true) => CHARCOAL,
            (true, false) => GREY,
            (false, true) => WHITE,
            (false, false) => faded(WHITE, 0.55),
        };
        button::Style {
            background: None,
            text_color,
            ..Default::default()
        }
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Solid nav bar surface once the page has scrolled.
pub fn nav_bar(solid: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| {
        if solid {
            container::Style {
                background: Some(faded(CREAM, 0.94).into()),
                border: Border {
                    color: faded(GREY_LIGHT, 0.4),
                    width: 1.0,
                    ..Default::default()
                },
                ..Default::default()
            }
        } else {
            container::Style::default()
        }
    }
}

/// Footer surface.
pub fn footer_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(CHARCOAL.into()),
        text_color: Some(faded(WHITE, 0.25)),
        ..Default::default()
    }
}

/// Full-bleed cover plate for a given tint.
pub fn plate(tint: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(tint.into()),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Floating card surface with depth.
pub fn card_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(CREAM.into()),
        shadow: Shadow {
            color: faded(SHADOW, 0.08),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 40.0,
        },
        ..Default::default()
    }
}

/// Thin progress track under the hero indicators.
pub fn progress_track(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(faded(WHITE, 0.3).into()),
        ..Default::default()
    }
}

/// Filled portion of the hero progress indicator.
pub fn progress_fill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        ..Default::default()
    }
}

// =============================================================================
// INPUT STYLES
// =============================================================================

/// Contact form input - hairline border, warm surface.
pub fn text_input_editorial(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } => GREEN,
        text_input::Status::Hovered => GREY_MED,
        _ => GREY_LIGHT,
    };
    text_input::Style {
        background: WARM_WHITE.into(),
        border: Border {
            color: border_color,
            width: 1.5,
            ..Default::default()
        },
        icon: GREY,
        placeholder: GREY_MED,
        value: CHARCOAL,
        selection: faded(GREEN, 0.2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plate_tint_is_deterministic() {
        let a = plate_tint("photo-1559825481-12a05cc00344");
        let b = plate_tint("photo-1559825481-12a05cc00344");
        assert_eq!(a, b);
    }
}
