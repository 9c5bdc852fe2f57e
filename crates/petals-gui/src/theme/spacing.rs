//! Spacing scale.
//!
//! A small fixed scale keeps the layout rhythm consistent across pages.

/// Extra small spacing (4px) - tight element grouping.
pub const SPACING_XS: f32 = 4.0;

/// Small spacing (8px) - related elements.
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing (16px) - standard element separation.
pub const SPACING_MD: f32 = 16.0;

/// Large spacing (24px) - section separation.
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing (32px) - major section breaks.
pub const SPACING_XL: f32 = 32.0;

/// Double extra large spacing (48px) - page-level separation.
pub const SPACING_XXL: f32 = 48.0;

/// Horizontal page margin.
pub const PAGE_MARGIN: f32 = 48.0;

/// Navigation bar height; pages below the hero pad their content by this
/// much so the floating bar never covers the headline.
pub const NAV_HEIGHT: f32 = 84.0;
