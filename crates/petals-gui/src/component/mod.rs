//! Reusable view components shared across pages.

pub mod cards;
pub mod footer;
pub mod nav;
