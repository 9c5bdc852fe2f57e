//! Home page UI state.

use petals_core::{Carousel, ScrollEdges};
use petals_model::hero_slides;

use crate::constants::HERO_INTERVAL;

/// UI state owned by the home page: the hero slider and the issue rail's
/// edge affordances. Recreated whenever the home page is entered, so the
/// hero always mounts at slide 0 with a running countdown.
pub struct HomeState {
    /// Hero slider over the five featured articles.
    pub hero: Carousel,
    /// Arrow affordances for the 39-issue horizontal rail.
    pub rail_edges: ScrollEdges,
}

impl HomeState {
    pub fn new() -> Self {
        Self {
            hero: Carousel::new(hero_slides().len(), HERO_INTERVAL),
            rail_edges: ScrollEdges::default(),
        }
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}
