//! Interaction logic for Petals Magazine.
//!
//! Everything stateful in the application that is not widget layout lives
//! here, framework-free and unit-testable:
//!
//! - [`carousel`] - the auto-advancing hero slider state machine
//! - [`scroll`] - edge detection for horizontal scroll rails
//! - [`router`] - the top-level view state machine
//!
//! Each component instance owns its state exclusively; there are no
//! module-level singletons.

pub mod carousel;
pub mod router;
pub mod scroll;

pub use carousel::{Carousel, Countdown};
pub use router::{Router, View};
pub use scroll::{EDGE_EPSILON, ScrollEdges};
