//! Petals Magazine - Desktop Editorial Reader
//!
//! A single-window reader for the Petals fragrance magazine: hero slider,
//! issue archive, article pages, and a contact form over a compiled-in
//! catalog.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

use iced::Size;
use iced::window;
use petals_gui::app::App;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Petals Magazine");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(1280.0, 860.0),
            min_size: Some(Size::new(1024.0, 700.0)),
            ..Default::default()
        })
        .run()
}
