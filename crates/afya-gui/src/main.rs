//! Afya - Community drug availability desktop client.
//!
//! A community board where people post drug requests and offers, browse a
//! drug catalog, and search both.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use afya_gui::App;
use iced::Size;
use iced::window;

/// Application entry point.
///
/// Initializes logging and runs the Iced application with a phone-shaped
/// default window.
pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Afya");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(420.0, 780.0),
            min_size: Some(Size::new(360.0, 640.0)),
            ..Default::default()
        })
        .run()
}
