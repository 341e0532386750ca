//! Loading, error, and empty feedback states.
//!
//! Standardized feedback for when a fetch is in flight, a fetch failed, or
//! there is nothing to show.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::theme::{
    DANGER, GRAY_500, GRAY_700, SPACING_LG, SPACING_SM, WHITE, button_primary,
};

/// Centered loading indicator.
pub fn loading_state<'a, M: 'a>(title: &'a str) -> Element<'a, M> {
    let content = column![
        text(title).size(15).color(GRAY_700),
        Space::new().height(SPACING_SM),
        text("Loading...").size(13).color(GRAY_500),
    ]
    .align_x(Alignment::Center);

    centered(content.into())
}

/// Centered error message with a retry button.
pub fn error_state<'a, M: Clone + 'a>(
    title: &'a str,
    message: &'a str,
    retry: M,
) -> Element<'a, M> {
    let content = column![
        text(title).size(15).color(DANGER),
        Space::new().height(SPACING_SM),
        text(message).size(13).color(GRAY_500),
        Space::new().height(SPACING_LG),
        button(text("Retry").size(14).color(WHITE))
            .on_press(retry)
            .padding([8.0, 24.0])
            .style(button_primary),
    ]
    .align_x(Alignment::Center)
    .max_width(360.0);

    centered(content.into())
}

/// Centered placeholder for when there is nothing to show.
pub fn empty_state<'a, M: 'a>(title: &'a str, description: &'a str) -> Element<'a, M> {
    let content = column![
        text(title).size(16).color(GRAY_700),
        Space::new().height(SPACING_SM),
        text(description).size(13).color(GRAY_500),
    ]
    .align_x(Alignment::Center);

    centered(content.into())
}

fn centered<'a, M: 'a>(content: Element<'a, M>) -> Element<'a, M> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Shrink)
        .center_y(Length::Shrink)
        .into()
}
