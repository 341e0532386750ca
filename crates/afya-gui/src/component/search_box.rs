//! Search box component.
//!
//! A text input with a clear button, shared by the posts and drugs screens.

use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::theme::{SPACING_XS, button_ghost, text_input_default};

// =============================================================================
// SEARCH BOX
// =============================================================================

/// Creates a search input with clear button.
///
/// The clear button only appears once text is entered.
///
/// # Arguments
///
/// * `value` - Current search text
/// * `placeholder` - Placeholder text
/// * `on_change` - Message factory for text changes
/// * `on_clear` - Message to send when the clear button is clicked
///
/// # Example
///
/// ```rust,ignore
/// use afya_gui::component::search_box;
///
/// let search = search_box(
///     &state.search_query,
///     "Search posts by title...",
///     Message::SearchChanged,
///     Message::SearchCleared,
/// );
/// ```
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_clear: M,
) -> Element<'a, M> {
    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding([8.0, 12.0])
        .width(Length::Fill)
        .style(text_input_default);

    let mut content = row![input].spacing(SPACING_XS).align_y(Alignment::Center);

    // Clear button (only shown when there's text)
    if !value.is_empty() {
        content = content.push(
            button(text("\u{2715}").size(14))
                .on_press(on_clear)
                .padding([4.0, 8.0])
                .style(button_ghost),
        );
    }

    content.into()
}
