//! Call log placeholder screen.

use iced::Element;

use crate::component::empty_state;
use crate::message::Message;

/// Renders the call log placeholder.
pub fn view_contact<'a>() -> Element<'a, Message> {
    empty_state("No Calls", "Calls with other members will appear here")
}
