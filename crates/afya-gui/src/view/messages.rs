//! Message inbox placeholder screen.

use iced::Element;

use crate::component::empty_state;
use crate::message::Message;

/// Renders the message inbox placeholder.
pub fn view_messages<'a>() -> Element<'a, Message> {
    empty_state("No Messages", "Conversations will appear here")
}
