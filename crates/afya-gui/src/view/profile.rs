//! Profile screen.

use iced::widget::{Space, button, column, container, text, text_input};
use iced::{Element, Length};

use crate::message::{Message, ProfileMessage};
use crate::state::ProfileViewState;
use crate::theme::{
    GRAY_700, GRAY_900, SPACING_MD, SPACING_SM, SPACING_XS, button_primary, text_input_default,
};

/// Renders the profile form.
pub fn view_profile(profile: &ProfileViewState) -> Element<'_, Message> {
    let save = button(container(text("Save").size(14)).center_x(Length::Fill))
        .on_press(Message::Profile(ProfileMessage::SaveClicked))
        .padding([10.0, 0.0])
        .width(Length::Fill)
        .style(button_primary);

    column![
        text("Profile").size(20).color(GRAY_900),
        Space::new().height(SPACING_MD),
        field("First name", &profile.first_name, |value| {
            Message::Profile(ProfileMessage::FirstNameChanged(value))
        }),
        field("Last name", &profile.last_name, |value| {
            Message::Profile(ProfileMessage::LastNameChanged(value))
        }),
        field("Phone number", &profile.phone, |value| {
            Message::Profile(ProfileMessage::PhoneChanged(value))
        }),
        save,
    ]
    .spacing(SPACING_SM)
    .padding(SPACING_MD)
    .into()
}

/// A labeled text input.
fn field<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    column![
        text(label).size(12).color(GRAY_700),
        Space::new().height(SPACING_XS),
        text_input("", value)
            .on_input(on_change)
            .padding([8.0, 10.0])
            .style(text_input_default),
    ]
    .into()
}
