//! Post composition screen.

use iced::widget::{Space, button, column, container, pick_list, row, scrollable, text, text_input};
use iced::{Element, Length};

use afya_model::PostType;

use crate::message::{ComposeMessage, Message};
use crate::state::{ComposePhase, ComposeViewState, Screen};
use crate::theme::{
    DANGER, GRAY_500, GRAY_700, GRAY_900, SPACING_MD, SPACING_SM, SPACING_XS, SUCCESS,
    button_ghost, button_primary, button_secondary, text_input_default,
};

/// Renders the post composition form.
pub fn view_compose(compose: &ComposeViewState) -> Element<'_, Message> {
    let header = row![
        button(text("Back").size(13))
            .on_press(Message::Navigate(Screen::Posts))
            .padding([4.0, 8.0])
            .style(button_ghost),
        Space::new().width(SPACING_SM),
        text("New Post").size(20).color(GRAY_900),
    ];

    let type_row = column![
        text("Post type").size(12).color(GRAY_700),
        Space::new().height(SPACING_XS),
        pick_list(&PostType::ALL[..], Some(compose.post_type), |post_type| {
            Message::Compose(ComposeMessage::PostTypeSelected(post_type))
        })
        .text_size(13)
        .padding([8.0, 10.0])
        .width(Length::Fill),
    ];

    let submit = button(container(text("Submit").size(14)).center_x(Length::Fill))
        .on_press_maybe(
            compose
                .can_submit()
                .then_some(Message::Compose(ComposeMessage::SubmitClicked)),
        )
        .padding([10.0, 0.0])
        .width(Length::Fill)
        .style(button_primary);

    let form = column![
        field("Title", "What do you need or offer?", &compose.title, |value| {
            Message::Compose(ComposeMessage::TitleChanged(value))
        }),
        field("Drug name", "e.g. Paracetamol", &compose.drug_name, |value| {
            Message::Compose(ComposeMessage::DrugNameChanged(value))
        }),
        field("Details", "Dosage, quantity, urgency...", &compose.content, |value| {
            Message::Compose(ComposeMessage::ContentChanged(value))
        }),
        field("Location", "Town or area", &compose.location, |value| {
            Message::Compose(ComposeMessage::LocationChanged(value))
        }),
        field(
            "Image URL (optional)",
            "https://...",
            &compose.image_url,
            |value| Message::Compose(ComposeMessage::ImageUrlChanged(value)),
        ),
        type_row,
        submit,
        status(compose),
    ]
    .spacing(SPACING_SM);

    let content = column![header, Space::new().height(SPACING_MD), form].padding(SPACING_MD);

    scrollable(content).height(Length::Fill).into()
}

/// A labeled text input.
fn field<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    column![
        text(label).size(12).color(GRAY_700),
        Space::new().height(SPACING_XS),
        text_input(placeholder, value)
            .on_input(on_change)
            .padding([8.0, 10.0])
            .style(text_input_default),
    ]
    .into()
}

/// Feedback area below the submit button, driven by the submission phase.
fn status(compose: &ComposeViewState) -> Element<'_, Message> {
    match &compose.phase {
        ComposePhase::Editing => Space::new().into(),

        ComposePhase::Submitting { .. } => text("Submitting...").size(13).color(GRAY_500).into(),

        ComposePhase::Succeeded => column![
            text("Post published").size(14).color(SUCCESS),
            Space::new().height(SPACING_SM),
            row![
                button(text("New post").size(13))
                    .on_press(Message::Compose(ComposeMessage::ResetClicked))
                    .padding([6.0, 12.0])
                    .style(button_secondary),
                button(text("View posts").size(13))
                    .on_press(Message::Navigate(Screen::Posts))
                    .padding([6.0, 12.0])
                    .style(button_ghost),
            ]
            .spacing(SPACING_SM),
        ]
        .into(),

        ComposePhase::Failed { error } => text(error.to_string()).size(13).color(DANGER).into(),
    }
}
