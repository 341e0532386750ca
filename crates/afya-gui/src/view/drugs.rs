//! Drugs catalog screen.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use afya_model::Drug;

use crate::component::{empty_state, error_state, loading_state};
use crate::message::{DrugsMessage, Message};
use crate::state::AppState;
use crate::theme::{
    GRAY_700, GRAY_900, SPACING_MD, SPACING_SM, SPACING_XS, WHITE, button_primary,
    button_secondary, card,
};

/// Renders the drugs catalog.
pub fn view_drugs(state: &AppState) -> Element<'_, Message> {
    let header = row![
        text("Drugs").size(20).color(GRAY_900),
        Space::new().width(Length::Fill),
        button(text("Refresh").size(13))
            .on_press(Message::Drugs(DrugsMessage::RefreshClicked))
            .padding([6.0, 12.0])
            .style(button_secondary),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let body: Element<'_, Message> = if state.drugs.is_loading() && state.drugs.is_empty() {
        loading_state("Loading drugs")
    } else if let Some(error) = state.drugs.error() {
        error_state(
            "Couldn't load drugs",
            error,
            Message::Drugs(DrugsMessage::RefreshClicked),
        )
    } else {
        let filtered = state.filtered_drugs();
        if filtered.is_empty() {
            if state.search_query.is_empty() {
                empty_state("No drugs listed", "The catalog is empty right now")
            } else {
                empty_state("No matching drugs", "Try a different search")
            }
        } else {
            let mut cards = column![].spacing(SPACING_SM);
            for drug in filtered {
                cards = cards.push(drug_card(drug));
            }
            scrollable(cards).height(Length::Fill).into()
        }
    };

    column![header, Space::new().height(SPACING_MD), body]
        .padding(SPACING_MD)
        .into()
}

/// A single drug card with a request shortcut.
fn drug_card(drug: &Drug) -> Element<'_, Message> {
    let content = row![
        column![
            text(&drug.name).size(15).color(GRAY_900),
            Space::new().height(SPACING_XS),
            text(&drug.details).size(13).color(GRAY_700),
        ],
        Space::new().width(Length::Fill),
        button(text("Request").size(13).color(WHITE))
            .on_press(Message::Drugs(DrugsMessage::RequestClicked(drug.clone())))
            .padding([6.0, 14.0])
            .style(button_primary),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .padding(SPACING_MD)
        .style(card)
        .into()
}
