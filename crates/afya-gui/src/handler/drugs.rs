//! Drugs catalog message handling.

use std::sync::Arc;

use iced::Task;

use crate::message::{DrugsMessage, Message};
use crate::service::feed::fetch_drugs;
use crate::state::{AppState, ViewState};

use super::MessageHandler;

/// Handler for drugs catalog messages.
pub struct DrugsHandler;

impl MessageHandler<DrugsMessage> for DrugsHandler {
    fn handle(&self, state: &mut AppState, msg: DrugsMessage) -> Task<Message> {
        match msg {
            DrugsMessage::Loaded(Ok(drugs)) => {
                tracing::info!("Loaded {} drugs", drugs.len());
                state.drugs.replace_all(drugs);
                Task::none()
            }

            DrugsMessage::Loaded(Err(err)) => {
                tracing::warn!("Failed to load drugs: {}", err);
                state.drugs.fail(err.to_string());
                Task::none()
            }

            DrugsMessage::RefreshClicked => {
                state.drugs.begin_loading();
                fetch_drugs(Arc::clone(&state.drug_store))
            }

            DrugsMessage::RequestClicked(drug) => {
                tracing::info!("Opening compose form for {}", drug.name);
                state.view = ViewState::compose_for_drug(&drug);
                Task::none()
            }
        }
    }
}
