//! Profile form message handling.

use iced::Task;

use crate::message::{Message, ProfileMessage};
use crate::state::{AppState, ViewState};

use super::MessageHandler;

/// Handler for profile form messages.
pub struct ProfileHandler;

impl MessageHandler<ProfileMessage> for ProfileHandler {
    fn handle(&self, state: &mut AppState, msg: ProfileMessage) -> Task<Message> {
        let ViewState::Profile(profile) = &mut state.view else {
            return Task::none();
        };

        match msg {
            ProfileMessage::FirstNameChanged(first_name) => {
                profile.first_name = first_name;
            }
            ProfileMessage::LastNameChanged(last_name) => {
                profile.last_name = last_name;
            }
            ProfileMessage::PhoneChanged(phone) => {
                profile.phone = phone;
            }
            ProfileMessage::SaveClicked => {
                // TODO: persist once an account store exists
                tracing::info!("Profile saved for {} {}", profile.first_name, profile.last_name);
            }
        }
        Task::none()
    }
}
