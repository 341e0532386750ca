//! Post composition message handling.
//!
//! The compose form walks Editing → Submitting → Succeeded or Failed. A
//! submit click while an attempt is in flight is rejected, and every attempt
//! carries a sequence number so a completion from an abandoned attempt is
//! dropped instead of overwriting newer state.

use std::sync::Arc;

use iced::Task;

use afya_model::Post;
use afya_store::StoreError;

use crate::error::ComposeError;
use crate::message::{ComposeMessage, Message};
use crate::service::submit::submit_post;
use crate::state::{AppState, ComposePhase, ComposeViewState, ViewState};

use super::MessageHandler;

/// Handler for post composition messages.
pub struct ComposeHandler;

impl MessageHandler<ComposeMessage> for ComposeHandler {
    fn handle(&self, state: &mut AppState, msg: ComposeMessage) -> Task<Message> {
        match msg {
            ComposeMessage::TitleChanged(title) => {
                if let ViewState::Compose(compose) = &mut state.view {
                    compose.title = title;
                }
                Task::none()
            }

            ComposeMessage::DrugNameChanged(drug_name) => {
                if let ViewState::Compose(compose) = &mut state.view {
                    compose.drug_name = drug_name;
                }
                Task::none()
            }

            ComposeMessage::ContentChanged(content) => {
                if let ViewState::Compose(compose) = &mut state.view {
                    compose.content = content;
                }
                Task::none()
            }

            ComposeMessage::LocationChanged(location) => {
                if let ViewState::Compose(compose) = &mut state.view {
                    compose.location = location;
                }
                Task::none()
            }

            ComposeMessage::ImageUrlChanged(image_url) => {
                if let ViewState::Compose(compose) = &mut state.view {
                    compose.image_url = image_url;
                }
                Task::none()
            }

            ComposeMessage::PostTypeSelected(post_type) => {
                if let ViewState::Compose(compose) = &mut state.view {
                    compose.post_type = post_type;
                }
                Task::none()
            }

            ComposeMessage::SubmitClicked => submit(state),

            ComposeMessage::Submitted { seq, result } => complete_submit(state, seq, result),

            ComposeMessage::ResetClicked => {
                if let ViewState::Compose(compose) = &mut state.view {
                    *compose = ComposeViewState::default();
                }
                Task::none()
            }
        }
    }
}

/// Start a submission attempt for the current form.
///
/// Any outcome from an earlier attempt is replaced by this one, so an old
/// error or success banner never survives into a new attempt.
fn submit(state: &mut AppState) -> Task<Message> {
    let ViewState::Compose(compose) = &mut state.view else {
        return Task::none();
    };

    if compose.is_submitting() {
        tracing::debug!("Submit clicked while a submission is in flight, ignoring");
        return Task::none();
    }

    if compose.missing_required_fields() {
        compose.phase = ComposePhase::Failed {
            error: ComposeError::MissingFields,
        };
        return Task::none();
    }

    state.submit_seq += 1;
    let seq = state.submit_seq;
    compose.phase = ComposePhase::Submitting { seq };

    let draft = compose.draft();
    tracing::info!("Submitting post '{}' (attempt {})", draft.title, seq);
    submit_post(Arc::clone(&state.post_store), draft, seq)
}

/// Apply the result of a finished submission attempt.
///
/// The result only lands if the compose screen is still showing and `seq`
/// matches the attempt currently in flight. Anything else is a leftover from
/// an abandoned attempt and is dropped.
fn complete_submit(
    state: &mut AppState,
    seq: u64,
    result: Result<Post, StoreError>,
) -> Task<Message> {
    let ViewState::Compose(compose) = &mut state.view else {
        tracing::debug!("Submission {} finished after leaving compose, dropping", seq);
        return Task::none();
    };

    match compose.phase {
        ComposePhase::Submitting { seq: current } if current == seq => {}
        _ => {
            tracing::debug!("Stale result for submission {}, dropping", seq);
            return Task::none();
        }
    }

    match result {
        Ok(post) => {
            tracing::info!("Post '{}' submitted", post.title);
            compose.phase = ComposePhase::Succeeded;
            state.posts.append(post);
        }
        Err(err) => {
            tracing::warn!("Submission {} failed: {}", seq, err);
            compose.phase = ComposePhase::Failed {
                error: ComposeError::SubmissionFailed,
            };
        }
    }
    Task::none()
}
