//! Posts feed message handling.

use std::sync::Arc;

use iced::Task;

use crate::message::{Message, PostsMessage};
use crate::service::feed::fetch_posts;
use crate::state::{AppState, ViewState};

use super::MessageHandler;

/// Handler for posts feed messages.
pub struct PostsHandler;

impl MessageHandler<PostsMessage> for PostsHandler {
    fn handle(&self, state: &mut AppState, msg: PostsMessage) -> Task<Message> {
        match msg {
            PostsMessage::Loaded(Ok(posts)) => {
                tracing::info!("Loaded {} posts", posts.len());
                state.posts.replace_all(posts);
                Task::none()
            }

            PostsMessage::Loaded(Err(err)) => {
                tracing::warn!("Failed to load posts: {}", err);
                state.posts.fail(err.to_string());
                Task::none()
            }

            PostsMessage::RefreshClicked => {
                state.posts.begin_loading();
                fetch_posts(Arc::clone(&state.post_store))
            }

            PostsMessage::ComposeClicked => {
                state.view = ViewState::compose();
                Task::none()
            }
        }
    }
}
