//! Submission service - persists a post draft through the store.

use std::sync::Arc;

use iced::Task;

use afya_model::{Post, PostDraft};
use afya_store::{PostStore, StoreError};

use crate::message::{ComposeMessage, Message};

/// Submit a draft and return the canonical stored post.
///
/// This function is designed to be used with `Task::perform`; [`submit_post`]
/// does the packaging:
///
/// ```ignore
/// Task::perform(perform_submit(store, draft), move |result| {
///     Message::Compose(ComposeMessage::Submitted { seq, result })
/// })
/// ```
pub async fn perform_submit(
    store: Arc<dyn PostStore>,
    draft: PostDraft,
) -> Result<Post, StoreError> {
    store.submit(draft).await
}

/// Submit a draft as an Iced task, tagging the completion with `seq`.
pub fn submit_post(store: Arc<dyn PostStore>, draft: PostDraft, seq: u64) -> Task<Message> {
    Task::perform(perform_submit(store, draft), move |result| {
        Message::Compose(ComposeMessage::Submitted { seq, result })
    })
}
