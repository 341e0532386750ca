//! Feed service - fetches posts and drugs from the stores.

use std::sync::Arc;

use iced::Task;

use afya_store::{DrugStore, PostStore};

use crate::message::{DrugsMessage, Message, PostsMessage};

/// Fetch all posts and deliver the result as [`PostsMessage::Loaded`].
pub fn fetch_posts(store: Arc<dyn PostStore>) -> Task<Message> {
    Task::perform(async move { store.fetch().await }, |result| {
        Message::Posts(PostsMessage::Loaded(result))
    })
}

/// Fetch the drug catalog and deliver the result as [`DrugsMessage::Loaded`].
pub fn fetch_drugs(store: Arc<dyn DrugStore>) -> Task<Message> {
    Task::perform(async move { store.fetch().await }, |result| {
        Message::Drugs(DrugsMessage::Loaded(result))
    })
}
