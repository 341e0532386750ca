//! Application-level state.
//!
//! This module contains [`AppState`], the root of all state. Handlers mutate
//! it on the update loop; views only read it.

use std::sync::Arc;

use afya_model::{Drug, ListState, Post, filter_by};
use afya_store::{DrugStore, PostStore};

use super::ViewState;

/// Top-level application state.
pub struct AppState {
    /// Current screen with its local state.
    pub view: ViewState,
    /// Search query shared by the posts and drugs screens.
    pub search_query: String,
    /// Posts feed.
    pub posts: ListState<Post>,
    /// Drugs catalog.
    pub drugs: ListState<Drug>,
    /// Sequence number of the latest submission attempt.
    ///
    /// Each attempt bumps it; completions carrying an older number are
    /// dropped on arrival.
    pub submit_seq: u64,
    /// Post persistence capability.
    pub post_store: Arc<dyn PostStore>,
    /// Drug catalog capability.
    pub drug_store: Arc<dyn DrugStore>,
}

impl AppState {
    /// Create fresh state backed by the given stores.
    pub fn new(post_store: Arc<dyn PostStore>, drug_store: Arc<dyn DrugStore>) -> Self {
        Self {
            view: ViewState::default(),
            search_query: String::new(),
            posts: ListState::new(),
            drugs: ListState::new(),
            submit_seq: 0,
            post_store,
            drug_store,
        }
    }

    /// Posts matching the current search query, in feed order.
    pub fn filtered_posts(&self) -> Vec<&Post> {
        filter_by(self.posts.items(), &self.search_query, |post| {
            post.title.as_str()
        })
    }

    /// Drugs matching the current search query, in catalog order.
    pub fn filtered_drugs(&self) -> Vec<&Drug> {
        filter_by(self.drugs.items(), &self.search_query, |drug| {
            drug.name.as_str()
        })
    }
}
