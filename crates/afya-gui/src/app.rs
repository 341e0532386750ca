//! Main application module for Afya.
//!
//! This module implements the Iced application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **No channels/polling** - Use `Task::perform` for async operations
//! - **Per-screen state lives in the ViewState enum** - Navigation replaces it

use std::sync::Arc;
use std::time::Duration;

use iced::widget::{column, container};
use iced::{Element, Length, Task, Theme};

use afya_store::{DrugStore, MemoryStore, PostStore};

use crate::component::{nav_bar, search_box};
use crate::handler::{ComposeHandler, DrugsHandler, MessageHandler, PostsHandler, ProfileHandler};
use crate::message::Message;
use crate::service::feed::{fetch_drugs, fetch_posts};
use crate::state::{AppState, ViewState};
use crate::theme::{SPACING_MD, SPACING_SM, afya_theme, bar};
use crate::view::{
    view_compose, view_contact, view_drugs, view_messages, view_posts, view_profile,
};

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance backed by the built-in seeded store.
    ///
    /// Called once at startup. Returns the initial state and the startup
    /// fetch tasks. The latency on the store keeps loading states visible.
    pub fn new() -> (Self, Task<Message>) {
        let store = Arc::new(MemoryStore::with_samples().with_latency(Duration::from_millis(300)));
        Self::with_stores(store.clone(), store)
    }

    /// Create an application instance backed by the given stores.
    ///
    /// Kicks off the startup fetch of both the posts feed and the drug
    /// catalog.
    pub fn with_stores(
        post_store: Arc<dyn PostStore>,
        drug_store: Arc<dyn DrugStore>,
    ) -> (Self, Task<Message>) {
        let mut state = AppState::new(post_store, drug_store);
        state.posts.begin_loading();
        state.drugs.begin_loading();

        let startup = Task::batch([
            fetch_posts(Arc::clone(&state.post_store)),
            fetch_drugs(Arc::clone(&state.drug_store)),
        ]);
        (Self { state }, startup)
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes happen here.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::Navigate(screen) => {
                self.state.view = ViewState::for_screen(screen);
                Task::none()
            }

            // =================================================================
            // Search
            // =================================================================
            Message::SearchChanged(query) => {
                self.state.search_query = query;
                Task::none()
            }

            Message::SearchCleared => {
                self.state.search_query.clear();
                Task::none()
            }

            // =================================================================
            // Screen messages
            // =================================================================
            Message::Posts(msg) => PostsHandler.handle(&mut self.state, msg),

            Message::Drugs(msg) => DrugsHandler.handle(&mut self.state, msg),

            Message::Compose(msg) => ComposeHandler.handle(&mut self.state, msg),

            Message::Profile(msg) => ProfileHandler.handle(&mut self.state, msg),
        }
    }

    /// Render the current screen.
    ///
    /// This is a pure function that produces UI based on current state.
    pub fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match &self.state.view {
            ViewState::Posts => view_posts(&self.state),
            ViewState::Drugs => view_drugs(&self.state),
            ViewState::Compose(compose) => view_compose(compose),
            ViewState::Profile(profile) => view_profile(profile),
            ViewState::Contact => view_contact(),
            ViewState::Messages => view_messages(),
        };

        let mut content = column![];

        // The search bar only appears on the list screens; the query itself
        // survives navigation.
        if self.state.view.shows_search() {
            let placeholder = match &self.state.view {
                ViewState::Drugs => "Search drugs by name...",
                _ => "Search posts by title...",
            };
            content = content.push(
                container(search_box(
                    &self.state.search_query,
                    placeholder,
                    Message::SearchChanged,
                    Message::SearchCleared,
                ))
                .padding([SPACING_SM, SPACING_MD])
                .style(bar),
            );
        }

        content = content
            .push(container(screen).width(Length::Fill).height(Length::Fill))
            .push(nav_bar(self.state.view.screen()));

        content.into()
    }

    /// Get the window title for the current screen.
    pub fn title(&self) -> String {
        match &self.state.view {
            ViewState::Compose(_) => "New Post - Afya".to_string(),
            view => format!("{} - Afya", view.screen().label()),
        }
    }

    /// Get the application theme.
    pub fn theme(&self) -> Theme {
        afya_theme()
    }
}
