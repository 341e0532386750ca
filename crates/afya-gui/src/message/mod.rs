//! Application messages.
//!
//! All state changes flow through [`Message`]. The enum is split into one
//! submodule per screen so each handler only needs to know about its own
//! variants.

mod compose;
mod drugs;
mod posts;
mod profile;

pub use compose::ComposeMessage;
pub use drugs::DrugsMessage;
pub use posts::PostsMessage;
pub use profile::ProfileMessage;

use crate::state::Screen;

/// Top-level application message.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // NAVIGATION
    // =========================================================================
    /// Switch to another screen.
    Navigate(Screen),

    // =========================================================================
    // SEARCH
    // =========================================================================
    /// The shared search query changed.
    SearchChanged(String),
    /// The search query was cleared.
    SearchCleared,

    // =========================================================================
    // SCREENS
    // =========================================================================
    /// Posts feed messages.
    Posts(PostsMessage),
    /// Drugs catalog messages.
    Drugs(DrugsMessage),
    /// Post composition messages.
    Compose(ComposeMessage),
    /// Profile form messages.
    Profile(ProfileMessage),
}
