//! Domain model for the Afya community health client.
//!
//! This crate holds the plain data the rest of the application moves around:
//! - [`domain`]: core entities (posts, drugs) and their identifiers
//! - [`list_state`]: the observable snapshot of an asynchronously loaded list
//! - [`filter`]: the pure search filter applied to listings
//!
//! Nothing in here performs I/O or knows about the UI; state transitions and
//! backend calls live in the `afya-store` and `afya-gui` crates.

pub mod domain;
pub mod filter;
pub mod list_state;

pub use domain::{Drug, Post, PostDraft, PostId, PostType};
pub use filter::filter_by;
pub use list_state::ListState;
