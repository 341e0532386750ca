//! Reusable UI components.

pub mod feedback;
pub mod nav_bar;
pub mod search_box;

pub use feedback::{empty_state, error_state, loading_state};
pub use nav_bar::nav_bar;
pub use search_box::search_box;
