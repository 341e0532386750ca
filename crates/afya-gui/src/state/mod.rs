//! Application state.

pub mod app_state;
pub mod view_state;

pub use app_state::AppState;
pub use view_state::{ComposePhase, ComposeViewState, ProfileViewState, Screen, ViewState};
