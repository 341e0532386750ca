//! Message handler architecture.
//!
//! Handlers separate message handling logic from the main App struct. Each
//! handler implements [`MessageHandler`] for one message type, and
//! `App::update()` dispatches to it:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Posts(msg) => PostsHandler.handle(&mut self.state, msg),
//!         Message::Compose(msg) => ComposeHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod compose;
mod drugs;
mod posts;
mod profile;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use compose::ComposeHandler;
pub use drugs::DrugsHandler;
pub use posts::PostsHandler;
pub use profile::ProfileHandler;

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    ///
    /// Returns a `Task<Message>` for any async follow-up work, or
    /// `Task::none()` if complete.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
