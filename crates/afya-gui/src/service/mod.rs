//! Services for background work.
//!
//! These services wrap store calls as async functions and package them as
//! Iced tasks for use with the `Task::perform` pattern.

pub mod feed;
pub mod submit;

pub use feed::{fetch_drugs, fetch_posts};
pub use submit::{perform_submit, submit_post};
