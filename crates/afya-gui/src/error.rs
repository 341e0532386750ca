//! User-facing error types for the composition flow.

use thiserror::Error;

/// What the compose screen shows when an attempt fails.
///
/// The two variants carry the full user-facing text in their `Display`
/// impls. Store faults are not wrapped: the handler logs them and keeps
/// only the generic submission message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// One of the required fields was blank after trimming.
    #[error("all fields are required")]
    MissingFields,

    /// The store call came back with an error.
    #[error("failed to submit post")]
    SubmissionFailed,
}
