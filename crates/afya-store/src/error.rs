//! Error types for store operations.

use thiserror::Error;

/// Fault reported by a store backend.
///
/// Clone and PartialEq so results can travel inside UI messages and be
/// compared in tests. The UI core logs these and maps them to its own
/// user-facing messages; it never matches on the variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend could not be reached.
    #[error("store unavailable: {reason}")]
    Unavailable {
        /// Short description of what failed.
        reason: String,
    },

    /// The backend refused the request.
    #[error("request rejected: {reason}")]
    Rejected {
        /// Why the request was refused.
        reason: String,
    },

    /// The backend did not answer in time.
    #[error("store timed out after {seconds}s")]
    Timeout {
        /// How long the caller waited.
        seconds: u64,
    },
}

impl StoreError {
    /// Create an unavailable error from any displayable cause.
    pub fn unavailable(reason: impl std::fmt::Display) -> Self {
        Self::Unavailable {
            reason: reason.to_string(),
        }
    }

    /// Create a rejection error from any displayable cause.
    pub fn rejected(reason: impl std::fmt::Display) -> Self {
        Self::Rejected {
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
