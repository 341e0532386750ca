use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a stored post, assigned by the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(Uuid);

impl PostId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a post asks for a drug or offers one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostType {
    /// Someone is looking for a drug.
    #[default]
    Request,
    /// Someone has a drug available.
    Offer,
}

impl PostType {
    pub const ALL: [PostType; 2] = [PostType::Request, PostType::Offer];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Request => "Request",
            PostType::Offer => "Offer",
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A community post about drug availability, as stored.
///
/// `id` and `created_at` come from the store; everything else is authored by
/// the user through a [`PostDraft`]. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub drug_name: String,
    pub content: String,
    pub location: String,
    /// Optional link to an attached image. `None` when the author left the
    /// field empty.
    pub image_url: Option<String>,
    pub post_type: PostType,
    pub created_at: DateTime<Utc>,
}

/// The user-authored fields of a post, before the store has accepted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub drug_name: String,
    pub content: String,
    pub location: String,
    pub image_url: Option<String>,
    pub post_type: PostType,
}

/// A drug known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drug {
    pub name: String,
    pub details: String,
}

impl Drug {
    pub fn new(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            details: details.into(),
        }
    }
}
