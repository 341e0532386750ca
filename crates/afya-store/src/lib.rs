//! Backend contracts for the Afya client.
//!
//! The UI core never talks to a concrete backend; it holds trait objects for
//! the two capabilities it consumes:
//!
//! - [`PostStore`]: the community feed (fetch the posts, submit a new one)
//! - [`DrugStore`]: the drug catalog (fetch only)
//!
//! The store owns post identity: a submission sends a [`PostDraft`] and the
//! store answers with the canonical [`Post`], id and timestamp assigned.
//!
//! [`MemoryStore`] is the in-memory reference implementation used at startup
//! and in tests. It supports seeded sample data, simulated latency, and
//! failure injection so loading and error states can be exercised without a
//! real backend.

use async_trait::async_trait;

use afya_model::{Drug, Post, PostDraft};

pub mod error;
pub mod memory;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;

/// Capability to read and extend the community feed.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Fetches all posts in arrival order.
    async fn fetch(&self) -> Result<Vec<Post>>;

    /// Persists a draft and returns the stored post with its assigned id
    /// and creation time.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend is unreachable, rejects the
    /// draft, or times out. The caller decides how much of that detail to
    /// surface.
    async fn submit(&self, draft: PostDraft) -> Result<Post>;
}

/// Capability to read the drug catalog.
#[async_trait]
pub trait DrugStore: Send + Sync {
    /// Fetches the known drugs in catalog order.
    async fn fetch(&self) -> Result<Vec<Drug>>;
}
