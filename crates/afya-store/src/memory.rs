//! In-memory reference store.
//!
//! Backs the application during development and the integration tests. Not a
//! persistence layer: contents live and die with the process. Latency and
//! failure injection exist so the UI's loading and error states can be
//! exercised without a real backend.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::time::sleep;

use afya_model::{Drug, Post, PostDraft, PostId};

use crate::error::{Result, StoreError};
use crate::{DrugStore, PostStore};

/// In-memory implementation of [`PostStore`] and [`DrugStore`].
pub struct MemoryStore {
    posts: Mutex<Vec<Post>>,
    drugs: Mutex<Vec<Drug>>,
    latency: Duration,
    submit_failure: Mutex<Option<StoreError>>,
    fetch_failure: Mutex<Option<StoreError>>,
    fetch_post_calls: Mutex<usize>,
    fetch_drug_calls: Mutex<usize>,
    submit_calls: Mutex<usize>,
}

impl MemoryStore {
    /// An empty store with no latency and no injected failures.
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            drugs: Mutex::new(Vec::new()),
            latency: Duration::ZERO,
            submit_failure: Mutex::new(None),
            fetch_failure: Mutex::new(None),
            fetch_post_calls: Mutex::new(0),
            fetch_drug_calls: Mutex::new(0),
            submit_calls: Mutex::new(0),
        }
    }

    /// A store seeded with a small community feed and drug catalog.
    pub fn with_samples() -> Self {
        let store = Self::new();
        *store.posts.lock().unwrap() = sample_posts();
        *store.drugs.lock().unwrap() = sample_drugs();
        store
    }

    /// Adds a fixed delay before every operation completes.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Makes every following submit fail with `error`, or succeed again
    /// when `None`.
    pub fn set_submit_failure(&self, error: Option<StoreError>) {
        *self.submit_failure.lock().unwrap() = error;
    }

    /// Makes every following fetch (posts and drugs) fail with `error`, or
    /// succeed again when `None`.
    pub fn set_fetch_failure(&self, error: Option<StoreError>) {
        *self.fetch_failure.lock().unwrap() = error;
    }

    /// Number of times `submit` was called, including failed calls.
    pub fn submit_call_count(&self) -> usize {
        *self.submit_calls.lock().unwrap()
    }

    /// Number of times the post feed was fetched.
    pub fn fetch_post_call_count(&self) -> usize {
        *self.fetch_post_calls.lock().unwrap()
    }

    /// Number of times the drug catalog was fetched.
    pub fn fetch_drug_call_count(&self) -> usize {
        *self.fetch_drug_calls.lock().unwrap()
    }

    /// Snapshot of everything stored so far, in arrival order.
    pub fn stored_posts(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn fetch(&self) -> Result<Vec<Post>> {
        *self.fetch_post_calls.lock().unwrap() += 1;
        self.simulate_latency().await;

        if let Some(error) = self.fetch_failure.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn submit(&self, draft: PostDraft) -> Result<Post> {
        *self.submit_calls.lock().unwrap() += 1;
        self.simulate_latency().await;

        if let Some(error) = self.submit_failure.lock().unwrap().clone() {
            return Err(error);
        }

        let post = Post {
            id: PostId::new(),
            title: draft.title,
            drug_name: draft.drug_name,
            content: draft.content,
            location: draft.location,
            image_url: draft.image_url,
            post_type: draft.post_type,
            created_at: Utc::now(),
        };
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }
}

#[async_trait]
impl DrugStore for MemoryStore {
    async fn fetch(&self) -> Result<Vec<Drug>> {
        *self.fetch_drug_calls.lock().unwrap() += 1;
        self.simulate_latency().await;

        if let Some(error) = self.fetch_failure.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.drugs.lock().unwrap().clone())
    }
}

fn sample_posts() -> Vec<Post> {
    use afya_model::PostType;

    let make = |title: &str, drug_name: &str, content: &str, location: &str, post_type| Post {
        id: PostId::new(),
        title: title.to_string(),
        drug_name: drug_name.to_string(),
        content: content.to_string(),
        location: location.to_string(),
        image_url: None,
        post_type,
        created_at: Utc::now(),
    };

    vec![
        make(
            "Looking for insulin pens",
            "Insulin",
            "My pharmacy has been out of stock for a week. Can anyone help?",
            "Nairobi",
            PostType::Request,
        ),
        make(
            "Spare amoxicillin course",
            "Amoxicillin",
            "Sealed box, expires next year. Free to whoever needs it.",
            "Mombasa",
            PostType::Offer,
        ),
        make(
            "Paracetamol syrup for kids",
            "Paracetamol",
            "Two unopened bottles left over after travel.",
            "Kisumu",
            PostType::Offer,
        ),
    ]
}

fn sample_drugs() -> Vec<Drug> {
    vec![
        Drug::new("Paracetamol", "Pain and fever relief. 500mg tablets."),
        Drug::new("Ibuprofen", "Anti-inflammatory. Take with food."),
        Drug::new("Amoxicillin", "Antibiotic. Prescription required."),
        Drug::new("Cetirizine", "Antihistamine for allergy symptoms."),
        Drug::new("Oral rehydration salts", "For dehydration. Dissolve in clean water."),
    ]
}
