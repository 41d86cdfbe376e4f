use caliber_core::error::CaliberError;
use caliber_core::models::review::{Review, ReviewId};
use caliber_db::KeyValueStore;

use crate::storage::ReviewStorage;

/// Collection operations over the stored reviews. Holds no cached copy.
pub struct ReviewRepository<S> {
    storage: ReviewStorage<S>,
}

impl<S: KeyValueStore> ReviewRepository<S> {
    pub fn new(storage: ReviewStorage<S>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &ReviewStorage<S> {
        &self.storage
    }

    /// All reviews, newest first, exactly as stored.
    pub fn list(&self) -> Result<Vec<Review>, CaliberError> {
        self.storage.load()
    }

    /// Prepend a review and persist the whole collection.
    pub fn add(&self, review: Review) -> Result<(), CaliberError> {
        let mut reviews = self.storage.load()?;
        let id = review.id;
        reviews.insert(0, review);
        self.storage.save(&reviews)?;
        tracing::info!(%id, total = reviews.len(), "review added");
        Ok(())
    }

    /// Remove every review with `id`. Returns how many were removed; zero is not an error.
    pub fn remove_by_id(&self, id: ReviewId) -> Result<usize, CaliberError> {
        let reviews = self.storage.load()?;
        let before = reviews.len();
        let kept: Vec<Review> = reviews.into_iter().filter(|r| r.id != id).collect();
        let removed = before - kept.len();
        self.storage.save(&kept)?;
        tracing::info!(%id, removed, "review removal");
        Ok(removed)
    }
}
