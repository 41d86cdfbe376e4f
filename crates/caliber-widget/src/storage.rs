use caliber_core::error::CaliberError;
use caliber_core::models::review::Review;
use caliber_db::KeyValueStore;

/// Reads and writes the whole review collection as JSON under one fixed key.
pub struct ReviewStorage<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ReviewStorage<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the collection. An absent entry is an empty collection; a corrupt one is an error.
    pub fn load(&self) -> Result<Vec<Review>, CaliberError> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            tracing::debug!(key = %self.key, "no stored reviews");
            return Ok(Vec::new());
        };
        let reviews: Vec<Review> =
            serde_json::from_str(&raw).map_err(|e| CaliberError::CorruptStore {
                key: self.key.clone(),
                message: e.to_string(),
            })?;
        tracing::debug!(key = %self.key, count = reviews.len(), "loaded reviews");
        Ok(reviews)
    }

    /// Serialize the full collection and replace the stored entry.
    pub fn save(&self, reviews: &[Review]) -> Result<(), CaliberError> {
        let raw =
            serde_json::to_string(reviews).map_err(|e| CaliberError::Serialization(e.to_string()))?;
        self.store.set_item(&self.key, &raw)?;
        tracing::debug!(key = %self.key, count = reviews.len(), "saved reviews");
        Ok(())
    }
}
