//! In-memory quote store, reset on every process start

use super::{seed_quotes, QuoteStore, StoreError, StoreResult};
use async_trait::async_trait;
use quotes_types::{MovieQuote, QuoteDraft};
use rand::seq::SliceRandom;
use tokio::sync::RwLock;

/// Ordered list of quotes behind a lock.
///
/// Every read/modify/write sequence (id assignment and push, find and
/// overwrite, find and remove) runs under a single write guard.
pub struct MemoryStore {
    quotes: RwLock<Vec<MovieQuote>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_quotes(Vec::new())
    }

    /// A store holding the five seed quotes
    pub fn seeded() -> Self {
        Self::with_quotes(seed_quotes())
    }

    pub fn with_quotes(quotes: Vec<MovieQuote>) -> Self {
        Self {
            quotes: RwLock::new(quotes),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<MovieQuote>> {
        Ok(self.quotes.read().await.clone())
    }

    async fn get(&self, id: i32) -> StoreResult<MovieQuote> {
        self.quotes
            .read()
            .await
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn random(&self) -> StoreResult<MovieQuote> {
        let quotes = self.quotes.read().await;
        quotes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(StoreError::Empty)
    }

    async fn create(&self, draft: QuoteDraft) -> StoreResult<MovieQuote> {
        let mut quotes = self.quotes.write().await;

        let id = quotes.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let quote = MovieQuote::new(id, draft);
        quotes.push(quote.clone());

        tracing::info!("Created quote {} ({})", id, quote.movie);

        Ok(quote)
    }

    async fn update(&self, id: i32, draft: QuoteDraft) -> StoreResult<MovieQuote> {
        let mut quotes = self.quotes.write().await;

        let quote = quotes
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(StoreError::NotFound(id))?;
        quote.apply(draft);

        Ok(quote.clone())
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let mut quotes = self.quotes.write().await;

        let index = quotes
            .iter()
            .position(|q| q.id == id)
            .ok_or(StoreError::NotFound(id))?;
        quotes.remove(index);

        Ok(())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.quotes.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_basic_operations() {
        let store = MemoryStore::seeded();

        // Create assigns max + 1
        let created = store.create(QuoteDraft::new("X", "Y")).await.unwrap();
        assert_eq!(created.id, 6);
        assert_eq!(store.get(6).await.unwrap(), created);
        assert_eq!(store.count().await.unwrap(), 6);

        // Update keeps the id
        let updated = store.update(3, QuoteDraft::new("Q", "M")).await.unwrap();
        assert_eq!(updated.id, 3);
        assert_eq!(store.get(3).await.unwrap().quote, "Q");
        assert_eq!(store.get(3).await.unwrap().movie, "M");

        // Delete
        assert_ok!(store.delete(1).await);
        assert!(matches!(store.get(1).await, Err(StoreError::NotFound(1))));
        assert_eq!(store.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_list_keeps_creation_order() {
        let store = MemoryStore::seeded();
        store.delete(2).await.unwrap();
        store.create(QuoteDraft::new("X", "Y")).await.unwrap();

        let ids: Vec<i32> = store.list().await.unwrap().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_id_follows_current_max() {
        let store = MemoryStore::seeded();

        // Deleting the highest id frees it up again
        store.delete(5).await.unwrap();
        let created = store.create(QuoteDraft::new("X", "Y")).await.unwrap();
        assert_eq!(created.id, 5);

        let empty = MemoryStore::new();
        let first = empty.create(QuoteDraft::new("X", "Y")).await.unwrap();
        assert_eq!(first.id, 1);
    }

    #[tokio::test]
    async fn test_missing_ids() {
        let store = MemoryStore::seeded();

        assert_err!(store.get(99).await);
        assert!(matches!(
            store.update(99, QuoteDraft::new("a", "b")).await,
            Err(StoreError::NotFound(99))
        ));
        assert!(matches!(store.delete(99).await, Err(StoreError::NotFound(99))));
        assert_eq!(store.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_random() {
        let store = MemoryStore::seeded();
        let all = store.list().await.unwrap();

        for _ in 0..20 {
            let quote = store.random().await.unwrap();
            assert!(all.contains(&quote));
        }

        let empty = MemoryStore::new();
        assert!(matches!(empty.random().await, Err(StoreError::Empty)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_unique_ids() {
        let store = Arc::new(MemoryStore::seeded());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create(QuoteDraft::new(format!("quote {}", i), "Movie"))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 50);
        assert_eq!(store.count().await.unwrap(), 55);
    }
}
