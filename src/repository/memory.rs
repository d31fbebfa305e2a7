//! In-Memory Store
//!
//! A `BTreeMap`-backed implementation for tests and local development.
//! Map key order stands in for the remote backend's document-id order, so
//! both backends list in the same order for the same contents.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::traits::PantryStore;
use crate::domain::{PantryItem, PantryResult};

/// In-memory implementation of the pantry store
#[derive(Default)]
pub struct MemoryStore {
    items: RwLock<BTreeMap<String, PantryItem>>,
    scans: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of full-collection scans served so far
    pub fn scan_count(&self) -> u64 {
        self.scans.load(Ordering::Relaxed)
    }

    /// Number of stored records, visible or not
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl PantryStore for MemoryStore {
    async fn get(&self, name: &str) -> PantryResult<Option<PantryItem>> {
        Ok(self.items.read().await.get(name).cloned())
    }

    async fn put(&self, item: &PantryItem) -> PantryResult<()> {
        self.items
            .write()
            .await
            .insert(item.name.clone(), item.clone());
        Ok(())
    }

    async fn increment_quantity(&self, name: &str, delta: i64) -> PantryResult<()> {
        let mut items = self.items.write().await;
        match items.get_mut(name) {
            Some(item) => item.quantity = item.quantity.saturating_add(delta),
            // Firestore field transforms create the document they target
            None => {
                items.insert(name.to_string(), PantryItem::new(name, delta));
            }
        }
        Ok(())
    }

    async fn delete(&self, name: &str) -> PantryResult<()> {
        self.items.write().await.remove(name);
        Ok(())
    }

    async fn list(&self) -> PantryResult<Vec<PantryItem>> {
        self.scans.fetch_add(1, Ordering::Relaxed);
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn find_by_name(&self, name: &str) -> PantryResult<Vec<PantryItem>> {
        Ok(self
            .items
            .read()
            .await
            .values()
            .filter(|item| item.name == name)
            .cloned()
            .collect())
    }
}
