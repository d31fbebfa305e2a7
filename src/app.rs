//! Pantry Application
//!
//! The application state and its operations. [`PantryApp`] owns the visible
//! item list; every mutating operation re-reads the collection on success
//! and returns the updated canonical list. Lookup misses on adjust and
//! remove are logged no-ops. Backend failures are logged and returned to
//! the caller; the visible list keeps its last good contents.

use std::sync::Arc;

use crate::domain::{PantryError, PantryItem, PantryResult};
use crate::repository::PantryStore;

/// Quantity the add form falls back to when the user does not supply one
pub const DEFAULT_QUANTITY: i64 = 1;

/// Application state plus the pantry operations
pub struct PantryApp {
    store: Arc<dyn PantryStore>,
    items: Vec<PantryItem>,
}

impl PantryApp {
    /// Create an app with an empty visible list; call [`refresh`](Self::refresh)
    /// to populate it
    pub fn new(store: Arc<dyn PantryStore>) -> Self {
        Self {
            store,
            items: Vec::new(),
        }
    }

    /// The visible list as of the last successful refresh or search
    pub fn items(&self) -> &[PantryItem] {
        &self.items
    }

    /// Re-read the whole collection and replace the visible list with the
    /// records holding a positive quantity
    pub async fn refresh(&mut self) -> PantryResult<Vec<PantryItem>> {
        let records = Self::logged("refresh pantry", self.store.list().await)?;
        self.items = records.into_iter().filter(PantryItem::is_visible).collect();
        Ok(self.items.clone())
    }

    /// Add `quantity` units of `name`: stacks onto an existing record or
    /// creates a new one. Names are trimmed; blank names are rejected.
    pub async fn add_item(&mut self, name: &str, quantity: i64) -> PantryResult<Vec<PantryItem>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PantryError::InvalidInput(
                "item name cannot be empty".to_string(),
            ));
        }

        let existing = Self::logged("add item", self.store.get(name).await)?;
        let write = match existing {
            Some(_) => self.store.increment_quantity(name, quantity).await,
            None => self.store.put(&PantryItem::new(name, quantity)).await,
        };
        Self::logged("add item", write)?;

        self.refresh().await
    }

    /// Apply `delta` to an existing item: the record stays when the result
    /// is positive and is deleted otherwise. A missing name is a logged
    /// no-op that returns the list unchanged, without a re-read.
    pub async fn adjust_quantity(
        &mut self,
        name: &str,
        delta: i64,
    ) -> PantryResult<Vec<PantryItem>> {
        let item = match Self::logged("adjust quantity", self.store.get(name).await)? {
            Some(item) => item,
            None => {
                log::warn!("item not found: {}", name);
                return Ok(self.items.clone());
            }
        };

        let write = if item.quantity.saturating_add(delta) > 0 {
            self.store.increment_quantity(name, delta).await
        } else {
            self.store.delete(name).await
        };
        Self::logged("adjust quantity", write)?;

        self.refresh().await
    }

    /// Remove a single unit of `name`, deleting the record when the last
    /// unit goes
    pub async fn remove_one(&mut self, name: &str) -> PantryResult<Vec<PantryItem>> {
        self.adjust_quantity(name, -1).await
    }

    /// Replace the visible list with the records whose name equals `query`
    /// exactly. A blank query falls back to a full refresh.
    pub async fn search(&mut self, query: &str) -> PantryResult<Vec<PantryItem>> {
        let query = query.trim();
        if query.is_empty() {
            return self.refresh().await;
        }

        let matches = Self::logged("search pantry", self.store.find_by_name(query).await)?;
        self.items = matches.into_iter().filter(PantryItem::is_visible).collect();
        Ok(self.items.clone())
    }

    /// Log a backend failure against the operation that hit it
    fn logged<T>(operation: &str, result: PantryResult<T>) -> PantryResult<T> {
        if let Err(e) = &result {
            log::error!("{} failed: {}", operation, e);
        }
        result
    }
}
