//! Repository Layer - Storage Client Contract
//!
//! Defines the abstract interface to the pantry document collection.
//! Implementations can use Cloud Firestore, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{PantryItem, PantryResult};

/// Point operations and filtered scans over the pantry collection
///
/// Documents are keyed by item name. Every operation maps to a single
/// backend call; there is no retry and no multi-key coordination.
#[async_trait]
pub trait PantryStore: Send + Sync {
    /// Point lookup by item name; `None` when no record exists
    async fn get(&self, name: &str) -> PantryResult<Option<PantryItem>>;

    /// Point write: create the record or replace it wholesale
    async fn put(&self, item: &PantryItem) -> PantryResult<()>;

    /// Atomically add `delta` (which may be negative) to the stored quantity
    async fn increment_quantity(&self, name: &str, delta: i64) -> PantryResult<()>;

    /// Point delete; deleting an absent name succeeds
    async fn delete(&self, name: &str) -> PantryResult<()>;

    /// Scan every record in the collection's natural key order
    async fn list(&self) -> PantryResult<Vec<PantryItem>>;

    /// Filtered scan: records whose `name` field equals `name` exactly
    async fn find_by_name(&self, name: &str) -> PantryResult<Vec<PantryItem>>;
}
