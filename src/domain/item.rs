//! Pantry Item Entity
//!
//! A named, quantity-tracked inventory record. The name doubles as the
//! document key in the backing collection, so two records can never share
//! a name.

use serde::{Deserialize, Serialize};

/// A pantry inventory record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryItem {
    /// Unique item name, also the document key
    pub name: String,
    /// Units on hand; records at zero or below are deleted or hidden
    pub quantity: i64,
}

impl PantryItem {
    /// Create a new item
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Whether the record should appear in a refreshed list
    pub fn is_visible(&self) -> bool {
        self.quantity > 0
    }
}
