//! Domain Layer
//!
//! Contains the pantry entity and core error types.
//! This layer has no dependencies on the storage backends.

mod error;
mod item;

pub use error::{PantryError, PantryResult};
pub use item::PantryItem;
