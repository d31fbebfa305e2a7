//! Pantry Tracker
//!
//! Inventory tracking over a remote document collection.
//!
//! Layered architecture:
//! - `domain`: Core entities and error types
//! - `repository`: Storage client abstractions and implementations
//! - `app`: Application state and the pantry operations
//!
//! Persisted state lives in the `"pantry"` collection behind the
//! [`PantryStore`] trait; the visible list lives in [`PantryApp`]. The
//! bundled backends are Cloud Firestore over REST and an in-memory map.
//!
//! ```no_run
//! use std::sync::Arc;
//! use pantry_tracker::{FirestoreConfig, FirestoreStore, PantryApp};
//!
//! # async fn run() -> pantry_tracker::PantryResult<()> {
//! let config = FirestoreConfig::new("api-key", "my-project");
//! let store = Arc::new(FirestoreStore::new(config)?);
//! let mut app = PantryApp::new(store);
//!
//! app.refresh().await?;
//! app.add_item("Rice", 3).await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod repository;

pub use app::{PantryApp, DEFAULT_QUANTITY};
pub use config::FirestoreConfig;
pub use domain::{PantryError, PantryItem, PantryResult};
pub use repository::{FirestoreStore, MemoryStore, PantryStore, COLLECTION_ID};
