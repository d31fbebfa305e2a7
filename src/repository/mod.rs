//! Repository Layer
//!
//! Storage client abstractions and implementations for the pantry
//! document collection.

mod document;
mod firestore;
mod memory;
mod traits;


pub use firestore::{FirestoreStore, COLLECTION_ID};
pub use memory::MemoryStore;
pub use traits::PantryStore;
