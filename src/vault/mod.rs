//! Vault module — encrypted credential storage.
//!
//! This module provides:
//! - `Entry`, `Vault`, and `Account` types (`entry`)
//! - The injected persistence boundary (`kv`)
//! - High-level `VaultStore` for account, CRUD, and import/export (`store`)

pub mod entry;
pub mod kv;
pub mod store;

// Re-export the most commonly used items.
pub use entry::{Account, Entry, EntryDraft, EntryPatch, Vault};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use store::VaultStore;
