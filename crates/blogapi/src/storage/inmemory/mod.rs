//! In-memory storage backend.
//!
//! Posts live in a `BTreeMap` keyed by id behind `Arc<RwLock<_>>`. Scans walk
//! the map in key order, so a cursor is simply the last id handed out.
//!
//! # Example
//!
//! ```rust,ignore
//! use blogapi::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
