//! # Press Infrastructure
//!
//! Concrete implementations of the ports defined in `press-core`.
//! This crate contains the key-value stores and the backend clients.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No network dependencies, in-memory only
//! - `http` - HTTP backend client via reqwest

pub mod backend;
pub mod storage;

// Re-exports - In-Memory
pub use backend::InMemoryPressApi;
pub use storage::{FileStore, InMemoryStore};

// Re-exports - HTTP
#[cfg(feature = "http")]
pub use backend::{HttpApiConfig, HttpPressApi};
