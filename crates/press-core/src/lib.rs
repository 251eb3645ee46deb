//! # Press Core
//!
//! The domain layer of the Pressroom client.
//! This crate holds the data model, validated inputs and the port traits the
//! client is written against. It has no I/O of its own.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{ApiError, StorageError, ValidationError};
