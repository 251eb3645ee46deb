//! # Press Shared
//!
//! Wire types exchanged with the publishing backend.
//! Both the HTTP client and the in-memory backend speak these shapes.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;

/// Header carrying the session identifier on authenticated requests.
pub const SESSION_HEADER: &str = "X-Session-ID";
