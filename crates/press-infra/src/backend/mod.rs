//! Backend implementations - HTTP client and in-memory stand-in.

mod memory;

#[cfg(feature = "http")]
mod http;

pub use memory::InMemoryPressApi;

#[cfg(feature = "http")]
pub use http::{HttpApiConfig, HttpPressApi};
