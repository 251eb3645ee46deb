//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod api;
mod navigation;
mod storage;

pub use api::PressApi;
pub use navigation::{Confirmation, Navigator};
pub use storage::KeyValueStore;
