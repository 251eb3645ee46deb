//! # Press Client
//!
//! The client's application layer: session persistence, the auth and content
//! clients, and the view controller that turns a route plus session state
//! into a page.
//!
//! Everything talks to the outside world through the ports in `press-core`,
//! so the same code runs against the HTTP backend or the in-memory one.

pub mod auth;
pub mod content;
pub mod controller;
pub mod messages;
pub mod session;
pub mod view;

#[cfg(test)]
mod testing;

pub use auth::{AuthClient, AuthOutcome};
pub use content::{ContentClient, ContentError, DeleteOutcome};
pub use controller::{LoginForm, RegisterForm, ViewController};
pub use session::SessionStore;
pub use view::Page;
