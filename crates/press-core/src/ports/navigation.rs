//! Page-level interaction ports: navigation and confirmation prompts.

use crate::domain::Route;

/// Moves the user to another page.
pub trait Navigator: Send + Sync {
    /// Request navigation to `route`. Takes effect after the current handler
    /// returns.
    fn navigate(&self, route: Route);
}

/// Asks the user a yes/no question.
pub trait Confirmation: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}
