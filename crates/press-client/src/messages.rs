//! User-facing message texts.

pub const LOGIN_SUCCEEDED: &str = "Login successful";
pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const CONNECTION_FAILED: &str = "Could not connect to the server";
pub const SESSION_NOT_SAVED: &str = "Could not save the session";

pub const LOAD_FAILED: &str = "Failed to load articles";
pub const SAVE_FAILED: &str = "Failed to save article";
pub const DELETE_FAILED: &str = "Failed to delete article";
pub const ARTICLE_SAVED: &str = "Article saved!";
pub const ARTICLE_DELETED: &str = "Article deleted!";
pub const CONFIRM_DELETE: &str = "Delete this article?";

pub const NO_ARTICLES: &str = "No articles yet";
pub const NO_OWN_ARTICLES: &str = "You have no articles yet";
