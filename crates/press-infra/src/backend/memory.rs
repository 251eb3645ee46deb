//! In-memory backend - a stand-in for the publishing server, used in tests
//! and offline mode.
//!
//! Follows the server's rules: usernames are unique, sessions live until the
//! backend forgets them, only the owner may delete an item.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use press_core::ApiError;
use press_core::domain::{ContentItem, Credentials, NewContent, Session, User};
use press_core::ports::PressApi;

const BAD_REQUEST: u16 = 400;
const FORBIDDEN: u16 = 403;
const NOT_FOUND: u16 = 404;

struct Account {
    user: User,
    // Test double: the password is kept verbatim.
    password: String,
}

#[derive(Default)]
struct State {
    accounts: Vec<Account>,
    /// session id -> user id
    sessions: HashMap<String, String>,
    content: Vec<ContentItem>,
}

/// In-memory implementation of the backend port.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPressApi {
    state: RwLock<State>,
    requests: AtomicUsize,
}

impl InMemoryPressApi {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
            requests: AtomicUsize::new(0),
        }
    }

    /// Backend pre-populated with an `admin` / `admin123` account and a
    /// welcome article.
    pub async fn seeded() -> Self {
        let api = Self::new();
        {
            let mut state = api.state.write().await;
            let admin = User::new("admin-id", "admin", now());
            state.content.push(ContentItem {
                id: "welcome-id".to_string(),
                title: "Welcome".to_string(),
                content: "The first article".to_string(),
                author: admin.username.clone(),
                user_id: admin.id.clone(),
                date: now(),
            });
            state.accounts.push(Account {
                user: admin,
                password: "admin123".to_string(),
            });
        }
        api
    }

    /// Number of calls made through the port so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Forget every session, as a server restart would.
    pub async fn revoke_sessions(&self) {
        self.state.write().await.sessions.clear();
    }

    fn record(&self, call: &'static str) {
        self.requests.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(call, "In-memory backend call");
    }

    fn not_authorized() -> ApiError {
        ApiError::rejected(ApiError::UNAUTHORIZED, "Not authorized")
    }
}

impl Default for InMemoryPressApi {
    fn default() -> Self {
        Self::new()
    }
}

fn now() -> String {
    Utc::now().naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[async_trait]
impl PressApi for InMemoryPressApi {
    async fn register(&self, credentials: &Credentials) -> Result<String, ApiError> {
        self.record("register");
        let mut state = self.state.write().await;

        if state
            .accounts
            .iter()
            .any(|a| a.user.username == credentials.username)
        {
            return Err(ApiError::rejected(BAD_REQUEST, "User already exists"));
        }

        state.accounts.push(Account {
            user: User::new(Uuid::new_v4().to_string(), &credentials.username, now()),
            password: credentials.password.clone(),
        });

        Ok("Registration successful".to_string())
    }

    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        self.record("login");
        let mut state = self.state.write().await;

        let user = state
            .accounts
            .iter()
            .find(|a| a.user.username == credentials.username && a.password == credentials.password)
            .map(|a| a.user.clone())
            .ok_or_else(|| ApiError::rejected(ApiError::UNAUTHORIZED, "Invalid credentials"))?;

        let session_id = Uuid::new_v4().to_string();
        state.sessions.insert(session_id.clone(), user.id.clone());

        Ok(Session::new(session_id, user))
    }

    async fn list_content(
        &self,
        user_id: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<Vec<ContentItem>, ApiError> {
        self.record("list_content");
        let state = self.state.read().await;

        // A session header, when sent, must still be known.
        if let Some(session_id) = session_id {
            if !state.sessions.contains_key(session_id) {
                return Err(Self::not_authorized());
            }
        }

        Ok(state
            .content
            .iter()
            .filter(|item| user_id.is_none_or(|owner| item.user_id == owner))
            .cloned()
            .collect())
    }

    async fn create_content(
        &self,
        content: &NewContent,
        session_id: &str,
    ) -> Result<String, ApiError> {
        self.record("create_content");
        let mut state = self.state.write().await;

        if !state.sessions.contains_key(session_id) {
            return Err(Self::not_authorized());
        }

        let id = Uuid::new_v4().to_string();
        state.content.push(ContentItem {
            id: id.clone(),
            title: content.title.clone(),
            content: content.content.clone(),
            author: content.author.clone(),
            user_id: content.user_id.clone(),
            date: now(),
        });

        Ok(id)
    }

    async fn delete_content(&self, id: &str, session_id: &str) -> Result<(), ApiError> {
        self.record("delete_content");
        let mut state = self.state.write().await;

        let owner = state
            .sessions
            .get(session_id)
            .cloned()
            .ok_or_else(Self::not_authorized)?;

        let position = state
            .content
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ApiError::rejected(NOT_FOUND, "Article not found"))?;

        if state.content[position].user_id != owner {
            return Err(ApiError::rejected(FORBIDDEN, "Forbidden"));
        }

        state.content.remove(position);
        Ok(())
    }

    async fn health(&self) -> Result<String, ApiError> {
        self.record("health");
        Ok("ok".to_string())
    }
}
