//! Test doubles for the interaction ports.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use press_core::domain::{ContentItem, Credentials, NewContent, Route, Session};
use press_core::ports::{Confirmation, KeyValueStore, Navigator, PressApi};
use press_core::{ApiError, StorageError};
use press_infra::InMemoryStore;

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<Route> {
        self.routes.lock().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.routes.lock().unwrap().len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

pub struct FixedConfirmation {
    answer: bool,
    asked: AtomicUsize,
}

impl FixedConfirmation {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl Confirmation for FixedConfirmation {
    fn confirm(&self, _prompt: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

/// In-memory store that fails every write to one key.
pub struct RefusingStore {
    pub inner: InMemoryStore,
    refused: &'static str,
}

impl RefusingStore {
    pub fn new(refused: &'static str) -> Self {
        Self {
            inner: InMemoryStore::new(),
            refused,
        }
    }
}

impl KeyValueStore for RefusingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.refused {
            return Err(StorageError::Io("disk full".to_string()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

/// Backend that is never reachable.
pub struct UnreachableApi;

fn refused() -> ApiError {
    ApiError::Transport("connection refused".to_string())
}

#[async_trait]
impl PressApi for UnreachableApi {
    async fn register(&self, _: &Credentials) -> Result<String, ApiError> {
        Err(refused())
    }

    async fn login(&self, _: &Credentials) -> Result<Session, ApiError> {
        Err(refused())
    }

    async fn list_content(
        &self,
        _: Option<&str>,
        _: Option<&str>,
    ) -> Result<Vec<ContentItem>, ApiError> {
        Err(refused())
    }

    async fn create_content(&self, _: &NewContent, _: &str) -> Result<String, ApiError> {
        Err(refused())
    }

    async fn delete_content(&self, _: &str, _: &str) -> Result<(), ApiError> {
        Err(refused())
    }

    async fn health(&self) -> Result<String, ApiError> {
        Err(refused())
    }
}
