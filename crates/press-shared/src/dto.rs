//! Data Transfer Objects - request/response bodies of the backend API.

use serde::{Deserialize, Serialize};

/// Body of `POST /register` and `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// A user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub created_at: String,
}

/// Answer to a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub session_id: String,
    pub user: UserResponse,
}

/// Answer to a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub message: String,
}

/// One published article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub user_id: String,
    pub date: String,
}

/// Body of `POST /content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContentRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    pub user_id: String,
}

/// Answer to a successful `POST /content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContentResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub id: String,
}

/// Answer to a successful `DELETE /content/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteContentResponse {
    #[serde(default = "default_success")]
    pub success: bool,
}

/// Answer of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

fn default_success() -> bool {
    true
}
