//! HTTP implementation of the backend port using reqwest.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use press_core::ApiError;
use press_core::domain::{ContentItem, Credentials, NewContent, Session, User};
use press_core::ports::PressApi;
use press_shared::dto::{
    ContentResponse, CreateContentRequest, CreateContentResponse, CredentialsRequest,
    DeleteContentResponse, HealthResponse, LoginResponse, RegisterResponse,
};
use press_shared::{ErrorResponse, SESSION_HEADER};

/// HTTP backend configuration.
#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    /// API root, e.g. `http://localhost:8000/api`.
    pub base_url: String,
}

impl Default for HttpApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
        }
    }
}

/// Backend client speaking JSON over HTTP.
///
/// No timeout is configured: a hung request waits until the server answers
/// or the connection drops.
pub struct HttpPressApi {
    client: Client,
    base_url: Url,
}

impl HttpPressApi {
    pub fn new(config: &HttpApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Transport(format!("invalid API base {}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Transport(format!(
                "invalid API base {}: not a hierarchical URL",
                config.base_url
            )));
        }

        tracing::info!(base_url = %base_url, "HTTP backend configured");

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Base URL with `segments` appended as percent-encoded path segments.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, "Backend request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let detail = ErrorResponse::parse(&body).and_then(|b| b.message().map(str::to_string));
        tracing::debug!(status = status.as_u16(), ?detail, "Backend rejected request");

        Err(ApiError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(error = %e, "Backend sent an unexpected body");
            ApiError::Decode(e.to_string())
        })
    }

    fn credentials_body(credentials: &Credentials) -> CredentialsRequest {
        CredentialsRequest {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        }
    }
}

fn session_from(dto: LoginResponse) -> Session {
    Session::new(
        dto.session_id,
        User::new(dto.user.id, dto.user.username, dto.user.created_at),
    )
}

fn content_from(dto: ContentResponse) -> ContentItem {
    ContentItem {
        id: dto.id,
        title: dto.title,
        content: dto.content,
        author: dto.author,
        user_id: dto.user_id,
        date: dto.date,
    }
}

#[async_trait]
impl PressApi for HttpPressApi {
    async fn register(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let request = self
            .client
            .post(self.endpoint(&["register"]))
            .json(&Self::credentials_body(credentials));
        let body: RegisterResponse = Self::decode(self.send(request).await?).await?;
        Ok(body.message)
    }

    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let request = self
            .client
            .post(self.endpoint(&["login"]))
            .json(&Self::credentials_body(credentials));
        let body: LoginResponse = Self::decode(self.send(request).await?).await?;
        Ok(session_from(body))
    }

    async fn list_content(
        &self,
        user_id: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<Vec<ContentItem>, ApiError> {
        let mut request = self.client.get(self.endpoint(&["content"]));
        if let Some(user_id) = user_id {
            request = request.query(&[("user_id", user_id)]);
        }
        if let Some(session_id) = session_id {
            request = request.header(SESSION_HEADER, session_id);
        }
        let body: Vec<ContentResponse> = Self::decode(self.send(request).await?).await?;
        Ok(body.into_iter().map(content_from).collect())
    }

    async fn create_content(
        &self,
        content: &NewContent,
        session_id: &str,
    ) -> Result<String, ApiError> {
        let request = self
            .client
            .post(self.endpoint(&["content"]))
            .header(SESSION_HEADER, session_id)
            .json(&CreateContentRequest {
                title: content.title.clone(),
                content: content.content.clone(),
                author: content.author.clone(),
                user_id: content.user_id.clone(),
            });
        let response = self.send(request).await?;
        let status = response.status().as_u16();
        let body: CreateContentResponse = Self::decode(response).await?;
        if !body.success {
            return Err(ApiError::Rejected {
                status,
                detail: None,
            });
        }
        Ok(body.id)
    }

    async fn delete_content(&self, id: &str, session_id: &str) -> Result<(), ApiError> {
        let request = self
            .client
            .delete(self.endpoint(&["content", id]))
            .header(SESSION_HEADER, session_id);
        let response = self.send(request).await?;
        let status = response.status().as_u16();
        let body: DeleteContentResponse = Self::decode(response).await?;
        if !body.success {
            return Err(ApiError::Rejected {
                status,
                detail: None,
            });
        }
        Ok(())
    }

    async fn health(&self) -> Result<String, ApiError> {
        let request = self.client.get(self.endpoint(&["health"]));
        let body: HealthResponse = Self::decode(self.send(request).await?).await?;
        Ok(body.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> HttpPressApi {
        HttpPressApi::new(&HttpApiConfig {
            base_url: format!("{}/api/", server.uri()),
        })
        .unwrap()
    }

    fn credentials() -> Credentials {
        Credentials::new("bob", "secret1").unwrap()
    }

    #[tokio::test]
    async fn test_login_parses_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(json!({"username": "bob", "password": "secret1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "session_id": "sess-1",
                "user": {"id": "u1", "username": "bob", "created_at": "2024-01-01T10:00:00"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = api(&server).login(&credentials()).await.unwrap();
        assert_eq!(session.session_id, "sess-1");
        assert_eq!(session.user.username, "bob");
        assert_eq!(session.user.id, "u1");
    }

    #[tokio::test]
    async fn test_rejection_carries_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let err = api(&server).login(&credentials()).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.detail(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_rejection_without_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = api(&server).register(&credentials()).await.unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 502, detail: None }));
    }

    #[tokio::test]
    async fn test_register_returns_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "Registration successful"})),
            )
            .mount(&server)
            .await;

        let message = api(&server).register(&credentials()).await.unwrap();
        assert_eq!(message, "Registration successful");
    }

    #[tokio::test]
    async fn test_user_content_sends_filter_and_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/content"))
            .and(query_param("user_id", "u1"))
            .and(header(SESSION_HEADER, "sess-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "c1",
                "title": "Hello",
                "content": "World",
                "author": "bob",
                "user_id": "u1",
                "date": "2024-01-02T08:00:00"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let items = api(&server)
            .list_content(Some("u1"), Some("sess-1"))
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Hello");
    }

    #[tokio::test]
    async fn test_public_content_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/content"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let items = api(&server).list_content(None, None).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_create_content_returns_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/content"))
            .and(header(SESSION_HEADER, "sess-1"))
            .and(body_json(json!({
                "title": "Hello",
                "content": "World",
                "author": "bob",
                "user_id": "u1"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": true, "id": "c9"})),
            )
            .mount(&server)
            .await;

        let new = NewContent::new("Hello", "World", "bob", "u1").unwrap();
        let id = api(&server).create_content(&new, "sess-1").await.unwrap();
        assert_eq!(id, "c9");
    }

    #[tokio::test]
    async fn test_delete_encodes_id_segment() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/content/a%2Fb"))
            .and(header(SESSION_HEADER, "sess-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        api(&server).delete_content("a/b", "sess-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/content"))
            .respond_with(ResponseTemplate::new(200).set_body_string("oops"))
            .mount(&server)
            .await;

        let err = api(&server).list_content(None, None).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .mount(&server)
            .await;

        assert_eq!(api(&server).health().await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let api = HttpPressApi::new(&HttpApiConfig {
            base_url: "http://127.0.0.1:9/api".to_string(),
        })
        .unwrap();

        let err = api.list_content(None, None).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn test_rejects_non_hierarchical_base() {
        let result = HttpPressApi::new(&HttpApiConfig {
            base_url: "mailto:someone@example.com".to_string(),
        });
        assert!(result.is_err());
    }
}
