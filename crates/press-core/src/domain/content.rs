use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::User;
use crate::error::ValidationError;

/// Content item - a published article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub user_id: String,
    pub date: String,
}

impl ContentItem {
    /// Calendar day the item was published on.
    ///
    /// The backend sends ISO-8601 timestamps, with or without an offset.
    pub fn published_on(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }
}

/// Parse the day part of an ISO-8601 timestamp.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Fields the client supplies when publishing. Id and date are assigned by
/// the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContent {
    pub title: String,
    pub content: String,
    pub author: String,
    pub user_id: String,
}

impl NewContent {
    /// Build a new article. Title and body must be non-empty.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let content = content.into();
        if title.is_empty() || content.is_empty() {
            return Err(ValidationError::EmptyFields);
        }
        Ok(Self {
            title,
            content,
            author: author.into(),
            user_id: user_id.into(),
        })
    }

    /// Article authored by `user`.
    pub fn by(
        user: &User,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(title, content, user.username.clone(), user.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(date: &str) -> ContentItem {
        ContentItem {
            id: "welcome-id".into(),
            title: "Welcome".into(),
            content: "First article".into(),
            author: "admin".into(),
            user_id: "admin-id".into(),
            date: date.into(),
        }
    }

    #[test]
    fn test_published_on_naive_timestamp() {
        let day = item("2024-03-05T14:22:10.123456").published_on();
        assert_eq!(day, NaiveDate::from_ymd_opt(2024, 3, 5));
    }

    #[test]
    fn test_published_on_rfc3339() {
        let day = item("2024-03-05T23:59:00+00:00").published_on();
        assert_eq!(day, NaiveDate::from_ymd_opt(2024, 3, 5));
    }

    #[test]
    fn test_published_on_garbage() {
        assert_eq!(item("yesterday").published_on(), None);
    }

    #[test]
    fn test_new_content_requires_title_and_body() {
        assert_eq!(
            NewContent::new("", "body", "bob", "u1"),
            Err(ValidationError::EmptyFields)
        );
        assert_eq!(
            NewContent::new("title", "", "bob", "u1"),
            Err(ValidationError::EmptyFields)
        );
        assert!(NewContent::new("title", "body", "bob", "u1").is_ok());
    }

    #[test]
    fn test_new_content_by_user() {
        let user = User::new("u1", "bob", "2024-01-01T00:00:00");
        let new = NewContent::by(&user, "Hello", "World").unwrap();
        assert_eq!(new.author, "bob");
        assert_eq!(new.user_id, "u1");
    }
}
