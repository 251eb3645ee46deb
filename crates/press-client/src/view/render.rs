//! Pure renderers: application state in, view model out.

use press_core::domain::{ContentItem, User, parse_day};

use super::{
    Action, ArticleCard, DashboardView, FeedView, LandingView, Notice, Panel, PanelKind,
    ProfileView,
};
use crate::content::ContentError;
use crate::messages;

/// Preview length on the public feed, in characters.
pub const FEED_PREVIEW_CHARS: usize = 200;
/// Preview length on the dashboard list, in characters.
pub const LIST_PREVIEW_CHARS: usize = 150;

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// `YYYY-MM-DD` for an ISO-8601 timestamp; unparseable input is shown as is.
pub fn format_day(raw: &str) -> String {
    parse_day(raw)
        .map(|day| day.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Card on the public feed.
pub fn feed_card(item: &ContentItem) -> ArticleCard {
    ArticleCard {
        id: item.id.clone(),
        title: item.title.clone(),
        preview: preview(&item.content, FEED_PREVIEW_CHARS),
        author: Some(item.author.clone()),
        date: format_day(&item.date),
        actions: Vec::new(),
    }
}

/// Card on the owner's dashboard list, with a delete action.
pub fn owned_card(item: &ContentItem) -> ArticleCard {
    ArticleCard {
        id: item.id.clone(),
        title: item.title.clone(),
        preview: preview(&item.content, LIST_PREVIEW_CHARS),
        author: None,
        date: format_day(&item.date),
        actions: vec![Action::Delete {
            id: item.id.clone(),
        }],
    }
}

/// Public feed. Empty and failed loads are distinct states.
pub fn public_feed(result: &Result<Vec<ContentItem>, ContentError>) -> FeedView {
    feed(result, feed_card, messages::NO_ARTICLES)
}

/// The owner's list.
pub fn own_list(result: &Result<Vec<ContentItem>, ContentError>) -> FeedView {
    feed(result, owned_card, messages::NO_OWN_ARTICLES)
}

fn feed(
    result: &Result<Vec<ContentItem>, ContentError>,
    card: fn(&ContentItem) -> ArticleCard,
    empty: &str,
) -> FeedView {
    match result {
        Ok(items) if items.is_empty() => FeedView::Empty {
            message: empty.to_string(),
        },
        Ok(items) => FeedView::Articles(items.iter().map(card).collect()),
        Err(_) => FeedView::Failed {
            message: messages::LOAD_FAILED.to_string(),
        },
    }
}

pub fn landing(feed: FeedView) -> LandingView {
    LandingView {
        feed,
        actions: vec![Action::ShowLogin, Action::ShowRegister],
    }
}

pub fn profile(user: &User) -> ProfileView {
    ProfileView {
        username: user.username.clone(),
        user_id: user.id.clone(),
        registered: format_day(&user.created_at),
    }
}

pub fn dashboard(user: &User, panel: Panel, notice: Option<Notice>) -> DashboardView {
    let mut actions = vec![
        Action::ShowPanel(PanelKind::List),
        Action::ShowPanel(PanelKind::AddArticle),
        Action::ShowPanel(PanelKind::Profile),
    ];
    match &panel {
        Panel::AddArticle(_) => actions.push(Action::SaveArticle),
        Panel::Profile(_) => actions.push(Action::Logout),
        Panel::List(_) => {}
    }

    DashboardView {
        username: user.username.clone(),
        panel,
        notice,
        actions,
    }
}
