//! View model - what a page shows, independent of how it is drawn.
//!
//! Pages are built by the pure functions in [`render`]; an adapter (the
//! terminal printer, a DOM writer) turns them into output.

pub mod render;

use press_core::domain::Route;

/// A rendered page, or the redirect taken instead of rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Landing(LandingView),
    Dashboard(DashboardView),
    NotFound { path: String },
    /// Navigation to the route has been requested; nothing else to show.
    Redirecting(Route),
}

/// Public feed plus the sign-in affordances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingView {
    pub feed: FeedView,
    pub actions: Vec<Action>,
}

/// A list of articles, which may be empty or have failed to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedView {
    Articles(Vec<ArticleCard>),
    /// Loaded fine, nothing to show.
    Empty { message: String },
    Failed { message: String },
}

impl FeedView {
    pub fn articles(&self) -> &[ArticleCard] {
        match self {
            Self::Articles(cards) => cards,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub id: String,
    pub title: String,
    pub preview: String,
    /// Author name, shown on the public feed only.
    pub author: Option<String>,
    pub date: String,
    pub actions: Vec<Action>,
}

/// Signed-in area: header with the username and one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub username: String,
    pub panel: Panel,
    pub notice: Option<Notice>,
    pub actions: Vec<Action>,
}

/// Mutually exclusive dashboard panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    List(FeedView),
    AddArticle(ArticleForm),
    Profile(ProfileView),
}

/// Panel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    List,
    AddArticle,
    Profile,
}

/// Add-article form contents, kept across a failed submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleForm {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub username: String,
    pub user_id: String,
    pub registered: String,
}

/// Something the user can do from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ShowLogin,
    ShowRegister,
    ShowPanel(PanelKind),
    SaveArticle,
    Delete { id: String },
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A one-off message shown to the user (the browser version used alerts).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}
