//! View controller - page-load routing, form handlers and dashboard panels.

use std::sync::Arc;

use press_core::domain::{Credentials, Route, Session};
use press_core::ports::{Confirmation, KeyValueStore, Navigator, PressApi};

use crate::auth::AuthClient;
use crate::content::{ContentClient, ContentError, DeleteOutcome};
use crate::messages;
use crate::session::SessionStore;
use crate::view::{ArticleForm, Notice, Page, Panel, PanelKind, render};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirmation: String,
}

/// Decides what a page shows from the route and the stored session.
pub struct ViewController {
    session: SessionStore,
    auth: AuthClient,
    content: ContentClient,
    navigator: Arc<dyn Navigator>,
}

impl ViewController {
    pub fn new(
        api: Arc<dyn PressApi>,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        confirmation: Arc<dyn Confirmation>,
    ) -> Self {
        let session = SessionStore::new(store);
        let auth = AuthClient::new(api.clone(), session.clone(), navigator.clone());
        let content = ContentClient::new(api, session.clone(), navigator.clone(), confirmation);
        Self {
            session,
            auth,
            content,
            navigator,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }

    /// Page-load state machine.
    ///
    /// | route     | session | result                      |
    /// |-----------|---------|-----------------------------|
    /// | landing   | yes     | redirect to dashboard       |
    /// | landing   | no      | public feed + auth actions  |
    /// | dashboard | yes     | owner's list                |
    /// | dashboard | no      | redirect to landing         |
    pub async fn load(&self, route: &Route) -> Page {
        tracing::debug!(route = %route, "Loading page");
        match (route, self.session.current()) {
            (Route::Landing, Some(_)) => self.redirect(Route::Dashboard),
            (Route::Landing, None) => {
                let result = self.content.fetch_public_content().await;
                Page::Landing(render::landing(render::public_feed(&result)))
            }
            (Route::Dashboard, Some(session)) => self.list_page(&session, None).await,
            (Route::Dashboard, None) => self.redirect(Route::Landing),
            (Route::Other(path), _) => Page::NotFound { path: path.clone() },
        }
    }

    /// Login form submit. Navigates to the dashboard on success.
    pub async fn submit_login(&self, form: &LoginForm) -> Vec<Notice> {
        let outcome = self.auth.login(&form.username, &form.password).await;
        if !outcome.success {
            return vec![Notice::error(outcome.message)];
        }
        self.navigator.navigate(Route::Dashboard);
        Vec::new()
    }

    /// Register form submit. Registration alone does not sign in, so a
    /// successful registration is followed by a login.
    pub async fn submit_register(&self, form: &RegisterForm) -> Vec<Notice> {
        if let Err(e) =
            Credentials::for_registration(&form.username, &form.password, &form.confirmation)
        {
            return vec![Notice::error(e.to_string())];
        }

        let outcome = self.auth.register(&form.username, &form.password).await;
        if !outcome.success {
            return vec![Notice::error(outcome.message)];
        }

        let mut notices = vec![Notice::info(outcome.message)];
        let login = self.auth.login(&form.username, &form.password).await;
        if login.success {
            self.navigator.navigate(Route::Dashboard);
        } else {
            notices.push(Notice::error(login.message));
        }
        notices
    }

    /// Swap the dashboard panel. Only the list panel talks to the backend.
    pub async fn show_panel(&self, kind: PanelKind) -> Page {
        let Some(session) = self.session.current() else {
            return self.redirect(Route::Landing);
        };

        match kind {
            PanelKind::List => self.list_page(&session, None).await,
            PanelKind::AddArticle => Page::Dashboard(render::dashboard(
                &session.user,
                Panel::AddArticle(ArticleForm::default()),
                None,
            )),
            PanelKind::Profile => Page::Dashboard(render::dashboard(
                &session.user,
                Panel::Profile(render::profile(&session.user)),
                None,
            )),
        }
    }

    /// Add-article submit. On success the list is shown again, refreshed.
    pub async fn submit_article(&self, form: ArticleForm) -> Page {
        let Some(session) = self.session.current() else {
            return self.redirect(Route::Landing);
        };

        let result = self
            .content
            .create_content(
                &form.title,
                &form.body,
                &session.user.username,
                &session.user.id,
                &session.session_id,
            )
            .await;

        let notice = match result {
            Ok(_) => {
                return self
                    .list_page(&session, Some(Notice::info(messages::ARTICLE_SAVED)))
                    .await;
            }
            Err(ContentError::SessionExpired) => return Page::Redirecting(Route::Landing),
            Err(e @ ContentError::Validation(_)) => Notice::error(e.to_string()),
            Err(e) => Notice::error(format!("{}: {}", messages::SAVE_FAILED, e)),
        };

        Page::Dashboard(render::dashboard(
            &session.user,
            Panel::AddArticle(form),
            Some(notice),
        ))
    }

    /// Delete from the dashboard list. Without a stored session this
    /// redirects to landing without prompting; otherwise the confirmation
    /// is asked before any request. `None` when the user declined and the
    /// page is unchanged.
    pub async fn delete_article(&self, id: &str) -> Option<Page> {
        let Some(session) = self.session.current() else {
            return Some(self.redirect(Route::Landing));
        };

        let notice = match self.content.delete_content(id, &session.session_id).await {
            Ok(DeleteOutcome::Cancelled) => return None,
            Ok(DeleteOutcome::Deleted) => Notice::info(messages::ARTICLE_DELETED),
            Err(ContentError::SessionExpired) => return Some(Page::Redirecting(Route::Landing)),
            Err(e) => Notice::error(format!("{}: {}", messages::DELETE_FAILED, e)),
        };

        Some(self.list_page(&session, Some(notice)).await)
    }

    pub fn logout(&self) {
        self.auth.logout();
    }

    async fn list_page(&self, session: &Session, notice: Option<Notice>) -> Page {
        let result = self
            .content
            .fetch_user_content(&session.user.id, &session.session_id)
            .await;

        // The content client already cleared the session and navigated.
        if matches!(result, Err(ContentError::SessionExpired)) {
            return Page::Redirecting(Route::Landing);
        }

        Page::Dashboard(render::dashboard(
            &session.user,
            Panel::List(render::own_list(&result)),
            notice,
        ))
    }

    fn redirect(&self, route: Route) -> Page {
        self.navigator.navigate(route.clone());
        Page::Redirecting(route)
    }
}
