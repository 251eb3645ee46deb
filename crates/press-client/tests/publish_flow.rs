//! End-to-end flow against the in-memory backend: log in, publish, list,
//! delete, list again.

use std::sync::{Arc, Mutex};

use press_client::view::{ArticleForm, Page, Panel, PanelKind};
use press_client::{LoginForm, ViewController};
use press_core::domain::Route;
use press_core::ports::{Confirmation, Navigator};
use press_infra::{InMemoryPressApi, InMemoryStore};

#[derive(Default)]
struct LastRoute(Mutex<Option<Route>>);

impl Navigator for LastRoute {
    fn navigate(&self, route: Route) {
        *self.0.lock().unwrap() = Some(route);
    }
}

struct AlwaysYes;

impl Confirmation for AlwaysYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

fn titles(page: &Page) -> Vec<String> {
    match page {
        Page::Dashboard(view) => match &view.panel {
            Panel::List(feed) => feed.articles().iter().map(|c| c.title.clone()).collect(),
            other => panic!("expected list panel, got {:?}", other),
        },
        other => panic!("expected dashboard, got {:?}", other),
    }
}

fn id_of(page: &Page, title: &str) -> String {
    match page {
        Page::Dashboard(view) => match &view.panel {
            Panel::List(feed) => feed
                .articles()
                .iter()
                .find(|c| c.title == title)
                .map(|c| c.id.clone())
                .expect("article listed"),
            other => panic!("expected list panel, got {:?}", other),
        },
        other => panic!("expected dashboard, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_create_list_delete() {
    let navigator = Arc::new(LastRoute::default());
    let controller = ViewController::new(
        Arc::new(InMemoryPressApi::seeded().await),
        Arc::new(InMemoryStore::new()),
        navigator.clone(),
        Arc::new(AlwaysYes),
    );

    // Landing page, signed out.
    assert!(matches!(controller.load(&Route::Landing).await, Page::Landing(_)));

    let notices = controller
        .submit_login(&LoginForm {
            username: "admin".into(),
            password: "admin123".into(),
        })
        .await;
    assert!(notices.is_empty());
    assert_eq!(*navigator.0.lock().unwrap(), Some(Route::Dashboard));

    let page = controller.show_panel(PanelKind::AddArticle).await;
    assert!(matches!(page, Page::Dashboard(_)));

    let page = controller
        .submit_article(ArticleForm {
            title: "Release notes".into(),
            body: "Version one is out.".into(),
        })
        .await;
    assert!(titles(&page).contains(&"Release notes".to_string()));

    let listed = controller.load(&Route::Dashboard).await;
    assert_eq!(titles(&listed), titles(&page));

    let id = id_of(&listed, "Release notes");
    let page = controller
        .delete_article(&id)
        .await
        .expect("confirmed delete changes the page");
    assert!(!titles(&page).contains(&"Release notes".to_string()));

    let listed = controller.load(&Route::Dashboard).await;
    assert!(!titles(&listed).contains(&"Release notes".to_string()));
}
