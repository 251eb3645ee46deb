//! Terminal adapters: navigation, confirmation prompts and page printing.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use press_client::view::{
    Action, ArticleCard, DashboardView, FeedView, LandingView, Notice, NoticeKind, Page, Panel,
    PanelKind,
};
use press_core::domain::Route;
use press_core::ports::{Confirmation, Navigator};

/// Remembers the last requested route until the command loop follows it.
#[derive(Default)]
pub struct PendingNavigation {
    route: Mutex<Option<Route>>,
}

impl PendingNavigation {
    pub fn take(&self) -> Option<Route> {
        match self.route.lock() {
            Ok(mut route) => route.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }
}

impl Navigator for PendingNavigation {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = %route, "Navigation requested");
        match self.route.lock() {
            Ok(mut pending) => *pending = Some(route),
            Err(poisoned) => *poisoned.into_inner() = Some(route),
        }
    }
}

/// Asks on stderr and reads the answer from stdin.
pub struct PromptConfirmation {
    assume_yes: bool,
}

impl PromptConfirmation {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirmation for PromptConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{} [y/N] ", prompt);
        io::stderr().flush().ok();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn render_notices(notices: &[Notice], out: &mut impl Write) -> io::Result<()> {
    for notice in notices {
        render_notice(notice, out)?;
    }
    Ok(())
}

fn render_notice(notice: &Notice, out: &mut impl Write) -> io::Result<()> {
    match notice.kind {
        NoticeKind::Info => writeln!(out, "* {}", notice.text),
        NoticeKind::Error => writeln!(out, "! {}", notice.text),
    }
}

pub fn render_page(page: &Page, out: &mut impl Write) -> io::Result<()> {
    match page {
        Page::Landing(view) => render_landing(view, out),
        Page::Dashboard(view) => render_dashboard(view, out),
        Page::NotFound { path } => writeln!(out, "Page not found: {}", path),
        Page::Redirecting(route) => writeln!(out, "-> {}", route),
    }
}

fn render_landing(view: &LandingView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== Articles ==")?;
    render_feed(&view.feed, out)?;
    render_actions(&view.actions, out)
}

fn render_dashboard(view: &DashboardView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== Dashboard ({}) ==", view.username)?;
    if let Some(notice) = &view.notice {
        render_notice(notice, out)?;
    }

    match &view.panel {
        Panel::List(feed) => {
            writeln!(out, "-- My articles --")?;
            render_feed(feed, out)?;
        }
        Panel::AddArticle(form) => {
            writeln!(out, "-- Add article --")?;
            writeln!(out, "Title: {}", form.title)?;
            writeln!(out, "Body:  {}", form.body)?;
        }
        Panel::Profile(profile) => {
            writeln!(out, "-- Profile --")?;
            writeln!(out, "Username:   {}", profile.username)?;
            writeln!(out, "ID:         {}", profile.user_id)?;
            writeln!(out, "Registered: {}", profile.registered)?;
        }
    }

    render_actions(&view.actions, out)
}

fn render_feed(feed: &FeedView, out: &mut impl Write) -> io::Result<()> {
    match feed {
        FeedView::Articles(cards) => {
            for card in cards {
                render_card(card, out)?;
            }
            Ok(())
        }
        FeedView::Empty { message } => writeln!(out, "{}", message),
        FeedView::Failed { message } => writeln!(out, "! {}", message),
    }
}

fn render_card(card: &ArticleCard, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", card.title)?;
    writeln!(out, "  {}", card.preview)?;
    match &card.author {
        Some(author) => writeln!(out, "  by {} | {}", author, card.date)?,
        None => writeln!(out, "  {}", card.date)?,
    }
    for action in &card.actions {
        if let Action::Delete { id } = action {
            writeln!(out, "  [press delete {}]", id)?;
        }
    }
    Ok(())
}

fn render_actions(actions: &[Action], out: &mut impl Write) -> io::Result<()> {
    let hints: Vec<&str> = actions
        .iter()
        .filter_map(|action| match action {
            Action::ShowLogin => Some("press login"),
            Action::ShowRegister => Some("press register"),
            Action::ShowPanel(PanelKind::List) => Some("press list"),
            Action::ShowPanel(PanelKind::AddArticle) => Some("press add"),
            Action::ShowPanel(PanelKind::Profile) => Some("press profile"),
            Action::Logout => Some("press logout"),
            Action::SaveArticle | Action::Delete { .. } => None,
        })
        .collect();

    if hints.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "[{}]", hints.join("] ["))
}
