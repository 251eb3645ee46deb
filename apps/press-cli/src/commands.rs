//! Command-line surface and the command loop.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use press_client::view::{ArticleForm, Page, PanelKind};
use press_client::{LoginForm, RegisterForm, ViewController};
use press_core::domain::Route;
use press_core::ports::PressApi;

use crate::terminal::{PendingNavigation, render_notices, render_page};

/// Redirect chains longer than this are a bug, not a page.
const MAX_REDIRECTS: usize = 5;

#[derive(Debug, Parser)]
#[command(name = "press", version, about = "Read and publish articles from the terminal")]
pub struct Cli {
    /// Use a throwaway in-memory backend and session instead of the server.
    #[arg(long, global = true)]
    pub offline: bool,

    /// Backend API root (overrides PRESS_API_BASE).
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load a page, following redirects.
    Open {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Sign in.
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and sign in.
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
        /// Password confirmation.
        #[arg(short, long)]
        confirm: String,
    },
    /// Forget the local session.
    Logout,
    /// Show your articles.
    List,
    /// Publish an article.
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        body: String,
    },
    /// Delete one of your articles.
    Delete {
        id: String,
        /// Do not ask for confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Show your profile.
    Profile,
    /// Check that the backend answers.
    Health,
}

/// One command run: the controller plus the navigation it feeds.
pub struct App {
    controller: ViewController,
    navigator: Arc<PendingNavigation>,
    api: Arc<dyn PressApi>,
}

impl App {
    pub fn new(
        controller: ViewController,
        navigator: Arc<PendingNavigation>,
        api: Arc<dyn PressApi>,
    ) -> Self {
        Self {
            controller,
            navigator,
            api,
        }
    }

    pub async fn run(&self, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
        match command {
            Command::Open { path } => {
                let page = self.controller.load(&Route::from_path(&path)).await;
                self.show(&page, out).await
            }
            Command::Login { username, password } => {
                let notices = self
                    .controller
                    .submit_login(&LoginForm { username, password })
                    .await;
                render_notices(&notices, out)?;
                self.follow(out).await
            }
            Command::Register {
                username,
                password,
                confirm,
            } => {
                let notices = self
                    .controller
                    .submit_register(&RegisterForm {
                        username,
                        password,
                        confirmation: confirm,
                    })
                    .await;
                render_notices(&notices, out)?;
                self.follow(out).await
            }
            Command::Logout => {
                self.controller.logout();
                self.follow(out).await
            }
            Command::List => {
                let page = self.controller.show_panel(PanelKind::List).await;
                self.show(&page, out).await
            }
            Command::Add { title, body } => {
                let page = self
                    .controller
                    .submit_article(ArticleForm { title, body })
                    .await;
                self.show(&page, out).await
            }
            // `yes` is consumed when the confirmation adapter is built.
            Command::Delete { id, yes: _ } => match self.controller.delete_article(&id).await {
                Some(page) => self.show(&page, out).await,
                None => {
                    writeln!(out, "Cancelled")?;
                    Ok(())
                }
            },
            Command::Profile => {
                let page = self.controller.show_panel(PanelKind::Profile).await;
                self.show(&page, out).await
            }
            Command::Health => {
                let status = self.api.health().await.context("Backend health check failed")?;
                writeln!(out, "Backend: {}", status)?;
                Ok(())
            }
        }
    }

    async fn show(&self, page: &Page, out: &mut impl Write) -> anyhow::Result<()> {
        render_page(page, out)?;
        self.follow(out).await
    }

    /// Load whatever page navigation was requested, as a browser would.
    async fn follow(&self, out: &mut impl Write) -> anyhow::Result<()> {
        for _ in 0..MAX_REDIRECTS {
            let Some(route) = self.navigator.take() else {
                return Ok(());
            };
            let page = self.controller.load(&route).await;
            render_page(&page, out)?;
        }
        anyhow::bail!("Too many redirects")
    }
}
