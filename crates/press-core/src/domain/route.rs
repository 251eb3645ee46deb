use std::fmt;

/// Page a location resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Public feed at `/` (or `/index.html`).
    Landing,
    /// Any path containing `/dashboard`.
    Dashboard,
    /// Anything else, kept verbatim.
    Other(String),
}

impl Route {
    pub const LANDING_PATH: &'static str = "/";
    pub const DASHBOARD_PATH: &'static str = "/dashboard";

    /// Resolve a location path.
    pub fn from_path(path: &str) -> Self {
        match path {
            "" | "/" | "/index.html" => Self::Landing,
            p if p.contains(Self::DASHBOARD_PATH) => Self::Dashboard,
            p => Self::Other(p.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Landing => Self::LANDING_PATH,
            Self::Dashboard => Self::DASHBOARD_PATH,
            Self::Other(p) => p,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
