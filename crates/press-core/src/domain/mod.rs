//! Domain entities - the client's view of the publishing model.

mod content;
mod credentials;
mod route;
mod session;
mod user;

pub use content::{ContentItem, NewContent, parse_day};
pub use credentials::{Credentials, MIN_PASSWORD_LEN};
pub use route::Route;
pub use session::Session;
pub use user::User;
