//! Redirect Handling
//!
//! A `send_request` call follows 301/302/303/307/308 responses until a
//! non-redirect arrives or its hop budget runs out. Running out is not an
//! error: the last redirect response is handed back unfollowed.

mod attempt;
mod headers;
mod state;

pub use attempt::Hop;
pub(crate) use headers::{crosses_origin, remove_sensitive_headers};
pub use state::{RedirectBudget, RedirectState};
