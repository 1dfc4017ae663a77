//! The two places token metadata can come from.
//!
//! The structured API is authoritative; the rendered page is only read
//! when the API has nothing usable. Neither returns errors: each reports an
//! explicit outcome so the resolver can decide what happens next.

mod api;
mod page;

pub use self::api::{ApiOutcome, ApiSource, Unavailable};
pub use self::page::{PageOutcome, PageSource};

/// `<base>/<id>`, tolerating a trailing slash on the base.
fn join(base: &str, id: impl std::fmt::Display) -> String {
    format!("{}/{}", base.trim_end_matches('/'), id)
}
