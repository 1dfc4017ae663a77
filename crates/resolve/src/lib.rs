//! The artifact resolution pipeline.
//!
//! For one token ID the [`Resolver`] asks the structured API, falls back to
//! the rendered page, then fetches and classifies the code bundle and
//! normalizes the asset links. All network access goes through a
//! [`Transport`], so the pipeline can be driven by [`HttpTransport`] in
//! production and by `MockTransport` (feature `mock`) in tests.

pub mod error;
mod fetch;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod resolver;
mod source;
mod transport;

pub use crate::fetch::BundleFetcher;
#[cfg(any(test, feature = "mock"))]
pub use crate::mock::MockTransport;
pub use crate::resolver::Resolver;
pub use crate::source::{ApiOutcome, ApiSource, PageOutcome, PageSource, Unavailable};
pub use crate::transport::{HttpTransport, Response, Transport, TransportHandle};
