//! Pure, synchronous parsing for fxhash generative tokens.
//!
//! Nothing in this crate performs I/O. The resolve crate fetches bytes and
//! hands them here: API bodies to [`parse_token`], pages to [`extract_page`],
//! code bundles to [`LibraryDetector`]. [`Gateways`] turns the resulting
//! `ipfs://` references into fetchable URLs.

mod consts;
mod detect;
pub mod error;
pub mod models;
mod normalize;
mod page;
mod payload;

pub use crate::consts::{
    MARKETPLACE_GATEWAY, NO_AUXILIARY_LIBRARY, NO_PRIMARY_LIBRARY, PLACEHOLDER, PUBLIC_GATEWAY, SUMMARY_SEPARATOR,
};
pub use crate::detect::LibraryDetector;
pub use crate::normalize::Gateways;
pub use crate::page::{PageExtractor, extract_page};
pub use crate::payload::{TokenPayload, parse_token};
