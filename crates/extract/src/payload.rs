//! Schema for the fxhash token API (`/v1/tokens/<id>`).
//!
//! Only the `token` object is read. Every field in it is optional, and each
//! missing (or `null`) field becomes the `-` placeholder in
//! [`ArtworkMetadata`]. A field of the wrong JSON type rejects the whole
//! payload rather than being silently dropped.

use exn::ResultExt;
use serde::Deserialize;
use tracing::instrument;

use crate::consts::PLACEHOLDER;
use crate::error::{ErrorKind, Result};
use crate::models::{ArtworkMetadata, Reference};

#[derive(Debug, Deserialize)]
struct Envelope {
    token: TokenPayload,
}

/// The subset of a token the resolver cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPayload {
    pub description: Option<String>,
    /// IPFS link to the code bundle
    pub ipfs: Option<String>,
    pub artifact_uri: Option<String>,
    pub display_uri: Option<String>,
    pub thumbnail_uri: Option<String>,
    pub generative_uri: Option<String>,
}
impl From<TokenPayload> for ArtworkMetadata {
    fn from(token: TokenPayload) -> Self {
        Self {
            description: token.description.unwrap_or_else(|| PLACEHOLDER.to_string()),
            code: Reference::from(token.ipfs),
            artifact: Reference::from(token.artifact_uri),
            display: Reference::from(token.display_uri),
            thumbnail: Reference::from(token.thumbnail_uri),
            generative: Reference::from(token.generative_uri),
        }
    }
}

/// Parses an API response body into metadata.
///
/// # Errors
///
/// Returns [`MalformedPayload`](ErrorKind::MalformedPayload) if the body is
/// not JSON, has no `token` object, or a known field has the wrong type.
#[instrument(level = "debug", skip(body), fields(body_size = body.len()))]
pub fn parse_token(body: &str) -> Result<ArtworkMetadata> {
    let envelope: Envelope = serde_json::from_str(body).or_raise(|| ErrorKind::MalformedPayload)?;
    Ok(envelope.token.into())
}
