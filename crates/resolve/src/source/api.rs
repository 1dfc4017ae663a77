use derive_more::Display;
use fxscan_extract::models::{ArtworkId, ArtworkMetadata};
use fxscan_extract::parse_token;
use tracing::instrument;

use crate::error::ErrorKind;
use crate::transport::TransportHandle;

/// Why the API could not be used for a token. Never terminal on its own.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Unavailable {
    #[display("API responded with status {_0}")]
    Status(u16),
    #[display("API payload not recognised")]
    Malformed,
    #[display("API request failed: {_0}")]
    Request(ErrorKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    Available(ArtworkMetadata),
    Unavailable(Unavailable),
}

/// The fxhash token API, `GET <base>/<id>`.
#[derive(Clone)]
pub struct ApiSource {
    transport: TransportHandle,
    base_url: String,
}
impl ApiSource {
    pub fn new(transport: TransportHandle, base_url: impl Into<String>) -> Self {
        Self { transport, base_url: base_url.into() }
    }

    pub fn url(&self, id: ArtworkId) -> String {
        super::join(&self.base_url, id)
    }

    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn lookup(&self, id: ArtworkId) -> ApiOutcome {
        let response = match self.transport.get(&self.url(id)).await {
            Ok(response) => response,
            Err(err) => return ApiOutcome::Unavailable(Unavailable::Request((*err).clone())),
        };
        if response.status != 200 {
            return ApiOutcome::Unavailable(Unavailable::Status(response.status));
        }
        match parse_token(&response.body) {
            Ok(metadata) => ApiOutcome::Available(metadata),
            Err(err) => {
                tracing::debug!(error = ?err, "Discarding API payload");
                ApiOutcome::Unavailable(Unavailable::Malformed)
            },
        }
    }
}
