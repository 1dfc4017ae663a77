use fxscan_extract::models::{ArtworkId, ArtworkMetadata, FailureReason};
use fxscan_extract::{Gateways, extract_page};
use tracing::instrument;

use crate::transport::TransportHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Usable(ArtworkMetadata),
    /// Terminal for the artwork; there is nothing left to fall back to.
    Failed(FailureReason),
}

/// The rendered fxhash generative page, `GET <base>/<id>`.
#[derive(Clone)]
pub struct PageSource {
    transport: TransportHandle,
    base_url: String,
    gateways: Gateways,
}
impl PageSource {
    pub fn new(transport: TransportHandle, base_url: impl Into<String>, gateways: Gateways) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            gateways,
        }
    }

    pub fn url(&self, id: ArtworkId) -> String {
        super::join(&self.base_url, id)
    }

    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn lookup(&self, id: ArtworkId) -> PageOutcome {
        let response = match self.transport.get(&self.url(id)).await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(error = ?err, "Page request failed");
                return PageOutcome::Failed(FailureReason::Unreachable);
            },
        };
        if response.status != 200 {
            tracing::debug!(status = response.status, "Page not available");
            return PageOutcome::Failed(FailureReason::Unreachable);
        }
        match extract_page(&response.body, &self.gateways) {
            Ok(metadata) => PageOutcome::Usable(metadata),
            Err(err) => {
                tracing::debug!(error = ?err, "Page layout not recognised");
                PageOutcome::Failed(FailureReason::SchemaMismatch)
            },
        }
    }
}
