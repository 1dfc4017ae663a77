//! Code bundle retrieval.

use fxscan_extract::models::ResolvedLocation;
use tracing::instrument;

use crate::transport::TransportHandle;

/// Fetches code bundles, turning every failure into absence.
#[derive(Clone)]
pub struct BundleFetcher {
    transport: TransportHandle,
}
impl BundleFetcher {
    pub fn new(transport: TransportHandle) -> Self {
        Self { transport }
    }

    /// Tries each candidate of `location` in turn (fxhash gateway first) and
    /// returns the first body retrieved.
    pub async fn fetch(&self, location: &ResolvedLocation) -> Option<String> {
        for url in location.candidates() {
            if let Some(bundle) = self.fetch_url(url).await {
                return Some(bundle);
            }
        }
        None
    }

    /// Returns `None` for anything other than a successful response,
    /// including values that are not `http(s)` URLs (such as the `-`
    /// placeholder), which are not requested at all.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch_url(&self, url: &str) -> Option<String> {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            tracing::debug!("Not a fetchable location; skipping");
            return None;
        }
        match self.transport.get(url).await {
            Ok(response) if response.is_success() => {
                tracing::debug!(bundle_size = response.body.len(), "Code bundle fetched");
                Some(response.body)
            },
            Ok(response) => {
                tracing::debug!(status = response.status, "Code bundle not available");
                None
            },
            Err(err) => {
                tracing::debug!(error = ?err, "Code bundle request failed");
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTransport;
    use crate::error::ErrorKind;
    use std::sync::Arc;

    const GATEWAY: &str = "https://gateway.fxhash2.xyz/ipfs/QmCode";
    const PUBLIC: &str = "https://gateway.ipfs.io/ipfs/QmCode";

    fn location() -> ResolvedLocation {
        ResolvedLocation { http: PUBLIC.to_string(), gateway: GATEWAY.to_string() }
    }

    #[tokio::test]
    async fn test_gateway_preferred() {
        let transport = Arc::new(
            MockTransport::default()
                .with_response(GATEWAY, 200, "gateway")
                .with_response(PUBLIC, 200, "public"),
        );
        let fetcher = BundleFetcher::new(transport.clone());
        assert_eq!(fetcher.fetch(&location()).await.as_deref(), Some("gateway"));
        assert!(!transport.was_requested(PUBLIC).await);
    }

    #[tokio::test]
    async fn test_public_gateway_used_when_gateway_fails() {
        let transport =
            Arc::new(MockTransport::default().with_response(GATEWAY, 504, "").with_response(PUBLIC, 200, "public"));
        let fetcher = BundleFetcher::new(transport);
        assert_eq!(fetcher.fetch(&location()).await.as_deref(), Some("public"));
    }

    #[tokio::test]
    async fn test_all_failures_are_absence() {
        let transport = Arc::new(
            MockTransport::default()
                .with_failure(GATEWAY, ErrorKind::Timeout(GATEWAY.to_string()))
                .with_response(PUBLIC, 404, "Not Found"),
        );
        let fetcher = BundleFetcher::new(transport);
        assert_eq!(fetcher.fetch(&location()).await, None);
    }

    #[tokio::test]
    async fn test_placeholder_not_requested() {
        let transport = Arc::new(MockTransport::default());
        let fetcher = BundleFetcher::new(transport.clone());
        assert_eq!(fetcher.fetch(&ResolvedLocation::placeholder()).await, None);
        assert!(transport.requests().await.is_empty());
    }
}
