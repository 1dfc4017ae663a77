//! Per-token orchestration: API first, page second, then code and assets.

use futures::{Stream, StreamExt};
use fxscan_config::Config;
use fxscan_extract::models::{ArtworkId, ArtworkMetadata, ResolutionRecord, Status};
use fxscan_extract::{Gateways, LibraryDetector};
use std::sync::Arc;
use tracing::instrument;

use crate::error::Result;
use crate::fetch::BundleFetcher;
use crate::source::{ApiOutcome, ApiSource, PageOutcome, PageSource};
use crate::transport::{HttpTransport, TransportHandle};

/// Resolves token IDs into [`ResolutionRecord`]s.
///
/// Every call to [`resolve`](Self::resolve) produces exactly one record.
/// Failures along the way degrade the record (placeholders, "not found"
/// library summaries, a `not working` status) rather than being returned.
pub struct Resolver {
    api: ApiSource,
    page: PageSource,
    fetcher: BundleFetcher,
    detector: LibraryDetector,
    gateways: Gateways,
}
impl Resolver {
    pub fn new(transport: TransportHandle, config: &Config) -> Self {
        let gateways = Gateways::new(&config.gateways.public, &config.gateways.marketplace);
        Self {
            api: ApiSource::new(transport.clone(), &config.api.base_url),
            page: PageSource::new(transport.clone(), &config.page.base_url, gateways.clone()),
            fetcher: BundleFetcher::new(transport),
            detector: LibraryDetector::default(),
            gateways,
        }
    }

    /// Builds a resolver talking HTTP, using the timeout and user agent
    /// from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::from_config(&config.http)?;
        Ok(Self::new(Arc::new(transport), config))
    }

    /// Replaces the default library patterns.
    pub fn with_detector(mut self, detector: LibraryDetector) -> Self {
        self.detector = detector;
        self
    }

    /// The human-facing page for a token.
    pub fn page_url(&self, id: ArtworkId) -> String {
        self.page.url(id)
    }

    #[instrument(skip(self), fields(%id, status = tracing::field::Empty))]
    pub async fn resolve(&self, id: ArtworkId) -> ResolutionRecord {
        let record = match self.metadata(id).await {
            Ok(metadata) => self.assemble(id, metadata).await,
            Err(record) => record,
        };
        tracing::Span::current().record("status", tracing::field::display(&record.status));
        tracing::info!("Artwork resolved");
        record
    }

    /// Resolves `ids` with up to `concurrency` tokens in flight, yielding
    /// records in the same order as `ids`.
    ///
    /// `ids` is consumed lazily, so arbitrarily long ranges are fine.
    pub fn resolve_range<'a, I>(&'a self, ids: I, concurrency: usize) -> impl Stream<Item = ResolutionRecord> + 'a
    where
        I: IntoIterator<Item = ArtworkId>,
        I::IntoIter: 'a,
    {
        futures::stream::iter(ids).map(move |id| self.resolve(id)).buffered(concurrency.max(1))
    }

    /// Either usable metadata, or the finished `not working` record.
    async fn metadata(&self, id: ArtworkId) -> std::result::Result<ArtworkMetadata, ResolutionRecord> {
        let reason = match self.api.lookup(id).await {
            ApiOutcome::Available(metadata) => {
                tracing::debug!("Using API metadata");
                return Ok(metadata);
            },
            ApiOutcome::Unavailable(reason) => reason,
        };
        tracing::debug!(%reason, "API unavailable; falling back to page");
        match self.page.lookup(id).await {
            PageOutcome::Usable(metadata) => Ok(metadata),
            PageOutcome::Failed(failure) => {
                tracing::warn!(api = %reason, page = %failure, "No metadata source available");
                Err(ResolutionRecord::not_working(id, failure))
            },
        }
    }

    async fn assemble(&self, id: ArtworkId, metadata: ArtworkMetadata) -> ResolutionRecord {
        let bundle = self.fetcher.fetch(&self.gateways.normalize(&metadata.code)).await;
        let libraries = self.detector.detect(bundle.as_deref());
        ResolutionRecord {
            id,
            status: Status::Working,
            artifact: self.gateways.normalize(&metadata.artifact),
            display: self.gateways.normalize(&metadata.display),
            thumbnail: self.gateways.normalize(&metadata.thumbnail),
            generative: self.gateways.normalize(&metadata.generative),
            description: metadata.description,
            code: metadata.code,
            libraries: Some(libraries),
        }
    }
}
