use derive_more::Display;

use super::{ArtworkId, LibraryProfile, Reference, ResolvedLocation};
use crate::consts::PLACEHOLDER;

/// Why an artwork could not be resolved by either metadata source.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// The page could not be fetched (network error, timeout, non-200).
    #[display("page unreachable")]
    Unreachable,
    /// The page was fetched but none of the known markers were present.
    #[display("page layout not recognised")]
    SchemaMismatch,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    #[display("working")]
    Working,
    #[display("not working")]
    NotWorking(FailureReason),
}

/// Final output for one artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRecord {
    pub id: ArtworkId,
    pub status: Status,
    pub description: String,
    /// Code reference as it was found, before normalization.
    pub code: Reference,
    /// `None` only for records that are not working.
    pub libraries: Option<LibraryProfile>,
    pub artifact: ResolvedLocation,
    pub display: ResolvedLocation,
    pub thumbnail: ResolvedLocation,
    pub generative: ResolvedLocation,
}
impl ResolutionRecord {
    /// Record for an artwork neither source could describe; every field is
    /// the placeholder.
    pub fn not_working(id: ArtworkId, reason: FailureReason) -> Self {
        Self {
            id,
            status: Status::NotWorking(reason),
            description: PLACEHOLDER.to_string(),
            code: Reference::Placeholder,
            libraries: None,
            artifact: ResolvedLocation::placeholder(),
            display: ResolvedLocation::placeholder(),
            thumbnail: ResolvedLocation::placeholder(),
            generative: ResolvedLocation::placeholder(),
        }
    }

    pub fn is_working(&self) -> bool {
        self.status == Status::Working
    }

    /// `(primary, auxiliary)` library summaries, placeholders when not working.
    pub fn library_summaries(&self) -> (String, String) {
        match &self.libraries {
            Some(profile) => profile.summaries(),
            None => (PLACEHOLDER.to_string(), PLACEHOLDER.to_string()),
        }
    }
}
