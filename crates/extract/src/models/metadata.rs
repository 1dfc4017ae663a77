use super::Reference;
use crate::consts::PLACEHOLDER;

/// Metadata for one generative token, from either the API or the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkMetadata {
    /// Free-text description written by the artist
    pub description: String,
    /// Where the code bundle lives
    pub code: Reference,
    pub artifact: Reference,
    pub display: Reference,
    pub thumbnail: Reference,
    pub generative: Reference,
}
impl Default for ArtworkMetadata {
    fn default() -> Self {
        Self {
            description: PLACEHOLDER.to_string(),
            code: Reference::Placeholder,
            artifact: Reference::Placeholder,
            display: Reference::Placeholder,
            thumbnail: Reference::Placeholder,
            generative: Reference::Placeholder,
        }
    }
}
