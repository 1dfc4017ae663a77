//! Recovering token metadata from the rendered fxhash generative page.

use regex::Regex;
use scraper::Html;
use tracing::instrument;

use crate::consts;
use crate::error::{ErrorKind, Result};
use crate::models::{ArtworkMetadata, Reference};
use crate::normalize::Gateways;

/// Asset fields embedded as JSON in the page's script blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssetField {
    Artifact,
    Display,
    Thumbnail,
    Generative,
}
impl AssetField {
    const ALL: [AssetField; 4] = [Self::Artifact, Self::Display, Self::Thumbnail, Self::Generative];

    fn key(self) -> &'static str {
        match self {
            Self::Artifact => "artifactUri",
            Self::Display => "displayUri",
            Self::Thumbnail => "thumbnailUri",
            Self::Generative => "generativeUri",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Artifact => &*consts::ARTIFACT_URI_REGEX,
            Self::Display => &*consts::DISPLAY_URI_REGEX,
            Self::Thumbnail => &*consts::THUMBNAIL_URI_REGEX,
            Self::Generative => &*consts::GENERATIVE_URI_REGEX,
        }
    }
}

#[derive(Debug)]
pub struct PageExtractor {
    document: Html,
}
impl PageExtractor {
    pub fn from_html(html: &str) -> Self {
        Self { document: Html::parse_document(html) }
    }

    /// Returns `true` if at least one of the known markers is present.
    pub fn is_recognised(&self) -> bool {
        self.description().is_some()
            || self.code_link().is_some()
            || AssetField::ALL.into_iter().any(|field| self.script_containing(field.key()).is_some())
    }

    /// Extracts token metadata from the page.
    ///
    /// Individual fields that cannot be found become the `-` placeholder.
    /// Page-relative `/ipfs/` code links are rewritten onto the fxhash
    /// gateway taken from `gateways`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaMismatch`](ErrorKind::SchemaMismatch) if none of the
    /// markers are present, which usually means the page layout changed.
    #[instrument(level = "debug", skip_all)]
    pub fn metadata(&self, gateways: &Gateways) -> Result<ArtworkMetadata> {
        if !self.is_recognised() {
            exn::bail!(ErrorKind::SchemaMismatch);
        }
        let code = self.code_link().map(|link| gateways.absolutize(&link));
        Ok(ArtworkMetadata {
            description: self.description().unwrap_or_else(|| consts::PLACEHOLDER.to_string()),
            code: Reference::from(code),
            artifact: Reference::from(self.asset(AssetField::Artifact)),
            display: Reference::from(self.asset(AssetField::Display)),
            thumbnail: Reference::from(self.asset(AssetField::Thumbnail)),
            generative: Reference::from(self.asset(AssetField::Generative)),
        })
    }

    fn description(&self) -> Option<String> {
        self.document
            .select(&consts::DESCRIPTION_SELECTOR)
            .next()
            .map(|el| el.text().collect::<Vec<_>>().join(" ").trim().to_string())
    }

    /// First anchor pointing into IPFS. The page sometimes lists several
    /// comma-separated targets in one `href`; only the first is kept.
    fn code_link(&self) -> Option<String> {
        self.document
            .select(&consts::ANCHOR_SELECTOR)
            .filter_map(|el| el.value().attr("href"))
            .find(|href| href.contains("ipfs"))
            .and_then(|href| href.split(',').next())
            .map(|link| link.trim().to_string())
    }

    fn script_containing(&self, needle: &str) -> Option<String> {
        self.document
            .select(&consts::SCRIPT_SELECTOR)
            .map(|el| el.text().collect::<String>())
            .find(|text| text.contains(needle))
    }

    /// Only the first script mentioning the key is searched, matching how
    /// the page embeds its state in a single blob.
    fn asset(&self, field: AssetField) -> Option<String> {
        let script = self.script_containing(field.key())?;
        field.pattern().captures(&script).and_then(|c| c.get(1)).map(|m| m.as_str().to_string())
    }
}

/// Parses a page and extracts its metadata in one go. See
/// [`PageExtractor::metadata`].
#[instrument(skip(html, gateways), fields(html_size = html.len()))]
pub fn extract_page(html: &str, gateways: &Gateways) -> Result<ArtworkMetadata> {
    PageExtractor::from_html(html).metadata(gateways)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const PAGE: &str = r#"<!DOCTYPE html>
        <html><head>
            <script>window.analytics = {};</script>
            <script id="__NEXT_DATA__" type="application/json">{"props":{"token":{"artifactUri":"ipfs://QmArt","displayUri":"ipfs://QmDisp","thumbnailUri":"ipfs://QmThumb","generativeUri":"ipfs://QmGen"}}}</script>
        </head><body>
            <a href="/explore">Explore</a>
            <div class="Clamp_container__xOFme GenerativeDisplay_description__NweHb">
                <p>Flow field</p><p>study</p>
            </div>
            <a href="/ipfs/QmCode/?fxhash=ooTest, /ipfs/QmOther">view code</a>
        </body></html>"#;

    #[test]
    fn test_full_page() {
        let metadata = extract_page(PAGE, &Gateways::default()).unwrap();
        assert!(metadata.description.starts_with("Flow field"));
        assert!(metadata.description.ends_with("study"));
        assert_eq!(metadata.code.to_string(), "https://gateway.fxhash2.xyz/ipfs/QmCode/?fxhash=ooTest");
        assert_eq!(metadata.artifact.to_string(), "ipfs://QmArt");
        assert_eq!(metadata.display.to_string(), "ipfs://QmDisp");
        assert_eq!(metadata.thumbnail.to_string(), "ipfs://QmThumb");
        assert_eq!(metadata.generative.to_string(), "ipfs://QmGen");
    }

    #[test]
    fn test_absolute_gateway_link_kept() {
        let html = r#"<a href="https://gateway.fxhash2.xyz/ipfs/QmCode">code</a>"#;
        let metadata = extract_page(html, &Gateways::default()).unwrap();
        assert_eq!(metadata.code.to_string(), "https://gateway.fxhash2.xyz/ipfs/QmCode");
        assert_eq!(metadata.description, "-");
        assert!(metadata.artifact.is_placeholder());
    }

    #[test]
    fn test_custom_marketplace_gateway() {
        let gateways = Gateways::new("https://ipfs.example/ipfs", "https://pin.example/ipfs");
        let metadata = extract_page(r#"<a href="/ipfs/QmCode">code</a>"#, &gateways).unwrap();
        assert_eq!(metadata.code.to_string(), "https://pin.example/ipfs/QmCode");
    }

    #[rstest]
    #[case(r#"<script>{"artifactUri":"https://not-ipfs.example/a.png"}</script>"#)]
    #[case(r#"<script>{"artifactUri": "ipfs://spaced"}</script>"#)]
    fn test_asset_pattern_requires_exact_ipfs_form(#[case] html: &str) {
        let metadata = extract_page(html, &Gateways::default()).unwrap();
        assert!(metadata.artifact.is_placeholder());
    }

    #[test]
    fn test_only_first_script_with_key_is_searched() {
        let html = r#"
            <script>var keys = ["artifactUri"];</script>
            <script>{"artifactUri":"ipfs://QmLater"}</script>
        "#;
        let metadata = extract_page(html, &Gateways::default()).unwrap();
        assert!(metadata.artifact.is_placeholder());
    }

    #[rstest]
    #[case("")]
    #[case("<html><body><h1>Page not found</h1></body></html>")]
    #[case(r#"<div class="GenerativeDisplay_description__renamed">Flow</div>"#)]
    fn test_schema_mismatch(#[case] html: &str) {
        let err = extract_page(html, &Gateways::default()).unwrap_err();
        assert_eq!(*err, ErrorKind::SchemaMismatch);
        assert!(!PageExtractor::from_html(html).is_recognised());
    }
}
