//! Markers for the fxhash page layout, the API payload and bundle sniffing.
//!
//! The page selectors and JSON key patterns are tied to one rendering of the
//! fxhash generative page. When the site is redesigned they stop matching
//! silently, which surfaces as [`SchemaMismatch`](crate::error::ErrorKind::SchemaMismatch).

use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

/// Scheme prefix of a content-addressed reference.
pub const IPFS_SCHEME: &str = "ipfs://";
/// Path prefix used by page-relative IPFS links.
pub const IPFS_PATH: &str = "/ipfs/";
/// Value used for any field that could not be recovered.
pub const PLACEHOLDER: &str = "-";
/// Generic public IPFS gateway.
pub const PUBLIC_GATEWAY: &str = "https://gateway.ipfs.io/ipfs";
/// fxhash-operated IPFS gateway.
pub const MARKETPLACE_GATEWAY: &str = "https://gateway.fxhash2.xyz/ipfs";
/// Primary summary when no version string was detected.
pub const NO_PRIMARY_LIBRARY: &str = "No p5.js found";
/// Auxiliary summary when no library URL was detected.
pub const NO_AUXILIARY_LIBRARY: &str = "No other libraries found";
/// Separator used when joining detected libraries for display.
pub const SUMMARY_SEPARATOR: &str = " / ";

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

selector!(DESCRIPTION_SELECTOR, "div.Clamp_container__xOFme.GenerativeDisplay_description__NweHb");
selector!(ANCHOR_SELECTOR, "a[href]");
selector!(SCRIPT_SELECTOR, "script");

// Bundle sniffing. Version-like tokens seed the primary summary, URLs the auxiliary one.
regex!(VERSION_REGEX, r"v?\d+\.\d+\.\d+|p5@\d+\.\d+\.\d+");
regex!(URL_REGEX, r#"https?://[^"'\s]+"#);

// Inline JSON in the page's script blocks.
regex!(ARTIFACT_URI_REGEX, r#""artifactUri":"(ipfs://[^"]+)""#);
regex!(DISPLAY_URI_REGEX, r#""displayUri":"(ipfs://[^"]+)""#);
regex!(THUMBNAIL_URI_REGEX, r#""thumbnailUri":"(ipfs://[^"]+)""#);
regex!(GENERATIVE_URI_REGEX, r#""generativeUri":"(ipfs://[^"]+)""#);
