//! Turning `ipfs://` references into gateway URLs.

use crate::consts::{IPFS_PATH, IPFS_SCHEME, MARKETPLACE_GATEWAY, PUBLIC_GATEWAY};
use crate::models::{Reference, ResolvedLocation};

/// The pair of IPFS gateways every content-addressed reference is resolved
/// against.
///
/// # Examples
///
/// ```rust
/// use fxscan_extract::Gateways;
///
/// let location = Gateways::default().normalize_str("ipfs://Q123");
/// assert_eq!(location.http, "https://gateway.ipfs.io/ipfs/Q123");
/// assert_eq!(location.gateway, "https://gateway.fxhash2.xyz/ipfs/Q123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gateways {
    public: String,
    marketplace: String,
}
impl Gateways {
    /// Both bases are the gateway's `/ipfs` root, with or without a
    /// trailing slash.
    pub fn new(public: impl Into<String>, marketplace: impl Into<String>) -> Self {
        Self {
            public: public.into().trim_end_matches('/').to_string(),
            marketplace: marketplace.into().trim_end_matches('/').to_string(),
        }
    }

    /// Normalizes a raw field value. Anything without the `ipfs://` prefix
    /// (plain URLs, the `-` placeholder) comes back unchanged as both members.
    pub fn normalize_str(&self, value: &str) -> ResolvedLocation {
        match value.strip_prefix(IPFS_SCHEME) {
            Some(path) => ResolvedLocation {
                http: format!("{}/{}", self.public, path),
                gateway: format!("{}/{}", self.marketplace, path),
            },
            None => ResolvedLocation::unchanged(value),
        }
    }

    pub fn normalize(&self, reference: &Reference) -> ResolvedLocation {
        match reference {
            Reference::Ipfs(path) => ResolvedLocation {
                http: format!("{}/{}", self.public, path),
                gateway: format!("{}/{}", self.marketplace, path),
            },
            other => ResolvedLocation::unchanged(other.to_string()),
        }
    }

    /// Rewrites a page-relative `/ipfs/<path>` link onto the fxhash gateway.
    /// Other links are returned as they are.
    pub fn absolutize(&self, link: &str) -> String {
        match link.strip_prefix(IPFS_PATH) {
            Some(path) => format!("{}/{}", self.marketplace, path),
            None => link.to_string(),
        }
    }
}
impl Default for Gateways {
    fn default() -> Self {
        Self::new(PUBLIC_GATEWAY, MARKETPLACE_GATEWAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_ipfs_reference() {
        let location = Gateways::default().normalize_str("ipfs://Q123");
        assert_eq!(location.http, "https://gateway.ipfs.io/ipfs/Q123");
        assert_eq!(location.gateway, "https://gateway.fxhash2.xyz/ipfs/Q123");
    }

    #[rstest]
    #[case("-")]
    #[case("https://example.com/preview.png")]
    #[case("https://gateway.fxhash2.xyz/ipfs/QmAbc")]
    #[case("")]
    fn test_plain_values_are_idempotent(#[case] value: &str) {
        let gateways = Gateways::default();
        let once = gateways.normalize_str(value);
        assert_eq!(once, ResolvedLocation::unchanged(value));
        assert_eq!(gateways.normalize_str(&once.http), once);
        assert_eq!(gateways.normalize_str(&once.gateway), once);
    }

    #[rstest]
    #[case("ipfs://QmAbc/index.html")]
    #[case("-")]
    #[case("https://example.com/x.js")]
    fn test_reference_matches_raw(#[case] value: &str) {
        let gateways = Gateways::default();
        assert_eq!(gateways.normalize(&Reference::parse(value)), gateways.normalize_str(value));
    }

    #[test]
    fn test_custom_gateways_trim_slash() {
        let gateways = Gateways::new("https://ipfs.example/ipfs/", "https://pin.example/ipfs");
        let location = gateways.normalize_str("ipfs://QmX");
        assert_eq!(location.http, "https://ipfs.example/ipfs/QmX");
        assert_eq!(location.gateway, "https://pin.example/ipfs/QmX");
    }

    #[rstest]
    #[case("/ipfs/QmAbc", "https://gateway.fxhash2.xyz/ipfs/QmAbc")]
    #[case("/ipfs/QmAbc/?fxhash=oo1", "https://gateway.fxhash2.xyz/ipfs/QmAbc/?fxhash=oo1")]
    #[case("https://gateway.fxhash2.xyz/ipfs/QmAbc", "https://gateway.fxhash2.xyz/ipfs/QmAbc")]
    #[case("ipfs://QmAbc", "ipfs://QmAbc")]
    fn test_absolutize(#[case] link: &str, #[case] expected: &str) {
        assert_eq!(Gateways::default().absolutize(link), expected);
    }
}
