use crate::consts::PLACEHOLDER;

/// The two fetchable forms of one field value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedLocation {
    /// Generic public gateway form.
    pub http: String,
    /// fxhash gateway form.
    pub gateway: String,
}
impl ResolvedLocation {
    /// Both members set to the same, untouched value.
    pub fn unchanged(value: impl Into<String>) -> Self {
        let value = value.into();
        Self { http: value.clone(), gateway: value }
    }

    pub fn placeholder() -> Self {
        Self::unchanged(PLACEHOLDER)
    }

    /// Candidate URLs in the order they should be tried, without duplicates.
    ///
    /// The fxhash gateway pins artwork content, so it is preferred.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        let fallback = (self.http != self.gateway).then_some(self.http.as_str());
        std::iter::once(self.gateway.as_str()).chain(fallback)
    }
}
impl From<(String, String)> for ResolvedLocation {
    fn from((http, gateway): (String, String)) -> Self {
        Self { http, gateway }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_prefer_gateway() {
        let location = ResolvedLocation::from(("https://a/ipfs/x".to_string(), "https://b/ipfs/x".to_string()));
        assert_eq!(location.candidates().collect::<Vec<_>>(), ["https://b/ipfs/x", "https://a/ipfs/x"]);
    }

    #[test]
    fn test_candidates_skip_duplicate() {
        let location = ResolvedLocation::unchanged("https://example.com/code.js");
        assert_eq!(location.candidates().collect::<Vec<_>>(), ["https://example.com/code.js"]);
    }
}
