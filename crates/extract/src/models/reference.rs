use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::consts::{IPFS_SCHEME, PLACEHOLDER};

/// A field value that may point at content-addressed storage.
///
/// Values come from the API or the page verbatim; nothing here touches the
/// network. Rendering with [`Display`] gives back the original text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Reference {
    /// `ipfs://<path>`, stored without the scheme.
    Ipfs(String),
    /// Anything else, typically an `https://` URL.
    Location(String),
    /// The field was unavailable.
    #[default]
    Placeholder,
}
impl Reference {
    pub fn parse(value: impl Into<String>) -> Self {
        let value = value.into();
        if value == PLACEHOLDER {
            return Self::Placeholder;
        }
        match value.strip_prefix(IPFS_SCHEME) {
            Some(path) => Self::Ipfs(path.to_string()),
            None => Self::Location(value),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

impl From<String> for Reference {
    fn from(value: String) -> Self {
        Self::parse(value)
    }
}
impl From<&str> for Reference {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}
impl From<Option<String>> for Reference {
    fn from(value: Option<String>) -> Self {
        value.map(Self::parse).unwrap_or_default()
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Ipfs(path) => write!(f, "{IPFS_SCHEME}{path}"),
            Self::Location(location) => write!(f, "{location}"),
            Self::Placeholder => write!(f, "{PLACEHOLDER}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ipfs://QmAbc", Reference::Ipfs("QmAbc".to_string()))]
    #[case("ipfs://QmAbc/index.html", Reference::Ipfs("QmAbc/index.html".to_string()))]
    #[case("https://gateway.fxhash2.xyz/ipfs/QmAbc", Reference::Location("https://gateway.fxhash2.xyz/ipfs/QmAbc".to_string()))]
    #[case("-", Reference::Placeholder)]
    fn test_parse_and_display(#[case] input: &str, #[case] expected: Reference) {
        let parsed = Reference::parse(input);
        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), input);
    }

    #[test]
    fn test_missing_value_is_placeholder() {
        assert_eq!(Reference::from(None::<String>), Reference::Placeholder);
    }
}
