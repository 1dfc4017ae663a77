use std::fmt::{Display, Formatter, Result as FmtResult};
use std::num::NonZeroU64;
use std::str::FromStr;

use exn::{OptionExt, ResultExt};

use crate::error::{Error, ErrorKind, Result};

/// fxhash generative token ID, as used in both the API and page URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtworkId(NonZeroU64);
impl ArtworkId {
    /// Returns `None` for zero, which is never a valid token.
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for ArtworkId {
    type Error = Error;
    fn try_from(value: u64) -> Result<Self> {
        Self::new(value).ok_or_raise(|| ErrorKind::ParseError {
            field: "artwork_id",
            value: value.to_string(),
        })
    }
}
impl FromStr for ArtworkId {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let id = s.trim().parse::<u64>().or_raise(|| ErrorKind::ParseError {
            field: "artwork_id",
            value: s.to_string(),
        })?;
        Self::try_from(id)
    }
}

impl Display for ArtworkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("30661", Some(30661))]
    #[case(" 31300 ", Some(31300))]
    #[case("0", None)]
    #[case("-4", None)]
    #[case("abc", None)]
    fn test_parse(#[case] input: &str, #[case] expected: Option<u64>) {
        assert_eq!(input.parse::<ArtworkId>().ok().map(ArtworkId::get), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(ArtworkId::new(99999).unwrap().to_string(), "99999");
    }
}
