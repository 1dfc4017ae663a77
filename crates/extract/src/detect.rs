//! Best-effort library sniffing over code bundle text.
//!
//! This is pattern matching, not parsing: false positives (any semver-ish
//! token) and false negatives (libraries inlined without a version) are
//! expected. What it guarantees is that the same text always gives the same
//! [`LibraryProfile`], and that no input makes it fail.

use regex::Regex;
use std::collections::HashSet;
use tracing::instrument;

use crate::consts;
use crate::models::LibraryProfile;

/// A fixed set of patterns, split into those that identify the primary
/// library version and those that identify auxiliary libraries.
#[derive(Debug, Clone)]
pub struct LibraryDetector {
    primary: Vec<Regex>,
    auxiliary: Vec<Regex>,
}
impl LibraryDetector {
    pub fn new(primary: impl IntoIterator<Item = Regex>, auxiliary: impl IntoIterator<Item = Regex>) -> Self {
        Self {
            primary: primary.into_iter().collect(),
            auxiliary: auxiliary.into_iter().collect(),
        }
    }

    /// Classifies a bundle. A missing or empty bundle short-circuits to the
    /// default profile, whose summaries are the "not found" markers.
    #[instrument(level = "debug", skip_all, fields(bundle_size = bundle.map(str::len)))]
    pub fn detect(&self, bundle: Option<&str>) -> LibraryProfile {
        let Some(text) = bundle.filter(|text| !text.is_empty()) else {
            return LibraryProfile::default();
        };
        let profile = LibraryProfile {
            primary: collect_matches(&self.primary, text),
            auxiliary: collect_matches(&self.auxiliary, text),
        };
        tracing::debug!(primary = profile.primary.len(), auxiliary = profile.auxiliary.len(), "Bundle classified");
        profile
    }
}
impl Default for LibraryDetector {
    fn default() -> Self {
        Self::new([consts::VERSION_REGEX.clone()], [consts::URL_REGEX.clone()])
    }
}

fn collect_matches(patterns: &[Regex], text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();
    for pattern in patterns {
        for m in pattern.find_iter(text) {
            let value = m.as_str();
            if seen.insert(value) {
                found.push(value.to_string());
            }
        }
    }
    found
}
