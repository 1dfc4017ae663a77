use crate::consts::{NO_AUXILIARY_LIBRARY, NO_PRIMARY_LIBRARY, SUMMARY_SEPARATOR};

/// Libraries detected in a code bundle.
///
/// Both lists are deduplicated and keep first-seen order, so the same
/// bundle always renders the same summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryProfile {
    /// Version strings (`1.4.2`, `v1.4.2`, `p5@1.4.2`).
    pub primary: Vec<String>,
    /// URLs referenced from the bundle.
    pub auxiliary: Vec<String>,
}
impl LibraryProfile {
    pub fn primary_summary(&self) -> String {
        summarize(&self.primary, NO_PRIMARY_LIBRARY)
    }

    pub fn auxiliary_summary(&self) -> String {
        summarize(&self.auxiliary, NO_AUXILIARY_LIBRARY)
    }

    /// `(primary, auxiliary)` display strings.
    pub fn summaries(&self) -> (String, String) {
        (self.primary_summary(), self.auxiliary_summary())
    }
}

fn summarize(found: &[String], default: &str) -> String {
    if found.is_empty() { default.to_string() } else { found.join(SUMMARY_SEPARATOR) }
}
