//! Ranking of listed artifacts by version

use crate::version::key::VersionKey;

/// A listed artifact key together with its parsed version
///
/// Ordering compares the version first and falls back to the key string,
/// so two artifacts with the same version still have a fixed order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    pub version: VersionKey,
    pub key: String,
}

impl Candidate {
    pub fn new(version: VersionKey, key: impl Into<String>) -> Self {
        Self {
            version,
            key: key.into(),
        }
    }
}

/// Sort candidates newest first.
pub fn sort_newest_first(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.cmp(a));
}

/// Sort candidates newest first and keep at most `count` of them.
pub fn newest(mut candidates: Vec<Candidate>, count: usize) -> Vec<Candidate> {
    sort_newest_first(&mut candidates);
    candidates.truncate(count);
    candidates
}
