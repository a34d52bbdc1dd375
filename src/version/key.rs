//! Sortable representation of nightly version strings
//!
//! Nightly tarballs are tagged `MAJOR.MINOR.PATCH` with an optional
//! `a<N>` (alpha) or `rc<N>` (release candidate) suffix, e.g. `7.0.0`,
//! `7.0.1rc2`, `7.1.0a20250301`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)(a|rc)?(\d+)?$").unwrap());

/// Release channel encoded in the version suffix
///
/// Declaration order is the ordering: alpha < release candidate < stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    Alpha,
    ReleaseCandidate,
    Stable,
}

impl Channel {
    /// Numeric rank of the channel (alpha = 0, rc = 1, stable = 2)
    pub fn rank(&self) -> u8 {
        match self {
            Channel::Alpha => 0,
            Channel::ReleaseCandidate => 1,
            Channel::Stable => 2,
        }
    }

    fn from_suffix(suffix: Option<&str>) -> Self {
        match suffix {
            None => Channel::Stable,
            Some("a") => Channel::Alpha,
            Some(_) => Channel::ReleaseCandidate,
        }
    }
}

/// Totally ordered key for a parsed version
///
/// Field order is the comparison order, so the derived `Ord` is the
/// lexicographic tuple comparison of
/// `(major, minor, patch, channel, prerelease)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionKey {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub channel: Channel,
    pub prerelease: u64,
}

impl VersionKey {
    /// Key assigned to strings that do not follow the version grammar.
    ///
    /// Ranks as `0.0.0rc0`. Note that this still outranks `0.0.0a<N>`.
    pub const FALLBACK: VersionKey = VersionKey {
        major: 0,
        minor: 0,
        patch: 0,
        channel: Channel::ReleaseCandidate,
        prerelease: 0,
    };

    pub fn as_tuple(&self) -> (u64, u64, u64, u8, u64) {
        (
            self.major,
            self.minor,
            self.patch,
            self.channel.rank(),
            self.prerelease,
        )
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        match self.channel {
            Channel::Alpha => write!(f, "a{}", self.prerelease),
            Channel::ReleaseCandidate => write!(f, "rc{}", self.prerelease),
            Channel::Stable => Ok(()),
        }
    }
}

/// Parse a version string into its sortable key.
///
/// Never fails: anything outside the grammar (including numbers too large
/// for `u64`) becomes [`VersionKey::FALLBACK`].
///
/// Examples:
/// - "1.2.3" -> (1, 2, 3, stable, 0)
/// - "1.2.3rc5" -> (1, 2, 3, rc, 5)
/// - "1.2.3a" -> (1, 2, 3, alpha, 0)
/// - "not-a-version" -> (0, 0, 0, rc, 0)
pub fn parse_version(version: &str) -> VersionKey {
    try_parse_version(version).unwrap_or_else(|| {
        debug!("Unparseable version '{}', using fallback key", version);
        VersionKey::FALLBACK
    })
}

fn try_parse_version(version: &str) -> Option<VersionKey> {
    let caps = VERSION_RE.captures(version)?;

    let number = |i: usize| -> Option<u64> {
        caps.get(i)
            .map_or(Some(0), |m| m.as_str().parse::<u64>().ok())
    };

    Some(VersionKey {
        major: number(1)?,
        minor: number(2)?,
        patch: number(3)?,
        channel: Channel::from_suffix(caps.get(4).map(|m| m.as_str())),
        prerelease: number(5)?,
    })
}
