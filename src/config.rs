use clap::ValueEnum;

// =============================================================================
// Bucket layout constants
// =============================================================================

/// Public bucket holding the nightly tarballs
pub const S3_BASE_URL: &str = "https://therock-nightly-tarball.s3.amazonaws.com/";

/// Leading segment shared by every tarball key
pub const PREFIX_HEAD: &str = "therock-dist";

/// Major-series segment appended to the listing prefix
pub const SERIES_SUFFIX: &str = "-7";

/// GPU target used when none is given
pub const DEFAULT_TARGET: &str = "gfx1151";

/// Number of URLs printed when no count is given
pub const DEFAULT_COUNT: usize = 5;

/// Platform segment of the bucket key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Platform {
    #[default]
    Linux,
    Windows,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Windows => "windows",
        }
    }
}

/// Maps a GPU target name to the segment used in bucket keys.
///
/// The bucket publishes the `gfx110X` family as `gfx110X-dgpu` and the
/// `gfx120X` family as `gfx120X-all`. Everything else is used verbatim.
pub fn resolve_target(target: &str) -> String {
    match target {
        "gfx110X" => format!("{target}-dgpu"),
        "gfx120X" => format!("{target}-all"),
        _ => target.to_string(),
    }
}

/// Ensures the base URL ends with `/` so keys can be appended directly.
pub fn normalize_base_url(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    }
}

/// What to look up in the bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub platform: Platform,
    /// Target segment after alias resolution
    pub target: String,
}

impl ListingQuery {
    pub fn new(platform: Platform, target: &str) -> Self {
        Self {
            platform,
            target: resolve_target(target),
        }
    }

    /// Server-side listing prefix, e.g. `therock-dist-linux-gfx1151-7`
    pub fn prefix(&self) -> String {
        format!(
            "{}-{}-{}{}",
            PREFIX_HEAD,
            self.platform.as_str(),
            self.target,
            SERIES_SUFFIX
        )
    }

    /// Artifact stem without the series segment, e.g. `therock-dist-linux-gfx1151`
    pub fn artifact_stem(&self) -> String {
        format!("{}-{}-{}", PREFIX_HEAD, self.platform.as_str(), self.target)
    }
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::new(Platform::default(), DEFAULT_TARGET)
    }
}
