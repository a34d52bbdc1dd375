//! The listing pipeline: fetch, extract, rank, report

use std::io::Write;

use tracing::info;

use crate::config::{DEFAULT_COUNT, ListingQuery, S3_BASE_URL, normalize_base_url};
use crate::listing::extractor::KeyExtractor;
use crate::listing::source::ListingSource;
use crate::report::Reporter;
use crate::version::candidate::{Candidate, newest};

/// Options for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub query: ListingQuery,
    /// Maximum number of URLs to print
    pub count: usize,
    /// Suppress informational status lines
    pub quiet: bool,
    /// Base URL that listed keys are appended to
    pub base_url: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            query: ListingQuery::default(),
            count: DEFAULT_COUNT,
            quiet: false,
            base_url: S3_BASE_URL.to_string(),
        }
    }
}

/// Fetch the listing for `options.query` and print the newest tarball URLs.
///
/// Returns the candidates that were printed, newest first.
pub async fn run<S, W>(source: &S, options: &RunOptions, out: W) -> anyhow::Result<Vec<Candidate>>
where
    S: ListingSource + ?Sized,
    W: Write,
{
    let prefix = options.query.prefix();
    let mut reporter = Reporter::new(out, &normalize_base_url(&options.base_url), options.quiet);

    reporter.fetching(&prefix)?;
    let listing = source.fetch_listing(&prefix).await?;

    let candidates = KeyExtractor::new(&options.query).extract(&listing);
    info!(
        "Found {} tarball(s) for prefix {}",
        candidates.len(),
        prefix
    );

    let shown = newest(candidates, options.count);
    reporter.newest(&shown)?;

    Ok(shown)
}
