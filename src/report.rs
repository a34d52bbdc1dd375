//! Plain-text output of the newest tarball URLs

use std::io::{self, Write};

use crate::version::candidate::Candidate;

/// Writes status lines and URLs to an output stream
pub struct Reporter<W: Write> {
    out: W,
    base_url: String,
    /// Suppress the informational status lines
    quiet: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, base_url: &str, quiet: bool) -> Self {
        Self {
            out,
            base_url: base_url.to_string(),
            quiet,
        }
    }

    /// Announce the listing request about to be made
    pub fn fetching(&mut self, prefix: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "Fetching S3 listing for prefix: {} ...", prefix)
    }

    /// Print one absolute URL per candidate, preceded by a count line
    pub fn newest(&mut self, candidates: &[Candidate]) -> io::Result<()> {
        if !self.quiet {
            writeln!(
                self.out,
                "Showing {} newest candidate(s):",
                candidates.len()
            )?;
        }
        for candidate in candidates {
            writeln!(self.out, "{}{}", self.base_url, candidate.key)?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
