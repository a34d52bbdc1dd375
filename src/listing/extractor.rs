//! Artifact extraction from a bucket listing
//!
//! Scans the listing document for `<Key>` elements and keeps the keys that
//! name a versioned tarball for the queried platform and target.
//!
//! Format example:
//! ```text
//! <Contents><Key>therock-dist-linux-gfx1151-7.0.0rc1.tar.gz</Key>...</Contents>
//! ```

use regex::Regex;
use tracing::debug;

use crate::config::ListingQuery;
use crate::version::candidate::Candidate;
use crate::version::key::parse_version;

/// Extractor for versioned tarball keys of a single platform/target
pub struct KeyExtractor {
    /// Regex for a listing entry: `<Key>...</Key>`
    key_re: Regex,
    /// Regex for a tarball name: `<stem>-<version>.tar.gz`
    artifact_re: Regex,
}

impl KeyExtractor {
    pub fn new(query: &ListingQuery) -> Self {
        let artifact_pattern = format!(
            r"{}-(\d+\.\d+\.\d+(?:a\d+|rc\d+)?)\.tar\.gz$",
            regex::escape(&query.artifact_stem())
        );

        Self {
            key_re: Regex::new(r"<Key>([^<]+)</Key>").unwrap(),
            artifact_re: Regex::new(&artifact_pattern).unwrap(),
        }
    }

    /// Returns every key in the listing (matching or not)
    pub fn keys<'a>(&'a self, listing: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.key_re
            .captures_iter(listing)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
    }

    /// Returns the version substring if `key` names a tarball for this query
    pub fn version_of<'a>(&self, key: &'a str) -> Option<&'a str> {
        self.artifact_re
            .captures(key)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Extracts the versioned candidates from a listing, in listing order
    pub fn extract(&self, listing: &str) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for key in self.keys(listing) {
            match self.version_of(key) {
                Some(version) => candidates.push(Candidate::new(parse_version(version), key)),
                None => debug!("Skipping unrelated key: {}", key),
            }
        }

        debug!("Extracted {} candidate(s)", candidates.len());
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Platform;
    use rstest::rstest;

    fn linux_gfx1151() -> KeyExtractor {
        KeyExtractor::new(&ListingQuery::new(Platform::Linux, "gfx1151"))
    }

    fn listing(keys: &[&str]) -> String {
        let contents: String = keys
            .iter()
            .map(|key| {
                format!(
                    "<Contents><Key>{key}</Key><LastModified>2025-01-01T00:00:00.000Z</LastModified><Size>1</Size></Contents>"
                )
            })
            .collect();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><ListBucketResult><Name>bucket</Name>{contents}</ListBucketResult>"#
        )
    }

    #[test]
    fn extract_keeps_only_matching_keys() {
        let body = listing(&[
            "therock-dist-linux-gfx1151-7.0.0.tar.gz",
            "therock-dist-linux-gfx1151-7.0.1rc2.tar.gz",
            "therock-dist-linux-gfx1151-7.1.0a1.tar.gz",
            "therock-dist-linux-gfx1151-7.1.0a1.tar.gz.sha256",
        ]);

        let result = linux_gfx1151().extract(&body);

        assert_eq!(
            result,
            vec![
                Candidate::new(
                    parse_version("7.0.0"),
                    "therock-dist-linux-gfx1151-7.0.0.tar.gz"
                ),
                Candidate::new(
                    parse_version("7.0.1rc2"),
                    "therock-dist-linux-gfx1151-7.0.1rc2.tar.gz"
                ),
                Candidate::new(
                    parse_version("7.1.0a1"),
                    "therock-dist-linux-gfx1151-7.1.0a1.tar.gz"
                ),
            ]
        );
    }

    #[rstest]
    #[case("therock-dist-linux-gfx1151-7.0.0.tar.gz", Some("7.0.0"))]
    #[case("therock-dist-linux-gfx1151-7.10.2rc11.tar.gz", Some("7.10.2rc11"))]
    #[case("therock-dist-linux-gfx1151-7.9.0a20250801.tar.gz", Some("7.9.0a20250801"))]
    #[case("nightly/therock-dist-linux-gfx1151-7.0.0.tar.gz", Some("7.0.0"))] // unanchored start
    #[case("therock-dist-linux-gfx1151-7.0.0.zip", None)]
    #[case("therock-dist-linux-gfx1151-7.0.0.tar.gz.sha256", None)]
    #[case("therock-dist-linux-gfx1151-7.0.tar.gz", None)]
    #[case("therock-dist-linux-gfx1151-7.0.0b1.tar.gz", None)]
    #[case("therock-dist-linux-gfx1151-7.0.0-dev.tar.gz", None)]
    #[case("therock-dist-windows-gfx1151-7.0.0.tar.gz", None)]
    #[case("therock-dist-linux-gfx1150-7.0.0.tar.gz", None)]
    fn version_of_matches_artifact_pattern(#[case] key: &str, #[case] expected: Option<&str>) {
        assert_eq!(linux_gfx1151().version_of(key), expected);
    }

    #[test]
    fn artifact_pattern_escapes_regex_metacharacters_in_target() {
        let extractor = KeyExtractor::new(&ListingQuery::new(Platform::Linux, "gfx.151"));

        assert_eq!(
            extractor.version_of("therock-dist-linux-gfx.151-7.0.0.tar.gz"),
            Some("7.0.0")
        );
        assert_eq!(
            extractor.version_of("therock-dist-linux-gfxX151-7.0.0.tar.gz"),
            None
        );
    }

    #[test]
    fn extract_uses_resolved_target_alias() {
        let extractor = KeyExtractor::new(&ListingQuery::new(Platform::Windows, "gfx110X"));
        let body = listing(&[
            "therock-dist-windows-gfx110X-dgpu-7.0.0.tar.gz",
            "therock-dist-windows-gfx110X-7.0.0.tar.gz",
        ]);

        let result = extractor.extract(&body);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].key, "therock-dist-windows-gfx110X-dgpu-7.0.0.tar.gz");
    }

    #[test]
    fn keys_returns_all_listed_keys() {
        let extractor = linux_gfx1151();
        let body = listing(&["a.tar.gz", "b.txt"]);
        assert_eq!(
            extractor.keys(&body).collect::<Vec<_>>(),
            vec!["a.tar.gz", "b.txt"]
        );
    }

    #[rstest]
    #[case("")]
    #[case("<ListBucketResult></ListBucketResult>")]
    #[case("not xml at all")]
    fn extract_returns_empty_for_listing_without_matches(#[case] body: &str) {
        assert!(linux_gfx1151().extract(body).is_empty());
    }
}
