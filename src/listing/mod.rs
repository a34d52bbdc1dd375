//! Bucket listing layer
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │  S3Listing  │────▶│KeyExtractor │────▶ Vec<Candidate>
//! │   (fetch)   │     │ (filter)    │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`source`]: `ListingSource` trait for fetching a listing by prefix
//! - [`s3`]: HTTP implementation against a public S3 bucket
//! - [`extractor`]: Extracts versioned tarball keys from a listing
//! - [`error`]: Error types for listing operations

pub mod error;
pub mod extractor;
pub mod s3;
pub mod source;

pub use s3::S3Listing;
