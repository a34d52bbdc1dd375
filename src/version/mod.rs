//! Version parsing and ranking for nightly tarballs
//!
//! # Modules
//!
//! - [`key`]: Parses `MAJOR.MINOR.PATCH[aN|rcN]` into a totally ordered [`key::VersionKey`]
//! - [`candidate`]: Pairs listed keys with their version and ranks them newest first

pub mod candidate;
pub mod key;
