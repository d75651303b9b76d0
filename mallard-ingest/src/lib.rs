//! mallard-ingest: bank-statement text normalization and transaction extraction.
//!
//! The pipeline runs strictly forward: normalize page text, fold multi-line
//! continuations, extract records, enrich details, then hand off to
//! mallard-core for date normalization and categorization.

pub mod enrich;
pub mod extract;
pub mod multiline;
pub mod normalize;
pub mod pipeline;

pub use extract::RawMatch;
pub use normalize::normalize_pages;
pub use pipeline::{parse_normalized, parse_statement};
