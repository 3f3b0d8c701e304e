// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Extractor
//!
//! Pulls email addresses out of arbitrary text with a pattern matcher and
//! post-processes them through a chain of operations.
//!
//! # Features
//!
//! - Built-in RFC 5322 approximation, or a custom pattern
//! - Extraction from one text, many texts, or a raw MIME message
//! - Order-preserving deduplication
//! - Unicode-aware case conversion
//! - Substring based include/exclude filters with configurable defaults
//! - Ordinal sorting
//! - Serializable configuration and reports
//!
//! # Example
//!
//! ```rust
//! use email_extractor::EmailExtractor;
//!
//! let emails = EmailExtractor::new()
//!     .extract("Contact a@example.com or B@EXAMPLE.COM, also skip test@spam.org")?
//!     .unique()?
//!     .lowercase()?
//!     .filter_exclude(Some(["spam"].as_slice()))?
//!     .sort_asc()?
//!     .export()?;
//!
//! assert_eq!(emails, ["a@example.com", "b@example.com"]);
//! # Ok::<(), email_extractor::ExtractError>(())
//! ```

mod config;
mod error;
mod extractor;
mod message;
mod pattern;
mod report;

pub use config::ExtractorConfig;
pub use error::{ExtractError, Result};
pub use extractor::EmailExtractor;
pub use pattern::{DEFAULT_PATTERN, MatchPattern};
pub use report::ExtractionReport;
