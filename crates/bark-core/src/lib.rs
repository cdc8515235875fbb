//! # bark-core
//!
//! Core types for finding marker comments (e.g. `// BARK: remove this`).
//!
//! This crate is grammar-agnostic. It provides:
//!
//! - [`CommentSpan`] for comment text handed over by an extractor
//! - [`Marker`] for matching a marker tag at the start of a comment
//! - [`Finding`] and [`ScanResult`] for reporting matches
//! - [`Config`] for `bark.toml` settings
//!
//! ## Example
//!
//! ```
//! use bark_core::{CommentSpan, Marker};
//!
//! let marker = Marker::new("BARK").unwrap();
//! let spans = vec![CommentSpan::new(3, 1, "// BARK: Remove this")];
//! let findings = marker.scan("main.go", &spans);
//!
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].message, "Remove this");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod marker;
mod types;

pub use config::{Config, ConfigError, ScanConfig, DEFAULT_MARKER};
pub use marker::{Marker, MarkerError};
pub use types::{CommentSpan, Finding, ScanFailure, ScanResult};
