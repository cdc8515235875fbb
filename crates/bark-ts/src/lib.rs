//! # bark-ts
//!
//! Tree-sitter powered comment extraction for bark.
//!
//! Given any file path this crate decides which grammar applies, pulls out
//! exactly the comment nodes, and hands them to a [`bark_core::Marker`]:
//!
//! - [`LanguageDescriptor`] static per-language data (extensions, filename
//!   patterns, grammar, comment query)
//! - [`Registry`] for extension-then-filename language resolution
//! - [`extract`] for running a comment query over source bytes
//! - [`FileScanner`] for scanning one file or many in parallel

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod descriptor;
pub mod extractor;
pub mod languages;
pub mod registry;
pub mod scanner;

pub use descriptor::{CommentScope, LanguageDescriptor};
pub use extractor::extract;
pub use registry::{file_extension, CompiledLanguage, Registry};
pub use scanner::{FileScanner, ScanError};
