//! Comment extraction with tree-sitter.
//!
//! Tree-sitter always produces a tree, inserting `ERROR` nodes where the
//! source does not parse, so malformed files still yield the comments the
//! parser could recognize.

use bark_core::CommentSpan;
use tracing::{debug, trace, warn};
use tree_sitter::{Parser, QueryCursor, StreamingIterator};

use crate::descriptor::CommentScope;
use crate::registry::CompiledLanguage;

/// Extracts every comment in `source`, in document order.
///
/// Returns an empty list when the language has no usable query or the
/// parser produces no tree at all.
#[must_use]
pub fn extract(language: &CompiledLanguage, source: &[u8]) -> Vec<CommentSpan> {
    let Some(query) = language.query() else {
        return Vec::new();
    };

    let masked;
    let source = match language.descriptor().comment_scope {
        CommentScope::Anywhere => source,
        CommentScope::WholeLine(prefix) => {
            masked = keep_comment_lines(source, prefix.as_bytes());
            masked.as_slice()
        }
    };

    let mut parser = Parser::new();
    if let Err(e) = parser.set_language(language.grammar()) {
        warn!(
            language = language.name(),
            error = %e,
            "Incompatible grammar, skipping"
        );
        return Vec::new();
    }

    let Some(tree) = parser.parse(source, None) else {
        debug!(language = language.name(), "Parser returned no tree");
        return Vec::new();
    };

    let root = tree.root_node();
    if root.has_error() {
        trace!(
            language = language.name(),
            "Source contains syntax errors, extracting from partial tree"
        );
    }

    let mut found: Vec<(usize, CommentSpan)> = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(query, root, source);
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            // tree-sitter rows and columns are 0-indexed
            let start = node.start_position();
            let text = String::from_utf8_lossy(&source[node.byte_range()]).into_owned();
            found.push((
                node.start_byte(),
                CommentSpan::new(start.row + 1, start.column + 1, text),
            ));
        }
    }

    found.sort_by_key(|(offset, _)| *offset);
    found.dedup_by_key(|(offset, _)| *offset);
    found.into_iter().map(|(_, span)| span).collect()
}

/// Empties every line that does not start with `prefix` after leading
/// blanks. Line breaks are kept, so rows and columns are unchanged.
fn keep_comment_lines(source: &[u8], prefix: &[u8]) -> Vec<u8> {
    let mut kept = Vec::with_capacity(source.len());
    for line in source.split_inclusive(|&b| b == b'\n') {
        if line.trim_ascii_start().starts_with(prefix) {
            kept.extend_from_slice(line);
        } else if line.ends_with(b"\n") {
            kept.push(b'\n');
        }
    }
    kept
}
