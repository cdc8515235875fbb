//! Static description of a supported language.
//!
//! A [`LanguageDescriptor`] is pure data: which files belong to the
//! language and which tree-sitter query selects its comments. Adding a
//! language means adding one descriptor to [`crate::languages::ALL`].

use tree_sitter_language::LanguageFn;

/// Declarative record for one supported language.
pub struct LanguageDescriptor {
    /// Display name (e.g., `"Go"`).
    pub name: &'static str,
    /// Dot-prefixed extensions, compared case-sensitively (e.g., `&[".go"]`).
    pub extensions: &'static [&'static str],
    /// Regexes matched against the file's base name when no extension
    /// matches (e.g., `^[Dd]ockerfile$`).
    pub filename_patterns: &'static [&'static str],
    /// Tree-sitter grammar for the language.
    pub grammar: LanguageFn,
    /// Tree-sitter query capturing comment nodes only.
    pub comment_query: &'static str,
    /// Where in a line a comment may start.
    pub comment_scope: CommentScope,
}

/// Where a language allows comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentScope {
    /// Wherever the grammar produces a comment node.
    Anywhere,
    /// Only on lines whose first non-blank text is this prefix.
    ///
    /// Every other line is blanked before parsing, so the grammar never
    /// sees instruction text. Used when the grammar is a stand-in whose
    /// comment rules are looser than the language's.
    WholeLine(&'static str),
}

impl LanguageDescriptor {
    /// Query for grammars whose comment node is named `comment`.
    pub const COMMENT_QUERY: &'static str = "((comment) @comment)";

    /// Query for grammars that split line and block comments.
    pub const LINE_BLOCK_COMMENT_QUERY: &'static str =
        "[(line_comment) (block_comment)] @comment";
}

impl std::fmt::Debug for LanguageDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageDescriptor")
            .field("name", &self.name)
            .field("extensions", &self.extensions)
            .field("filename_patterns", &self.filename_patterns)
            .field("comment_query", &self.comment_query)
            .field("comment_scope", &self.comment_scope)
            .finish_non_exhaustive()
    }
}
