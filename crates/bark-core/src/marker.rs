//! Marker tag matching on comment text.

use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

use crate::types::{CommentSpan, Finding};

/// Characters that open a comment in one of the supported languages.
///
/// Stripped from the start of a comment before looking for the tag, so that
/// `//`, `///`, `/*`, `/**`, `#`, `--`, `--[[`, `<!--` and `;` all work.
/// Lua's leveled openers (`--[==[`) are handled by [`skip_long_bracket`].
const COMMENT_PUNCTUATION: &[char] = &['/', '*', '#', '-', '!', '<', ';', '%', '\'', '['];

/// Block comment closers removed from the end of a message.
///
/// Lua's `]]` and `]==]` are matched by [`strip_closer`] separately.
const COMMENT_CLOSERS: &[&str] = &["*/", "-->"];

/// Errors for an unusable marker tag.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum MarkerError {
    /// Tag is empty.
    #[error("marker tag must not be empty")]
    #[diagnostic(code(bark::marker::empty), help("use a word such as `BARK`"))]
    Empty,

    /// Tag contains a character that can never be matched as a single token.
    #[error("marker tag `{tag}` contains {found:?}")]
    #[diagnostic(
        code(bark::marker::invalid_char),
        help("a tag is one token: no whitespace and no `:`")
    )]
    InvalidChar {
        /// The rejected tag.
        tag: String,
        /// Offending character.
        found: char,
    },

    /// Tag starts with comment punctuation that is stripped before matching.
    #[error("marker tag `{tag}` starts with comment punctuation {found:?}")]
    #[diagnostic(code(bark::marker::leading_punctuation))]
    LeadingPunctuation {
        /// The rejected tag.
        tag: String,
        /// Offending character.
        found: char,
    },
}

/// A validated marker tag.
///
/// A comment matches when, after its leading delimiters and whitespace, it
/// starts with the tag as a whole token: the tag followed by end of text,
/// whitespace or `:`. `BARKING` does not match `BARK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    tag: String,
}

impl Marker {
    /// Creates a marker for `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkerError`] if the tag is empty, contains whitespace or
    /// `:`, or starts with comment punctuation.
    pub fn new(tag: impl Into<String>) -> Result<Self, MarkerError> {
        let tag = tag.into();

        let Some(first) = tag.chars().next() else {
            return Err(MarkerError::Empty);
        };
        if COMMENT_PUNCTUATION.contains(&first) {
            return Err(MarkerError::LeadingPunctuation { tag, found: first });
        }
        if let Some(found) = tag.chars().find(|c| c.is_whitespace() || *c == ':') {
            return Err(MarkerError::InvalidChar { tag, found });
        }

        Ok(Self { tag })
    }

    /// The tag this marker matches.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Matches a single comment and returns the message after the tag.
    ///
    /// Returns `None` when the comment does not start with the tag.
    #[must_use]
    pub fn match_comment(&self, text: &str) -> Option<String> {
        let body = skip_long_bracket(
            text.trim_start_matches(|c: char| c.is_whitespace() || COMMENT_PUNCTUATION.contains(&c)),
        );
        let rest = body.strip_prefix(self.tag.as_str())?;

        let message = match rest.chars().next() {
            None => "",
            Some(':') => &rest[1..],
            Some(c) if c.is_whitespace() => rest,
            // `/*BARK*/`, `<!--BARK-->`
            Some(_) if strip_closer(rest.trim_end()) == Some("") => "",
            Some(_) => return None,
        };

        Some(clean_message(message))
    }

    /// Scans comment spans of one file and returns a finding per match.
    #[must_use]
    pub fn scan(&self, file_path: impl AsRef<Path>, spans: &[CommentSpan]) -> Vec<Finding> {
        let file_path = file_path.as_ref();
        spans
            .iter()
            .filter_map(|span| {
                let message = self.match_comment(&span.text)?;
                Some(Finding::new(
                    file_path,
                    span.line,
                    span.column,
                    message,
                    span.text.clone(),
                ))
            })
            .collect()
    }
}

/// First line of the text after the tag, without block comment closers.
fn clean_message(raw: &str) -> String {
    let first_line = raw
        .trim_start_matches(|c: char| c.is_whitespace() && c != '\n' && c != '\r')
        .lines()
        .next()
        .unwrap_or("");

    let message = first_line.trim_end();
    strip_closer(message).map_or(message, str::trim_end).to_owned()
}

/// `text` without its trailing block comment closer, if it has one.
fn strip_closer(text: &str) -> Option<&str> {
    if let Some(stripped) = COMMENT_CLOSERS.iter().find_map(|c| text.strip_suffix(c)) {
        return Some(stripped);
    }
    // Lua long bracket: `]]`, `]=]`, `]==]`, ...
    text.strip_suffix(']')?
        .trim_end_matches('=')
        .strip_suffix(']')
}

/// Skips the `=*[` left over from a Lua long bracket opener (`--[==[`)
/// once the leading `--[` has been trimmed.
fn skip_long_bracket(body: &str) -> &str {
    let after_levels = body.trim_start_matches('=');
    if after_levels.len() == body.len() {
        return body;
    }
    after_levels
        .strip_prefix('[')
        .map_or(body, str::trim_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bark() -> Marker {
        Marker::new("BARK").unwrap()
    }

    #[test]
    fn colon_form() {
        assert_eq!(
            bark().match_comment("// BARK: Remove this").as_deref(),
            Some("Remove this")
        );
    }

    #[test]
    fn space_form() {
        assert_eq!(
            bark().match_comment("// BARK need to fix").as_deref(),
            Some("need to fix")
        );
    }

    #[test]
    fn bare_marker() {
        assert_eq!(bark().match_comment("// BARK").as_deref(), Some(""));
        assert_eq!(bark().match_comment("# BARK:").as_deref(), Some(""));
    }

    #[test]
    fn longer_identifier_does_not_match() {
        assert_eq!(bark().match_comment("// BARKING"), None);
        assert_eq!(bark().match_comment("// BARK_LATER: x"), None);
    }

    #[test]
    fn tag_is_case_sensitive() {
        assert_eq!(bark().match_comment("// bark: lowercase"), None);
        assert_eq!(bark().match_comment("// Bark: mixed"), None);
    }

    #[test]
    fn tag_must_lead_the_comment() {
        assert_eq!(bark().match_comment("// see BARK: later"), None);
    }

    #[test]
    fn strips_language_delimiters() {
        let m = bark();
        assert_eq!(m.match_comment("# BARK: py").as_deref(), Some("py"));
        assert_eq!(m.match_comment("-- BARK: lua").as_deref(), Some("lua"));
        assert_eq!(
            m.match_comment("--[[ BARK: lua block ]]").as_deref(),
            Some("lua block")
        );
        assert_eq!(m.match_comment("/// BARK: doc").as_deref(), Some("doc"));
        assert_eq!(m.match_comment("//! BARK: inner").as_deref(), Some("inner"));
        assert_eq!(
            m.match_comment("<!-- BARK: xml -->").as_deref(),
            Some("xml")
        );
        assert_eq!(m.match_comment("/* BARK: block */").as_deref(), Some("block"));
        assert_eq!(m.match_comment("//BARK:tight").as_deref(), Some("tight"));
    }

    #[test]
    fn bare_tag_against_closer() {
        let m = bark();
        assert_eq!(m.match_comment("/*BARK*/").as_deref(), Some(""));
        assert_eq!(m.match_comment("<!--BARK-->").as_deref(), Some(""));
        assert_eq!(m.match_comment("--[[BARK]]").as_deref(), Some(""));
        assert_eq!(m.match_comment("/*BARK */").as_deref(), Some(""));
        assert_eq!(m.match_comment("/*BARKING*/"), None);
        assert_eq!(m.match_comment("/*BARK*/x"), None);
    }

    #[test]
    fn lua_leveled_long_brackets() {
        let m = bark();
        assert_eq!(m.match_comment("--[==[ BARK: x ]==]").as_deref(), Some("x"));
        assert_eq!(m.match_comment("--[=[BARK]=]").as_deref(), Some(""));
        assert_eq!(
            m.match_comment("--[==[\n  BARK: next line\n]==]").as_deref(),
            Some("next line")
        );
        assert_eq!(m.match_comment("--[==[ BARK: a[1] ]==]").as_deref(), Some("a[1]"));
    }

    #[test]
    fn unicode_whitespace_after_tag_is_trimmed() {
        assert_eq!(
            bark().match_comment("# BARK\u{a0}nbsp").as_deref(),
            Some("nbsp")
        );
        assert_eq!(
            bark().match_comment("# BARK:\u{2003}em space").as_deref(),
            Some("em space")
        );
    }

    #[test]
    fn multi_line_comment_uses_first_line() {
        let text = "/*\n * BARK: first line\n * second line\n */";
        assert_eq!(bark().match_comment(text).as_deref(), Some("first line"));
    }

    #[test]
    fn message_never_continues_onto_next_line() {
        let text = "/* BARK:\n * details below\n */";
        assert_eq!(bark().match_comment(text).as_deref(), Some(""));
    }

    #[test]
    fn trailing_newline_is_trimmed() {
        assert_eq!(
            bark().match_comment("// BARK: rust line comment\n").as_deref(),
            Some("rust line comment")
        );
    }

    #[test]
    fn scan_emits_one_finding_per_matching_span() {
        let spans = vec![
            CommentSpan::new(2, 1, "// BARK: Remove this"),
            CommentSpan::new(3, 1, "// Regular comment"),
            CommentSpan::new(4, 5, "// BARK: Fix this later"),
        ];
        let findings = bark().scan("main.go", &spans);

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].line, 2);
        assert_eq!(findings[0].message, "Remove this");
        assert_eq!(findings[1].line, 4);
        assert_eq!(findings[1].column, 5);
        assert_eq!(findings[1].file_path, Path::new("main.go"));
    }

    #[test]
    fn custom_tag() {
        let m = Marker::new("FIXME").unwrap();
        assert_eq!(m.match_comment("# FIXME: soon").as_deref(), Some("soon"));
        assert_eq!(m.match_comment("# BARK: soon"), None);
    }

    #[test]
    fn rejects_bad_tags() {
        assert_eq!(Marker::new(""), Err(MarkerError::Empty));
        assert!(matches!(
            Marker::new("TO DO"),
            Err(MarkerError::InvalidChar { found: ' ', .. })
        ));
        assert!(matches!(
            Marker::new("A:B"),
            Err(MarkerError::InvalidChar { found: ':', .. })
        ));
        assert!(matches!(
            Marker::new("#BARK"),
            Err(MarkerError::LeadingPunctuation { found: '#', .. })
        ));
    }
}
