//! Language registry: maps file paths to languages.
//!
//! Resolution tries the extension index first (O(1)). Only when that fails
//! are the base name regexes of every language tried, in registry order.
//! An extension match therefore always wins over a filename pattern.

use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};
use tree_sitter::{Language, Query};

use crate::descriptor::LanguageDescriptor;
use crate::languages;

/// A descriptor with its grammar loaded and its patterns compiled.
pub struct CompiledLanguage {
    descriptor: &'static LanguageDescriptor,
    grammar: Language,
    query: Option<Query>,
    filename_patterns: Vec<Regex>,
}

impl CompiledLanguage {
    fn compile(descriptor: &'static LanguageDescriptor) -> Self {
        let grammar = Language::new(descriptor.grammar);

        let query = match Query::new(&grammar, descriptor.comment_query) {
            Ok(q) => Some(q),
            Err(e) => {
                warn!(
                    language = descriptor.name,
                    error = %e,
                    "Invalid comment query, no comments will be extracted"
                );
                None
            }
        };

        let filename_patterns = descriptor
            .filename_patterns
            .iter()
            .filter_map(|pattern| match Regex::new(pattern) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!(
                        language = descriptor.name,
                        pattern,
                        error = %e,
                        "Invalid filename pattern, ignoring it"
                    );
                    None
                }
            })
            .collect();

        Self {
            descriptor,
            grammar,
            query,
            filename_patterns,
        }
    }

    /// The static descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &'static LanguageDescriptor {
        self.descriptor
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Tree-sitter grammar.
    #[must_use]
    pub fn grammar(&self) -> &Language {
        &self.grammar
    }

    /// Compiled comment query, `None` if it failed to compile.
    #[must_use]
    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    fn matches_filename(&self, basename: &str) -> bool {
        self.filename_patterns.iter().any(|re| re.is_match(basename))
    }
}

impl std::fmt::Debug for CompiledLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledLanguage")
            .field("name", &self.descriptor.name)
            .field("has_query", &self.query.is_some())
            .finish_non_exhaustive()
    }
}

/// All supported languages, indexed by extension.
///
/// Built once and read-only afterwards, so a shared reference can be used
/// from any number of threads.
pub struct Registry {
    languages: Vec<CompiledLanguage>,
    /// extension -> index into `languages`
    extension_index: HashMap<&'static str, usize>,
}

impl Registry {
    /// Builds a registry of all built-in languages.
    #[must_use]
    pub fn new() -> Self {
        Self::with_descriptors(languages::ALL)
    }

    /// Builds a registry from the given descriptors, in order.
    ///
    /// When two descriptors claim the same extension the later one wins.
    #[must_use]
    pub fn with_descriptors<I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = &'static LanguageDescriptor>,
    {
        let languages: Vec<CompiledLanguage> = descriptors
            .into_iter()
            .map(CompiledLanguage::compile)
            .collect();

        let mut extension_index = HashMap::new();
        for (i, lang) in languages.iter().enumerate() {
            for ext in lang.descriptor.extensions {
                if let Some(prev) = extension_index.insert(*ext, i) {
                    debug!(
                        extension = ext,
                        previous = languages[prev].name(),
                        current = lang.name(),
                        "Extension registered twice, keeping the later language"
                    );
                }
            }
        }

        debug!(
            "Registered {} languages, {} extensions",
            languages.len(),
            extension_index.len()
        );

        Self {
            languages,
            extension_index,
        }
    }

    /// Looks up a language by extension (including the leading dot).
    #[must_use]
    pub fn by_extension(&self, ext: &str) -> Option<&CompiledLanguage> {
        self.extension_index.get(ext).map(|&i| &self.languages[i])
    }

    /// Resolves the language of a file path.
    ///
    /// Returns `None` for unsupported files; that is not an error.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> Option<&CompiledLanguage> {
        let path_str = path.to_string_lossy();

        if let Some(lang) = self.by_extension(file_extension(&path_str)) {
            return Some(lang);
        }

        let basename = path
            .file_name()
            .map_or_else(|| path_str.clone(), |n| n.to_string_lossy());

        self.languages
            .iter()
            .find(|lang| lang.matches_filename(&basename))
    }

    /// Returns true if [`Registry::resolve`] finds a language for `path`.
    #[must_use]
    pub fn is_supported(&self, path: &Path) -> bool {
        self.resolve(path).is_some()
    }

    /// All supported extensions, sorted.
    #[must_use]
    pub fn supported_extensions(&self) -> Vec<&'static str> {
        let mut extensions: Vec<&'static str> = self.extension_index.keys().copied().collect();
        extensions.sort_unstable();
        extensions
    }

    /// All languages, in registry order.
    #[must_use]
    pub fn languages(&self) -> &[CompiledLanguage] {
        &self.languages
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the extension of a path, including the dot.
///
/// Scans backwards: the first `.` seen before any `/` or `\` starts the
/// extension. A dotfile such as `.hidden` is all extension; `.env.local`
/// has extension `.local`; `no_extension` has none.
#[must_use]
pub fn file_extension(path: &str) -> &str {
    for (i, b) in path.bytes().enumerate().rev() {
        match b {
            b'.' => return &path[i..],
            b'/' | b'\\' => return "",
            _ => {}
        }
    }
    ""
}
