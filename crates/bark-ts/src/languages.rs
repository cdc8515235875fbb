//! Built-in language table.
//!
//! Registry order matters only for filename patterns: the first language
//! whose pattern matches a base name wins.

use crate::descriptor::{CommentScope, LanguageDescriptor};

/// Go.
pub const GO: LanguageDescriptor = LanguageDescriptor {
    name: "Go",
    extensions: &[".go"],
    filename_patterns: &[],
    grammar: tree_sitter_go::LANGUAGE,
    comment_query: LanguageDescriptor::COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// JavaScript, including JSX and ES/CommonJS module extensions.
pub const JAVASCRIPT: LanguageDescriptor = LanguageDescriptor {
    name: "JavaScript",
    extensions: &[".js", ".jsx", ".mjs", ".cjs"],
    filename_patterns: &[],
    grammar: tree_sitter_javascript::LANGUAGE,
    comment_query: LanguageDescriptor::COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// TypeScript. The TSX grammar is a superset and handles `.tsx` as well.
pub const TYPESCRIPT: LanguageDescriptor = LanguageDescriptor {
    name: "TypeScript",
    extensions: &[".ts", ".tsx", ".mts", ".cts"],
    filename_patterns: &[],
    grammar: tree_sitter_typescript::LANGUAGE_TSX,
    comment_query: LanguageDescriptor::COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// Python.
pub const PYTHON: LanguageDescriptor = LanguageDescriptor {
    name: "Python",
    extensions: &[".py", ".pyi", ".pyw"],
    filename_patterns: &[],
    grammar: tree_sitter_python::LANGUAGE,
    comment_query: LanguageDescriptor::COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// Java.
pub const JAVA: LanguageDescriptor = LanguageDescriptor {
    name: "Java",
    extensions: &[".java"],
    filename_patterns: &[],
    grammar: tree_sitter_java::LANGUAGE,
    comment_query: LanguageDescriptor::LINE_BLOCK_COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// C.
pub const C: LanguageDescriptor = LanguageDescriptor {
    name: "C",
    extensions: &[".c", ".h"],
    filename_patterns: &[],
    grammar: tree_sitter_c::LANGUAGE,
    comment_query: LanguageDescriptor::COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// C++.
pub const CPP: LanguageDescriptor = LanguageDescriptor {
    name: "C++",
    extensions: &[".cpp", ".cc", ".cxx", ".c++", ".hpp", ".hh", ".hxx", ".h++"],
    filename_patterns: &[],
    grammar: tree_sitter_cpp::LANGUAGE,
    comment_query: LanguageDescriptor::COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// JSON, including the commented variants.
pub const JSON: LanguageDescriptor = LanguageDescriptor {
    name: "JSON",
    extensions: &[".json", ".jsonc", ".json5"],
    filename_patterns: &[],
    grammar: tree_sitter_json::LANGUAGE,
    comment_query: LanguageDescriptor::COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// Bash and POSIX shell, plus dotenv files which share `#` comments.
pub const BASH: LanguageDescriptor = LanguageDescriptor {
    name: "Bash",
    extensions: &[".sh", ".bash", ".zsh", ".env"],
    filename_patterns: &[
        r"^\.env(\..+)?$",
        r"^\.(bashrc|bash_profile|bash_aliases|zshrc|zprofile|profile)$",
    ],
    grammar: tree_sitter_bash::LANGUAGE,
    comment_query: LanguageDescriptor::COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// Lua.
pub const LUA: LanguageDescriptor = LanguageDescriptor {
    name: "Lua",
    extensions: &[".lua"],
    filename_patterns: &[],
    grammar: tree_sitter_lua::LANGUAGE,
    comment_query: LanguageDescriptor::COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// HCL, including Terraform.
pub const HCL: LanguageDescriptor = LanguageDescriptor {
    name: "HCL",
    extensions: &[".hcl", ".tf", ".tfvars"],
    filename_patterns: &[],
    grammar: tree_sitter_hcl::LANGUAGE,
    comment_query: LanguageDescriptor::COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// YAML.
pub const YAML: LanguageDescriptor = LanguageDescriptor {
    name: "YAML",
    extensions: &[".yaml", ".yml"],
    filename_patterns: &[],
    grammar: tree_sitter_yaml::LANGUAGE,
    comment_query: LanguageDescriptor::COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// XML and XML-based formats.
pub const XML: LanguageDescriptor = LanguageDescriptor {
    name: "XML",
    extensions: &[".xml", ".xsd", ".xsl", ".xslt", ".svg", ".plist"],
    filename_patterns: &[],
    grammar: tree_sitter_xml::LANGUAGE_XML,
    comment_query: "((Comment) @comment)",
    comment_scope: CommentScope::Anywhere,
};

/// TOML.
pub const TOML: LanguageDescriptor = LanguageDescriptor {
    name: "TOML",
    extensions: &[".toml"],
    filename_patterns: &[],
    grammar: tree_sitter_toml_ng::LANGUAGE,
    comment_query: LanguageDescriptor::COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// Rust.
pub const RUST: LanguageDescriptor = LanguageDescriptor {
    name: "Rust",
    extensions: &[".rs"],
    filename_patterns: &[],
    grammar: tree_sitter_rust::LANGUAGE,
    comment_query: LanguageDescriptor::LINE_BLOCK_COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// Zig.
pub const ZIG: LanguageDescriptor = LanguageDescriptor {
    name: "Zig",
    extensions: &[".zig", ".zon"],
    filename_patterns: &[],
    grammar: tree_sitter_zig::LANGUAGE,
    comment_query: LanguageDescriptor::COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// Kotlin.
pub const KOTLIN: LanguageDescriptor = LanguageDescriptor {
    name: "Kotlin",
    extensions: &[".kt", ".kts"],
    filename_patterns: &[],
    grammar: tree_sitter_kotlin_ng::LANGUAGE,
    comment_query: LanguageDescriptor::LINE_BLOCK_COMMENT_QUERY,
    comment_scope: CommentScope::Anywhere,
};

/// Dockerfile.
///
/// Parsed with the Bash grammar, which would also take a mid-line `#`
/// or an unbalanced quote as shell syntax. Docker only has whole-line `#`
/// comments, so everything else is blanked before parsing.
pub const DOCKER: LanguageDescriptor = LanguageDescriptor {
    name: "Docker",
    extensions: &[".dockerfile", ".Dockerfile"],
    filename_patterns: &[r"^[Dd]ockerfile$", r"^[Dd]ockerfile\.[\w.-]+$"],
    grammar: tree_sitter_bash::LANGUAGE,
    comment_query: LanguageDescriptor::COMMENT_QUERY,
    comment_scope: CommentScope::WholeLine("#"),
};

/// All built-in languages, in registry order.
pub static ALL: &[LanguageDescriptor] = &[
    GO, JAVASCRIPT, TYPESCRIPT, PYTHON, JAVA, C, CPP, JSON, BASH, LUA, HCL, YAML, XML, TOML, RUST,
    ZIG, KOTLIN, DOCKER,
];
