use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::errors::Error;

/// Language enumeration for all supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
    C,
    Cpp,
    Go,
    Rust,
    Php,
    Ruby,
    Shell,
    Sql,
    Html,
    Css,
    Json,
    Unknown,
}

/// (language, id, display name, aliases)
static NAME_TABLE: &[(Language, &str, &str, &[&str])] = &[
    (Language::JavaScript, "javascript", "JavaScript", &["js", "node", "jsx", "ecmascript"]),
    (Language::TypeScript, "typescript", "TypeScript", &["ts", "tsx"]),
    (Language::Python, "python", "Python", &["py", "python3"]),
    (Language::Java, "java", "Java", &[]),
    (Language::C, "c", "C", &["h"]),
    (Language::Cpp, "cpp", "C++", &["c++", "cxx", "cc", "hpp"]),
    (Language::Go, "go", "Go", &["golang"]),
    (Language::Rust, "rust", "Rust", &["rs"]),
    (Language::Php, "php", "PHP", &[]),
    (Language::Ruby, "ruby", "Ruby", &["rb"]),
    (Language::Shell, "shell", "Shell", &["sh", "bash", "zsh"]),
    (Language::Sql, "sql", "SQL", &["mysql", "postgresql", "sqlite"]),
    (Language::Html, "html", "HTML", &["htm", "xhtml"]),
    (Language::Css, "css", "CSS", &["scss", "less"]),
    (Language::Json, "json", "JSON", &[]),
    (Language::Unknown, "unknown", "Unknown", &[]),
];

static EXTENSION_MAP: &[(Language, &[&str])] = &[
    (Language::JavaScript, &["js", "mjs", "cjs", "jsx"]),
    (Language::TypeScript, &["ts", "tsx", "mts", "cts"]),
    (Language::Python, &["py", "pyw", "pyi"]),
    (Language::Java, &["java"]),
    (Language::C, &["c", "h"]),
    (Language::Cpp, &["cpp", "cc", "cxx", "hpp", "hh", "hxx"]),
    (Language::Go, &["go"]),
    (Language::Rust, &["rs"]),
    (Language::Php, &["php", "phtml"]),
    (Language::Ruby, &["rb", "rake", "gemspec"]),
    (Language::Shell, &["sh", "bash", "zsh", "ksh"]),
    (Language::Sql, &["sql"]),
    (Language::Html, &["html", "htm", "xhtml"]),
    (Language::Css, &["css", "scss", "less"]),
    (Language::Json, &["json"]),
];

impl Language {
    /// Every member of the closed set, `Unknown` last
    pub const ALL: [Language; 16] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Python,
        Language::Java,
        Language::C,
        Language::Cpp,
        Language::Go,
        Language::Rust,
        Language::Php,
        Language::Ruby,
        Language::Shell,
        Language::Sql,
        Language::Html,
        Language::Css,
        Language::Json,
        Language::Unknown,
    ];

    /// Languages the classifier can actually detect
    pub fn supported() -> impl Iterator<Item = Language> {
        Self::ALL.into_iter().filter(|l| !l.is_unknown())
    }

    pub fn is_unknown(&self) -> bool {
        *self == Language::Unknown
    }

    /// Stable lowercase identifier, also used for tie-breaking
    pub fn id(&self) -> &'static str {
        self.names().1
    }

    pub fn display_name(&self) -> &'static str {
        self.names().2
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        self.names().3
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        EXTENSION_MAP
            .iter()
            .find(|(lang, _)| lang == self)
            .map(|(_, exts)| *exts)
            .unwrap_or(&[])
    }

    fn names(&self) -> &'static (Language, &'static str, &'static str, &'static [&'static str]) {
        NAME_TABLE
            .iter()
            .find(|(lang, ..)| lang == self)
            .unwrap_or(&NAME_TABLE[NAME_TABLE.len() - 1])
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Accepts ids, display names and aliases, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        NAME_TABLE
            .iter()
            .find(|(_, id, display, aliases)| {
                *id == needle || display.to_ascii_lowercase() == needle || aliases.contains(&needle.as_str())
            })
            .map(|(lang, ..)| *lang)
            .ok_or_else(|| Error::unknown_language(s))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
