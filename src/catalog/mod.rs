//! Signature Catalog
//!
//! Holds, per language, the weighted recognition rules used for scoring:
//! - Strong markers: syntax unique or nearly unique to one language
//! - Weak markers: common but still informative tokens
//! - Disqualifiers: patterns that argue against a language
//!
//! The catalog is built once from the static rule table in [`rules`] and is
//! immutable afterwards, so a single instance can be shared across threads.

mod rules;

use crate::core::{Error, Language, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::sync::Arc;

use rules::{Rule, CATALOG_TABLE};

/// Weight granted to a language when the caller's extension hint matches.
/// Strong markers weigh at least 5, so a hint never outvotes the text.
pub const EXTENSION_HINT_WEIGHT: f64 = 2.0;

static BUILTIN: Lazy<Arc<SignatureCatalog>> = Lazy::new(|| {
    Arc::new(SignatureCatalog::builtin().expect("built-in signature table must compile"))
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureKind {
    Keyword,
    Operator,
    Comment,
    Pattern,
    Extension,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerClass {
    Strong,
    Weak,
    Disqualifier,
}

impl std::fmt::Display for MarkerClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MarkerClass::Strong => "strong",
            MarkerClass::Weak => "weak",
            MarkerClass::Disqualifier => "disqualifying",
        };
        write!(f, "{name}")
    }
}

/// A single compiled recognition rule owned by exactly one language
#[derive(Debug, Clone)]
pub struct Signature {
    language: Language,
    class: MarkerClass,
    kind: SignatureKind,
    pattern: String,
    label: String,
    weight: f64,
    matcher: Option<Regex>,
}

impl Signature {
    fn compile(language: Language, rule: &Rule) -> Result<Self> {
        let source = match rule.kind {
            SignatureKind::Keyword => keyword_regex(rule.pattern),
            SignatureKind::Operator => regex::escape(rule.pattern),
            SignatureKind::Comment | SignatureKind::Pattern => rule.pattern.to_string(),
            SignatureKind::Extension => {
                return Ok(Self::extension(language, rule.pattern, rule.weight));
            }
        };

        let matcher = Regex::new(&source).map_err(|source| Error::InvalidPattern {
            language,
            pattern: rule.pattern.to_string(),
            source,
        })?;

        let label = match rule.kind {
            SignatureKind::Keyword if rule.label.is_empty() => format!("`{}` keyword", rule.pattern),
            SignatureKind::Operator if rule.label.is_empty() => format!("`{}`", rule.pattern),
            _ => rule.label.to_string(),
        };

        Ok(Self {
            language,
            class: rule.class,
            kind: rule.kind,
            pattern: rule.pattern.to_string(),
            label,
            weight: rule.weight,
            matcher: Some(matcher),
        })
    }

    fn extension(language: Language, ext: &str, weight: f64) -> Self {
        Self {
            language,
            class: MarkerClass::Weak,
            kind: SignatureKind::Extension,
            pattern: ext.to_ascii_lowercase(),
            label: format!("`.{ext}` file extension"),
            weight,
            matcher: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn class(&self) -> MarkerClass {
        self.class
    }

    pub fn kind(&self) -> SignatureKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Human-readable description used in diagnostics
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Positive weight as declared
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Weight with the disqualifier sign applied
    pub fn signed_weight(&self) -> f64 {
        match self.class {
            MarkerClass::Disqualifier => -self.weight,
            MarkerClass::Strong | MarkerClass::Weak => self.weight,
        }
    }

    /// Number of non-overlapping occurrences in `text`. Extension signatures
    /// never match text.
    pub fn count_in(&self, text: &str) -> usize {
        self.matcher
            .as_ref()
            .map(|m| m.find_iter(text).count())
            .unwrap_or(0)
    }

    pub fn matches_extension(&self, ext: &str) -> bool {
        self.kind == SignatureKind::Extension
            && self
                .pattern
                .eq_ignore_ascii_case(ext.trim_start_matches('.'))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Word boundaries only on the sides where the keyword starts or ends with a
/// word character, so `#include` still matches.
fn keyword_regex(word: &str) -> String {
    let leading = word.chars().next().is_some_and(is_word_char);
    let trailing = word.chars().last().is_some_and(is_word_char);
    format!(
        "{}{}{}",
        if leading { r"\b" } else { "" },
        regex::escape(word),
        if trailing { r"\b" } else { "" }
    )
}

/// Signatures of a single language
#[derive(Debug)]
pub struct CatalogEntry {
    language: Language,
    signatures: Vec<Signature>,
}

impl CatalogEntry {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn count_of(&self, class: MarkerClass) -> usize {
        self.signatures.iter().filter(|s| s.class == class).count()
    }
}

/// Read-only table of recognition rules for every supported language
#[derive(Debug)]
pub struct SignatureCatalog {
    entries: Vec<CatalogEntry>,
}

impl SignatureCatalog {
    /// Compile the built-in rule table.
    pub fn builtin() -> Result<Self> {
        Self::from_table(CATALOG_TABLE)
    }

    /// The process-wide built-in catalog, compiled on first use.
    pub fn shared() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    pub(crate) fn from_table(table: &[(Language, &[&[Rule]])]) -> Result<Self> {
        let entries = Language::supported()
            .map(|language| Self::compile_entry(table, language))
            .collect::<Result<Vec<_>>>()?;

        log::trace!(
            "Compiled signature catalog: {} languages, {} signatures",
            entries.len(),
            entries.iter().map(|e| e.signatures.len()).sum::<usize>()
        );

        Ok(Self { entries })
    }

    fn compile_entry(table: &[(Language, &[&[Rule]])], language: Language) -> Result<CatalogEntry> {
        let mut signatures = table
            .iter()
            .filter(|(lang, _)| *lang == language)
            .flat_map(|(_, groups)| groups.iter())
            .flat_map(|group| group.iter())
            .map(|rule| Signature::compile(language, rule))
            .collect::<Result<Vec<_>>>()?;

        if signatures.is_empty() {
            return Err(Error::IncompleteCatalog(language));
        }

        signatures.extend(
            language
                .extensions()
                .iter()
                .map(|ext| Signature::extension(language, ext, EXTENSION_HINT_WEIGHT)),
        );

        Ok(CatalogEntry {
            language,
            signatures,
        })
    }

    /// Signatures for `language`, in declaration order.
    pub fn lookup(&self, language: Language) -> Result<&[Signature]> {
        self.entries
            .iter()
            .find(|e| e.language == language)
            .map(|e| e.signatures.as_slice())
            .ok_or_else(|| Error::unknown_language(language.id()))
    }

    /// Lookup by a free-form name such as a UI dropdown value.
    pub fn lookup_name(&self, name: &str) -> Result<&[Signature]> {
        let language: Language = name.parse()?;
        self.lookup(language)
    }

    pub fn language_for_extension(&self, ext: &str) -> Option<Language> {
        self.entries
            .iter()
            .find(|e| e.signatures.iter().any(|s| s.matches_extension(ext)))
            .map(|e| e.language)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}
