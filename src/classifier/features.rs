//! Per-call feature extraction.
//!
//! A [`FeatureSet`] borrows the catalog it was extracted against and lives
//! only for the duration of one classification.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::catalog::{MarkerClass, Signature, SignatureCatalog, SignatureKind};
use crate::core::Language;

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*|\d+(\.\d+)?|[^\sA-Za-z0-9_]").unwrap());

/// Strip the surrounding whitespace envelope; indentation inside is kept.
pub fn normalize(text: &str) -> &str {
    text.trim()
}

pub fn count_tokens(text: &str) -> usize {
    TOKEN.find_iter(text).count()
}

fn is_non_printable(c: char) -> bool {
    c == char::REPLACEMENT_CHARACTER || (c.is_control() && !matches!(c, '\n' | '\r' | '\t' | '\x0C'))
}

/// True when the share of non-printable characters exceeds `threshold`.
pub fn looks_binary(text: &str, threshold: f64) -> bool {
    let (total, non_printable) = text.chars().fold((0usize, 0usize), |(total, bad), c| {
        (total + 1, bad + usize::from(is_non_printable(c)))
    });
    total > 0 && (non_printable as f64 / total as f64) > threshold
}

/// One signature that matched, with its capped count
#[derive(Debug, Clone)]
pub struct SignatureHit<'c> {
    pub signature: &'c Signature,
    pub count: usize,
    pub contribution: f64,
}

/// Explainable, owned form of a hit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evidence {
    pub label: String,
    pub class: MarkerClass,
    pub kind: SignatureKind,
    pub count: usize,
    pub contribution: f64,
}

impl From<&SignatureHit<'_>> for Evidence {
    fn from(hit: &SignatureHit<'_>) -> Self {
        Self {
            label: hit.signature.label().to_string(),
            class: hit.signature.class(),
            kind: hit.signature.kind(),
            count: hit.count,
            contribution: hit.contribution,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LanguageFeatures<'c> {
    pub language: Language,
    pub hits: Vec<SignatureHit<'c>>,
    pub raw_score: f64,
    pub strong_hits: usize,
}

impl LanguageFeatures<'_> {
    /// Hits ordered by contribution, strongest first; label breaks ties
    pub fn evidence(&self) -> Vec<Evidence> {
        let mut evidence: Vec<Evidence> = self.hits.iter().map(Evidence::from).collect();
        evidence.sort_by(|a, b| {
            b.contribution
                .total_cmp(&a.contribution)
                .then_with(|| a.label.cmp(&b.label))
        });
        evidence
    }
}

#[derive(Debug, Clone)]
pub struct FeatureSet<'c> {
    languages: Vec<LanguageFeatures<'c>>,
    token_count: usize,
}

impl<'c> FeatureSet<'c> {
    /// Count every catalog signature in `text`, capping each at `cap` occurrences.
    pub fn extract(text: &str, catalog: &'c SignatureCatalog, cap: usize) -> Self {
        let languages = catalog
            .entries()
            .iter()
            .map(|entry| {
                let hits: Vec<SignatureHit<'c>> = entry
                    .signatures()
                    .iter()
                    .filter_map(|signature| {
                        let count = signature.count_in(text).min(cap);
                        (count > 0).then(|| SignatureHit {
                            signature,
                            count,
                            contribution: signature.signed_weight() * count as f64,
                        })
                    })
                    .collect();
                let raw_score = hits.iter().fold(0.0, |acc, h| acc + h.contribution);
                let strong_hits = hits
                    .iter()
                    .filter(|h| h.signature.class() == MarkerClass::Strong)
                    .map(|h| h.count)
                    .sum();

                LanguageFeatures {
                    language: entry.language(),
                    hits,
                    raw_score,
                    strong_hits,
                }
            })
            .collect();

        Self {
            languages,
            token_count: count_tokens(text),
        }
    }

    /// Credit languages whose extension signature matches the hint, once each.
    pub fn apply_extension_hint(&mut self, extension: &str, catalog: &'c SignatureCatalog) {
        for (features, entry) in self.languages.iter_mut().zip(catalog.entries()) {
            if let Some(signature) = entry
                .signatures()
                .iter()
                .find(|s| s.matches_extension(extension))
            {
                features.raw_score += signature.signed_weight();
                features.hits.push(SignatureHit {
                    signature,
                    count: 1,
                    contribution: signature.signed_weight(),
                });
            }
        }
    }

    pub fn languages(&self) -> &[LanguageFeatures<'c>] {
        &self.languages
    }

    pub fn get(&self, language: Language) -> Option<&LanguageFeatures<'c>> {
        self.languages.iter().find(|l| l.language == language)
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Sum of the positive raw scores
    pub fn positive_total(&self) -> f64 {
        self.languages
            .iter()
            .fold(0.0, |acc, l| acc + l.raw_score.max(0.0))
    }
}
