//! Language classification.
//!
//! Text is scored against every catalog entry in one data-driven loop; there
//! is no per-language branching. The result always carries the full ranking
//! so callers can inspect runners-up, not just the winner.

pub mod features;

use std::cmp::Ordering;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::catalog::SignatureCatalog;
use crate::config::DetectionConfig;
use crate::core::Language;

pub use features::{Evidence, FeatureSet, LanguageFeatures, SignatureHit};

/// Raw scores closer than this are treated as equal when ranking
pub const SCORE_EPSILON: f64 = 1e-6;

/// Why a classification produced no language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Inconclusive {
    EmptyInput,
    BinaryInput,
    NoEvidence,
}

impl std::fmt::Display for Inconclusive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Inconclusive::EmptyInput => "input is empty",
            Inconclusive::BinaryInput => "input looks binary",
            Inconclusive::NoEvidence => "no language markers found",
        };
        write!(f, "{reason}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub language: Language,
    pub raw_score: f64,
    /// Normalized certainty in [0, 1]
    pub confidence: f64,
    pub strong_hits: usize,
    /// Positive hits behind the score, strongest first
    pub evidence: Vec<Evidence>,
}

impl ScoredCandidate {
    pub fn unknown() -> Self {
        Self {
            language: Language::Unknown,
            raw_score: 0.0,
            confidence: 0.0,
            strong_hits: 0,
            evidence: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub top: ScoredCandidate,
    /// Every supported language, best first. Empty when scoring was skipped.
    pub ranked: Vec<ScoredCandidate>,
    pub token_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inconclusive: Option<Inconclusive>,
}

impl Classification {
    fn inconclusive(reason: Inconclusive, ranked: Vec<ScoredCandidate>, token_count: usize) -> Self {
        Self {
            top: ScoredCandidate::unknown(),
            ranked,
            token_count,
            inconclusive: Some(reason),
        }
    }

    pub fn language(&self) -> Language {
        self.top.language
    }

    pub fn confidence(&self) -> f64 {
        self.top.confidence
    }

    pub fn is_inconclusive(&self) -> bool {
        self.inconclusive.is_some()
    }

    pub fn candidate(&self, language: Language) -> Option<&ScoredCandidate> {
        self.ranked.iter().find(|c| c.language == language)
    }

    /// Zero-based position of `language` in the ranking
    pub fn rank_of(&self, language: Language) -> Option<usize> {
        self.ranked.iter().position(|c| c.language == language)
    }
}

fn quantize(score: f64) -> i64 {
    (score / SCORE_EPSILON).round() as i64
}

/// Raw score descending, then strong hits descending, then language id.
fn rank_order(a: &LanguageFeatures<'_>, b: &LanguageFeatures<'_>) -> Ordering {
    quantize(b.raw_score)
        .cmp(&quantize(a.raw_score))
        .then_with(|| b.strong_hits.cmp(&a.strong_hits))
        .then_with(|| a.language.id().cmp(b.language.id()))
}

/// Scores text against a shared signature catalog
#[derive(Debug, Clone)]
pub struct Classifier {
    catalog: Arc<SignatureCatalog>,
    config: DetectionConfig,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Classifier {
    pub fn new(catalog: Arc<SignatureCatalog>, config: DetectionConfig) -> Self {
        Self { catalog, config }
    }

    /// Built-in catalog with default thresholds
    pub fn with_defaults() -> Self {
        Self::new(SignatureCatalog::shared(), DetectionConfig::default())
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<SignatureCatalog> {
        &self.catalog
    }

    pub fn classify(&self, text: &str) -> Classification {
        self.classify_with_hint(text, None)
    }

    /// Classify with an optional file extension (`"rs"` or `".rs"`) that
    /// nudges the owning language by a fixed bonus.
    pub fn classify_with_hint(&self, text: &str, extension: Option<&str>) -> Classification {
        let _span = debug_span!("classify", bytes = text.len(), hint = ?extension).entered();

        if text.trim().is_empty() {
            debug!(reason = %Inconclusive::EmptyInput, "Classification skipped");
            return Classification::inconclusive(Inconclusive::EmptyInput, Vec::new(), 0);
        }
        if features::looks_binary(text, self.config.binary_ratio_threshold) {
            debug!(reason = %Inconclusive::BinaryInput, "Classification skipped");
            return Classification::inconclusive(Inconclusive::BinaryInput, Vec::new(), 0);
        }

        let text = features::normalize(text);
        let mut feature_set = FeatureSet::extract(
            text,
            &self.catalog,
            self.config.max_occurrences_per_signature.max(1),
        );
        if let Some(ext) = extension {
            feature_set.apply_extension_hint(ext, &self.catalog);
        }

        let classification = self.rank(&feature_set);
        debug!(
            language = %classification.language(),
            confidence = classification.confidence(),
            tokens = classification.token_count,
            inconclusive = ?classification.inconclusive,
            "Classification complete"
        );
        classification
    }

    /// Convenience returning only the winner
    pub fn detect_language(&self, text: &str) -> ScoredCandidate {
        self.classify(text).top
    }

    fn rank(&self, feature_set: &FeatureSet<'_>) -> Classification {
        let token_count = feature_set.token_count();
        let positive_total = feature_set.positive_total();
        let length_factor = (token_count as f64
            / self.config.min_tokens_for_full_confidence.max(1) as f64)
            .min(1.0);

        let mut ordered: Vec<&LanguageFeatures<'_>> = feature_set.languages().iter().collect();
        ordered.sort_by(|a, b| rank_order(a, b));

        let ranked: Vec<ScoredCandidate> = ordered
            .into_iter()
            .map(|features| {
                // `f64::max` may keep the sign of -0.0
                let share = if positive_total > SCORE_EPSILON {
                    (features.raw_score.max(0.0) / positive_total).clamp(0.0, 1.0) + 0.0
                } else {
                    0.0
                };
                ScoredCandidate {
                    language: features.language,
                    raw_score: features.raw_score,
                    confidence: share * length_factor,
                    strong_hits: features.strong_hits,
                    evidence: features
                        .evidence()
                        .into_iter()
                        .filter(|e| e.contribution > 0.0)
                        .collect(),
                }
            })
            .collect();

        log::trace!(
            "Scored {} languages, positive total {:.2}, leader {:?}",
            ranked.len(),
            positive_total,
            ranked.first().map(|c| (c.language, c.raw_score))
        );

        if positive_total <= SCORE_EPSILON {
            return Classification::inconclusive(Inconclusive::NoEvidence, ranked, token_count);
        }

        let top = ranked
            .first()
            .cloned()
            .unwrap_or_else(ScoredCandidate::unknown);
        Classification {
            top,
            ranked,
            token_count,
            inconclusive: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::with_defaults()
    }

    #[test]
    fn test_empty_input_is_inconclusive() {
        for text in ["", "   \n\t  "] {
            let result = classifier().classify(text);
            assert_eq!(result.language(), Language::Unknown);
            assert_eq!(result.confidence(), 0.0);
            assert_eq!(result.inconclusive, Some(Inconclusive::EmptyInput));
            assert!(result.ranked.is_empty());
        }
    }

    #[test]
    fn test_binary_input_is_inconclusive() {
        let result = classifier().classify("\x00\x01\x02binary garbage");
        assert_eq!(result.language(), Language::Unknown);
        assert_eq!(result.inconclusive, Some(Inconclusive::BinaryInput));
    }

    #[test]
    fn test_prose_has_no_evidence() {
        let result = classifier().classify("hello there friend");
        assert_eq!(result.language(), Language::Unknown);
        assert_eq!(result.inconclusive, Some(Inconclusive::NoEvidence));
        assert_eq!(result.ranked.len(), 15);
        assert!(result.ranked.iter().all(|c| c.confidence == 0.0));
    }

    #[test]
    fn test_ranking_covers_every_language() {
        let result = classifier().classify("fn main() { println!(\"hi\"); }");
        assert_eq!(result.ranked.len(), Language::supported().count());
        assert_eq!(result.top, result.ranked[0]);
        assert_eq!(result.rank_of(Language::Rust), Some(0));
    }

    #[test]
    fn test_python_snippet() {
        let result = classifier().classify("def add(a, b):\n    return a + b");
        assert_eq!(result.language(), Language::Python);
        assert_eq!(result.top.raw_score, 16.0);
        assert!((result.confidence() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_c_and_cpp_tie_breaks_on_id() {
        let result = classifier().classify("int main() { return 0; }");
        let c = result.candidate(Language::C).unwrap();
        let cpp = result.candidate(Language::Cpp).unwrap();
        assert_eq!(c.raw_score, cpp.raw_score);
        assert_eq!(result.language(), Language::C);
        assert_eq!(result.rank_of(Language::Cpp), Some(1));
    }

    #[test]
    fn test_short_snippets_lose_confidence() {
        let short = classifier().classify("elif x");
        let top = &short.top;
        assert_eq!(top.language, Language::Python);
        assert_eq!(short.token_count, 2);
        assert!((top.confidence - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_extension_hint_breaks_a_tie() {
        let text = "int main() { return 0; }";
        let result = classifier().classify_with_hint(text, Some("cpp"));
        assert_eq!(result.language(), Language::Cpp);
    }

    #[test]
    fn test_evidence_excludes_disqualifiers() {
        let result = classifier().classify("if ready:\n    go()");
        for candidate in &result.ranked {
            assert!(candidate.evidence.iter().all(|e| e.contribution > 0.0));
        }
    }

    #[test]
    fn test_scores_never_negative_zero() {
        let html = "<!DOCTYPE html>\n<html>\n  <body><p>Hello</p></body>\n</html>";
        for text in [html, "hello there friend"] {
            let result = classifier().classify(text);
            for candidate in &result.ranked {
                assert!(candidate.confidence.is_sign_positive(), "{:?}", candidate.language);
                if candidate.raw_score == 0.0 {
                    assert!(candidate.raw_score.is_sign_positive());
                }
            }
            let json = serde_json::to_string(&result).unwrap();
            assert!(!json.contains(":-0.0,") && !json.contains(":-0.0}"));
        }
    }

    fn features(language: Language, raw_score: f64, strong_hits: usize) -> LanguageFeatures<'static> {
        LanguageFeatures {
            language,
            hits: Vec::new(),
            raw_score,
            strong_hits,
        }
    }

    #[test]
    fn test_equal_scores_rank_by_strong_hits_before_id() {
        let go = features(Language::Go, 10.0, 1);
        let css = features(Language::Css, 10.0 + 1e-9, 2);
        assert_eq!(rank_order(&go, &css), Ordering::Greater);
        assert_eq!(rank_order(&css, &go), Ordering::Less);

        let mut ordered = vec![&go, &css];
        ordered.sort_by(|a, b| rank_order(a, b));
        assert_eq!(ordered[0].language, Language::Css);
    }

    #[test]
    fn test_higher_score_beats_more_strong_hits() {
        let go = features(Language::Go, 10.5, 1);
        let css = features(Language::Css, 10.0, 3);
        assert_eq!(rank_order(&go, &css), Ordering::Less);
    }

    #[test]
    fn test_confidences_are_bounded() {
        let result = classifier().classify("SELECT id FROM users WHERE id = 1;");
        assert_eq!(result.language(), Language::Sql);
        for candidate in &result.ranked {
            assert!((0.0..=1.0).contains(&candidate.confidence));
        }
    }
}
