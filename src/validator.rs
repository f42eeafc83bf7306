//! Declared-language validation.
//!
//! Compares a user-declared language against the classifier's ranking and
//! explains disagreements with human-readable suggestions.

use serde::Serialize;

use crate::classifier::{Classification, Classifier, SCORE_EPSILON};
use crate::config::DetectionConfig;
use crate::core::{Language, Result};

/// Number of evidence markers quoted in a mismatch
const EVIDENCE_SUGGESTIONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationVerdict {
    pub matches: bool,
    pub declared: Language,
    pub detected: Language,
    pub confidence: f64,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    classifier: Classifier,
}

impl Validator {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn validate(&self, declared: Language, text: &str) -> ValidationVerdict {
        self.validate_with_hint(declared, text, None)
    }

    pub fn validate_with_hint(
        &self,
        declared: Language,
        text: &str,
        extension: Option<&str>,
    ) -> ValidationVerdict {
        let classification = self.classifier.classify_with_hint(text, extension);
        let verdict = judge(declared, &classification, self.classifier.config());

        log::trace!(
            "Validated {} against {}: matches={} confidence={:.3}",
            declared,
            verdict.detected,
            verdict.matches,
            verdict.confidence
        );
        verdict
    }

    /// Validate against a free-form language name; unrecognised names are
    /// rejected rather than coerced.
    pub fn validate_named(&self, declared: &str, text: &str) -> Result<ValidationVerdict> {
        let language: Language = declared.parse()?;
        Ok(self.validate(language, text))
    }
}

/// Pure verdict over an existing classification
pub fn judge(
    declared: Language,
    classification: &Classification,
    config: &DetectionConfig,
) -> ValidationVerdict {
    use crate::classifier::Inconclusive;

    match classification.inconclusive {
        Some(Inconclusive::EmptyInput) => ValidationVerdict {
            matches: true,
            declared,
            detected: Language::Unknown,
            confidence: 0.0,
            suggestions: Vec::new(),
        },
        Some(_) => {
            let matches = declared.is_unknown();
            ValidationVerdict {
                matches,
                declared,
                detected: Language::Unknown,
                confidence: 0.0,
                suggestions: if matches {
                    Vec::new()
                } else {
                    vec![no_clear_match()]
                },
            }
        }
        None => {
            let detected = classification.language();
            let confidence = classification.confidence();
            let matches = is_accepted(declared, classification, config.match_tolerance);
            let suggestions = if matches {
                Vec::new()
            } else {
                mismatch_suggestions(declared, classification, config)
            };

            ValidationVerdict {
                matches,
                declared,
                detected,
                confidence,
                suggestions,
            }
        }
    }
}

/// Top candidate, or runner-up scoring within `tolerance` of the top
fn is_accepted(declared: Language, classification: &Classification, tolerance: f64) -> bool {
    match classification.rank_of(declared) {
        Some(0) => true,
        Some(1) => {
            let top = classification.top.raw_score;
            classification
                .candidate(declared)
                .is_some_and(|c| c.raw_score >= tolerance * top - SCORE_EPSILON)
        }
        _ => false,
    }
}

fn no_clear_match() -> String {
    "Content does not clearly match any supported language.".to_string()
}

fn mismatch_suggestions(
    declared: Language,
    classification: &Classification,
    config: &DetectionConfig,
) -> Vec<String> {
    let detected = classification.language();
    let confidence = classification.confidence();

    let headline = if confidence >= config.medium_confidence {
        format!("This looks more like {detected} than {declared}.")
    } else if confidence < config.low_confidence {
        no_clear_match()
    } else {
        format!("Content might be {detected} rather than {declared}, but the evidence is weak.")
    };

    std::iter::once(headline)
        .chain(
            classification
                .top
                .evidence
                .iter()
                .take(EVIDENCE_SUGGESTIONS)
                .map(|e| {
                    format!(
                        "Found {} ({} marker for {detected}, matched {}x)",
                        e.label, e.class, e.count
                    )
                }),
        )
        .collect()
}
