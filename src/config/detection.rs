use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Thresholds and caps used by the classifier and validator
///
/// Every value that shapes a verdict lives here so callers and tests can
/// probe boundary behaviour without touching the scoring code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// A declared language within the top two candidates is accepted when its
    /// raw score is at least this fraction of the top score
    #[serde(default = "default_match_tolerance")]
    pub match_tolerance: f64,

    /// Confidence at or above which a mismatch names the detected language
    #[serde(default = "default_medium_confidence")]
    pub medium_confidence: f64,

    /// Confidence below which content is reported as matching nothing
    #[serde(default = "default_low_confidence")]
    pub low_confidence: f64,

    /// Snippets shorter than this many tokens get proportionally less confidence
    #[serde(default = "default_min_tokens_for_full_confidence")]
    pub min_tokens_for_full_confidence: usize,

    /// Occurrences of one signature beyond this count are ignored
    #[serde(default = "default_max_occurrences_per_signature")]
    pub max_occurrences_per_signature: usize,

    /// Share of non-printable characters above which input is treated as binary
    #[serde(default = "default_binary_ratio_threshold")]
    pub binary_ratio_threshold: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            match_tolerance: default_match_tolerance(),
            medium_confidence: default_medium_confidence(),
            low_confidence: default_low_confidence(),
            min_tokens_for_full_confidence: default_min_tokens_for_full_confidence(),
            max_occurrences_per_signature: default_max_occurrences_per_signature(),
            binary_ratio_threshold: default_binary_ratio_threshold(),
        }
    }
}

impl DetectionConfig {
    // Pure function: Check a ratio lies in [0, 1]
    fn validate_ratio(value: f64, name: &str) -> Result<()> {
        if (0.0..=1.0).contains(&value) {
            Ok(())
        } else {
            Err(Error::configuration(format!(
                "{name} must be between 0.0 and 1.0, got {value}"
            )))
        }
    }

    /// Validate ranges and the ordering of the confidence thresholds
    pub fn validate(&self) -> Result<()> {
        Self::validate_ratio(self.match_tolerance, "match_tolerance")?;
        Self::validate_ratio(self.medium_confidence, "medium_confidence")?;
        Self::validate_ratio(self.low_confidence, "low_confidence")?;
        Self::validate_ratio(self.binary_ratio_threshold, "binary_ratio_threshold")?;

        if self.low_confidence > self.medium_confidence {
            return Err(Error::configuration(format!(
                "low_confidence ({}) must not exceed medium_confidence ({})",
                self.low_confidence, self.medium_confidence
            )));
        }
        if self.max_occurrences_per_signature == 0 {
            return Err(Error::configuration(
                "max_occurrences_per_signature must be at least 1",
            ));
        }
        if self.min_tokens_for_full_confidence == 0 {
            return Err(Error::configuration(
                "min_tokens_for_full_confidence must be at least 1",
            ));
        }

        Ok(())
    }
}

pub fn default_match_tolerance() -> f64 {
    0.85
}
pub fn default_medium_confidence() -> f64 {
    0.4
}
pub fn default_low_confidence() -> f64 {
    0.15
}
pub fn default_min_tokens_for_full_confidence() -> usize {
    10
}
pub fn default_max_occurrences_per_signature() -> usize {
    5
}
pub fn default_binary_ratio_threshold() -> f64 {
    0.10
}
