use serde::{Deserialize, Serialize};

use super::detection::DetectionConfig;
use crate::io::output::OutputFormat;

/// Root configuration structure for codesniff
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CodesniffConfig {
    /// Classifier and validator thresholds
    #[serde(default)]
    pub detection: Option<DetectionConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl CodesniffConfig {
    pub fn detection(&self) -> DetectionConfig {
        self.detection.clone().unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.default_format)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub default_format: Option<OutputFormat>,

    /// Show the full ranking instead of the top candidates
    #[serde(default)]
    pub show_all_candidates: bool,
}
