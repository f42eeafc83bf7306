use crate::classifier::Classifier;
use crate::config::CodesniffConfig;
use crate::io::{self, output::DetectionReport, OutputFormat};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const STDIN_LABEL: &str = "<stdin>";

pub struct DetectConfig {
    pub paths: Vec<PathBuf>,
    pub ext: Option<String>,
    pub all: bool,
    pub format: Option<OutputFormat>,
}

/// Extension hint for a file: explicit override first, then the file's own
pub(crate) fn extension_hint<'a>(explicit: Option<&'a str>, path: Option<&'a Path>) -> Option<&'a str> {
    explicit.or_else(|| path.and_then(|p| p.extension()).and_then(|e| e.to_str()))
}

/// Classify every path, or standard input when there are none
pub fn detect_sources(
    classifier: &Classifier,
    paths: &[PathBuf],
    ext: Option<&str>,
) -> Result<Vec<DetectionReport>> {
    if paths.is_empty() {
        let text = io::read_stdin()?;
        return Ok(vec![DetectionReport {
            source: STDIN_LABEL.to_string(),
            classification: classifier.classify_with_hint(&text, ext),
        }]);
    }

    paths
        .iter()
        .map(|path| {
            let text = io::read_source(path)?;
            let hint = extension_hint(ext, Some(path.as_path()));
            log::debug!(
                "Classifying {} ({} bytes, extension suggests {:?})",
                path.display(),
                text.len(),
                hint.and_then(|e| classifier.catalog().language_for_extension(e))
            );
            Ok(DetectionReport {
                source: path.display().to_string(),
                classification: classifier.classify_with_hint(&text, hint),
            })
        })
        .collect()
}

pub fn detect(config: DetectConfig, settings: &CodesniffConfig) -> Result<()> {
    let classifier = Classifier::new(
        crate::catalog::SignatureCatalog::shared(),
        settings.detection(),
    );
    let reports = detect_sources(&classifier, &config.paths, config.ext.as_deref())?;

    let format = config
        .format
        .or(settings.default_format())
        .unwrap_or(OutputFormat::Terminal);
    let show_all = config.all
        || settings
            .output
            .as_ref()
            .is_some_and(|o| o.show_all_candidates);

    io::create_writer(format, show_all, classifier.config()).write_detections(&reports)
}
