use super::detect::{extension_hint, STDIN_LABEL};
use crate::classifier::Classifier;
use crate::config::CodesniffConfig;
use crate::core::Language;
use crate::io::{self, output::ValidationReport, OutputFormat};
use crate::validator::Validator;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct ValidateConfig {
    pub lang: String,
    pub path: Option<PathBuf>,
    pub ext: Option<String>,
    pub format: Option<OutputFormat>,
    pub strict: bool,
}

/// Build the verdict for one input without printing it
pub fn validate_source(
    validator: &Validator,
    lang: &str,
    path: Option<&Path>,
    ext: Option<&str>,
) -> Result<ValidationReport> {
    let declared: Language = lang
        .parse()
        .with_context(|| format!("Cannot validate against '{lang}'"))?;
    let (source, text) = match path {
        Some(path) => (path.display().to_string(), io::read_source(path)?),
        None => (STDIN_LABEL.to_string(), io::read_stdin()?),
    };

    let verdict = validator.validate_with_hint(declared, &text, extension_hint(ext, path));

    Ok(ValidationReport { source, verdict })
}

pub fn validate_content(config: ValidateConfig, settings: &CodesniffConfig) -> Result<()> {
    let validator = Validator::new(Classifier::new(
        crate::catalog::SignatureCatalog::shared(),
        settings.detection(),
    ));
    let report = validate_source(
        &validator,
        &config.lang,
        config.path.as_deref(),
        config.ext.as_deref(),
    )?;

    let format = config
        .format
        .or(settings.default_format())
        .unwrap_or(OutputFormat::Terminal);
    io::create_writer(format, false, validator.classifier().config()).write_validation(&report)?;

    if config.strict && !report.verdict.matches {
        anyhow::bail!(
            "Validation failed: content does not match {}",
            report.verdict.declared
        )
    }

    Ok(())
}
