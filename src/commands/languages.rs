use crate::catalog::SignatureCatalog;
use crate::config::CodesniffConfig;
use crate::io::{self, output::LanguageSummary, OutputFormat};
use anyhow::Result;

pub fn list_languages(format: Option<OutputFormat>, settings: &CodesniffConfig) -> Result<()> {
    let summaries = LanguageSummary::collect(&SignatureCatalog::shared());
    let format = format
        .or(settings.default_format())
        .unwrap_or(OutputFormat::Terminal);
    io::create_writer(format, false, &settings.detection()).write_languages(&summaries)
}
