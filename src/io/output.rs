use crate::catalog::{MarkerClass, SignatureCatalog};
use crate::classifier::{Classification, ScoredCandidate};
use crate::config::DetectionConfig;
use crate::core::Language;
use crate::validator::ValidationVerdict;
use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Candidates listed by the terminal writer unless `--all` is given
const TOP_CANDIDATES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Terminal,
    Json,
}

/// Classification of one input, labelled with where it came from
#[derive(Debug, Clone, Serialize)]
pub struct DetectionReport {
    pub source: String,
    #[serde(flatten)]
    pub classification: Classification,
}

/// Verdict for one input, labelled with where it came from
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub source: String,
    #[serde(flatten)]
    pub verdict: ValidationVerdict,
}

/// One row of the `languages` listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub extensions: &'static [&'static str],
    pub strong_markers: usize,
    pub weak_markers: usize,
    pub disqualifiers: usize,
}

impl LanguageSummary {
    pub fn collect(catalog: &SignatureCatalog) -> Vec<Self> {
        catalog
            .entries()
            .iter()
            .map(|entry| {
                let language = entry.language();
                Self {
                    id: language.id(),
                    name: language.display_name(),
                    aliases: language.aliases(),
                    extensions: language.extensions(),
                    strong_markers: entry.count_of(MarkerClass::Strong),
                    weak_markers: entry.count_of(MarkerClass::Weak),
                    disqualifiers: entry.count_of(MarkerClass::Disqualifier),
                }
            })
            .collect()
    }
}

pub trait ReportWriter {
    fn write_detections(&mut self, reports: &[DetectionReport]) -> anyhow::Result<()>;
    fn write_validation(&mut self, report: &ValidationReport) -> anyhow::Result<()>;
    fn write_languages(&mut self, languages: &[LanguageSummary]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_detections(&mut self, reports: &[DetectionReport]) -> anyhow::Result<()> {
        match reports {
            [single] => self.write_json(single),
            many => self.write_json(many),
        }
    }

    fn write_validation(&mut self, report: &ValidationReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_languages(&mut self, languages: &[LanguageSummary]) -> anyhow::Result<()> {
        self.write_json(languages)
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    show_all: bool,
    thresholds: DetectionConfig,
}

impl TerminalWriter<std::io::Stdout> {
    pub fn stdout(show_all: bool) -> Self {
        Self::new(std::io::stdout(), show_all)
    }
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, show_all: bool) -> Self {
        Self {
            writer,
            show_all,
            thresholds: DetectionConfig::default(),
        }
    }

    /// Colour confidences by the medium/low thresholds of `thresholds`
    pub fn with_thresholds(mut self, thresholds: DetectionConfig) -> Self {
        self.thresholds = thresholds;
        self
    }

    fn write_detection(&mut self, report: &DetectionReport) -> anyhow::Result<()> {
        let classification = &report.classification;
        writeln!(self.writer, "{}", report.source.bold())?;

        if let Some(reason) = classification.inconclusive {
            writeln!(
                self.writer,
                "  {} {} ({})",
                "?".yellow(),
                Language::Unknown.display_name().yellow().bold(),
                reason
            )?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "  {} {} {}",
            "→".green(),
            classification.language().display_name().green().bold(),
            format_confidence(classification.confidence(), &self.thresholds)
        )?;

        let shown = if self.show_all {
            classification.ranked.len()
        } else {
            TOP_CANDIDATES
        };
        for (rank, candidate) in classification.ranked.iter().take(shown).enumerate() {
            self.write_candidate(rank + 1, candidate)?;
        }
        writeln!(self.writer, "  tokens: {}", classification.token_count)?;
        Ok(())
    }

    fn write_candidate(&mut self, rank: usize, candidate: &ScoredCandidate) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "  #{rank:<2} {:<11} score {:>6.1}  confidence {:.2}  strong hits {}",
            candidate.language.display_name(),
            candidate.raw_score,
            candidate.confidence,
            candidate.strong_hits
        )?;
        if rank == 1 {
            for evidence in candidate.evidence.iter().take(TOP_CANDIDATES) {
                writeln!(
                    self.writer,
                    "       {} {} x{} (+{:.1})",
                    "·".dimmed(),
                    evidence.label,
                    evidence.count,
                    evidence.contribution
                )?;
            }
        }
        Ok(())
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_detections(&mut self, reports: &[DetectionReport]) -> anyhow::Result<()> {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                writeln!(self.writer)?;
            }
            self.write_detection(report)?;
        }
        Ok(())
    }

    fn write_validation(&mut self, report: &ValidationReport) -> anyhow::Result<()> {
        let verdict = &report.verdict;
        writeln!(self.writer, "{}", report.source.bold())?;

        let (symbol, status) = if verdict.matches {
            ("✓".green(), "MATCH".green().bold())
        } else {
            ("✗".red(), "MISMATCH".red().bold())
        };
        writeln!(
            self.writer,
            "  {symbol} {status}: declared {}, detected {} {}",
            verdict.declared,
            verdict.detected,
            format_confidence(verdict.confidence, &self.thresholds)
        )?;
        for suggestion in &verdict.suggestions {
            writeln!(self.writer, "    - {suggestion}")?;
        }
        Ok(())
    }

    fn write_languages(&mut self, languages: &[LanguageSummary]) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            format!(
                "{:<12} {:<11} {:>6} {:>4} {:>4}  {}",
                "ID", "NAME", "STRONG", "WEAK", "DISQ", "EXTENSIONS"
            )
            .bold()
        )?;
        for summary in languages {
            writeln!(
                self.writer,
                "{:<12} {:<11} {:>6} {:>4} {:>4}  {}",
                summary.id,
                summary.name,
                summary.strong_markers,
                summary.weak_markers,
                summary.disqualifiers,
                summary.extensions.join(", ")
            )?;
            if !summary.aliases.is_empty() {
                writeln!(
                    self.writer,
                    "{:<12} {}",
                    "",
                    format!("aliases: {}", summary.aliases.join(", ")).dimmed()
                )?;
            }
        }
        Ok(())
    }
}

fn confidence_color(confidence: f64, thresholds: &DetectionConfig) -> Color {
    if confidence >= thresholds.medium_confidence {
        Color::Green
    } else if confidence >= thresholds.low_confidence {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn format_confidence(confidence: f64, thresholds: &DetectionConfig) -> ColoredString {
    format!("({:.0}% confidence)", confidence * 100.0).color(confidence_color(confidence, thresholds))
}

pub fn create_writer(
    format: OutputFormat,
    show_all: bool,
    thresholds: &DetectionConfig,
) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal => {
            Box::new(TerminalWriter::stdout(show_all).with_thresholds(thresholds.clone()))
        }
    }
}
