//! Report formatters for parsed execution history.
//!
//! A parse produces a [`Report`]: the records plus provenance of the
//! hive they came from. Formatters render a report as terminal text,
//! JSON, or YAML.

pub mod human;
pub mod json;
pub mod yaml;

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::hive::Hive;
use crate::knownfolders::OsGeneration;
use crate::userassist::ExecutionRecord;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal text.
    Text,
    /// Machine-readable JSON.
    Json,
    /// Machine-readable YAML.
    Yaml,
}

impl OutputFormat {
    /// Infer a format from a file name's extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            "txt" | "text" => Some(OutputFormat::Text),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Provenance of the hive a report was parsed from.
#[derive(Debug, Clone, Serialize)]
pub struct HiveProvenance {
    /// Path the hive was read from.
    pub path: String,
    /// SHA-256 of the hive image.
    pub sha256: String,
}

/// A complete parse report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub hive: HiveProvenance,
    pub os_generation: OsGeneration,
    pub record_count: usize,
    pub records: Vec<ExecutionRecord>,
}

impl Report {
    /// Assemble a report for records parsed from the given hive.
    pub fn new(
        path: &Path,
        hive: &Hive,
        generation: OsGeneration,
        records: Vec<ExecutionRecord>,
    ) -> Self {
        Self {
            hive: HiveProvenance {
                path: path.display().to_string(),
                sha256: hex::encode(Sha256::digest(hive.as_bytes())),
            },
            os_generation: generation,
            record_count: records.len(),
            records,
        }
    }
}

/// Trait for rendering a report to a writer.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;
}

/// Render a report in the given format.
pub fn write_report<W: Write>(
    report: &Report,
    format: OutputFormat,
    writer: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => HumanFormatter::new().format(report, writer),
        OutputFormat::Json => JsonFormatter::new().format(report, writer),
        OutputFormat::Yaml => YamlFormatter::new().format(report, writer),
    }
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use yaml::YamlFormatter;
