//! YAML report formatter.

use std::io::Write;

use super::{Report, ReportFormatter};

/// Formats a report as YAML.
pub struct YamlFormatter;

impl YamlFormatter {
    /// Create a new YAML formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for YamlFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        serde_yaml::to_writer(writer, report).map_err(std::io::Error::other)
    }
}
