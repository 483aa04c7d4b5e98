//! JSON report formatter.

use std::io::Write;

use super::{Report, ReportFormatter};

/// Formats a report as pretty-printed JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report).map_err(std::io::Error::other)?;
        writeln!(writer)?;
        Ok(())
    }
}
