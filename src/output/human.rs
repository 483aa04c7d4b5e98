//! Human-readable report formatter.

use std::io::Write;

use super::{Report, ReportFormatter};
use crate::userassist::ExecutionRecord;

/// Long timestamp form used in terminal reports.
const LONG_DATE_FORMAT: &str = "%A, %d %B, %Y %I:%M:%S %p UTC";

/// Formats a report for terminal display, one banner-separated block
/// per record.
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{:=^50}", " UserAssist execution history ")?;
        writeln!(writer, "Hive:     {}", report.hive.path)?;
        writeln!(writer, "SHA-256:  {}", report.hive.sha256)?;
        writeln!(writer, "Layout:   {}", report.os_generation)?;
        writeln!(writer, "Records:  {}", report.record_count)?;
        for record in &report.records {
            writeln!(writer)?;
            writeln!(writer, "{:=^50}", "")?;
            writeln!(writer, "Program:            {}", record.program)?;
            writeln!(writer, "Session ID:         {}", record.session_id)?;
            writeln!(writer, "Used Count:         {}", record.used_count)?;
            writeln!(writer, "Focus Count:        {}", count_or_na(record.focus_count))?;
            writeln!(
                writer,
                "Focus Time (ms):    {}",
                count_or_na(record.focus_time_ms)
            )?;
            writeln!(writer, "Last Access (UTC):  {}", last_access(record))?;
        }
        Ok(())
    }
}

fn count_or_na(value: Option<i32>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

fn last_access(record: &ExecutionRecord) -> String {
    match record.last_access {
        Some(timestamp) => timestamp.format(LONG_DATE_FORMAT).to_string(),
        None => "N/A".to_string(),
    }
}
