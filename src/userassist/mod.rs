//! UserAssist artifact parsing.
//!
//! Explorer records program executions under
//! `SOFTWARE\Microsoft\Windows\CurrentVersion\Explorer\UserAssist` in
//! each user's NTUSER.DAT, one provider GUID per record family, value
//! names ROT13-rotated. This module walks those keys, decodes the
//! binary count records, and resolves known-folder identifiers in the
//! decoded names.

mod entry;
mod record;

pub use entry::{collect_entries, rot13, RawEntry, USERASSIST_KEY};
pub use record::ExecutionRecord;

use tracing::debug;

use crate::error::Result;
use crate::hive::Hive;
use crate::knownfolders::{self, OsGeneration};

/// Parse every program execution record in a user hive, in the order
/// the hive stores them.
pub fn parse_hive(hive: &Hive, generation: OsGeneration) -> Result<Vec<ExecutionRecord>> {
    let entries = collect_entries(hive)?;
    Ok(decode_entries(&entries, generation))
}

/// Decode raw entries into execution records, resolving known-folder
/// identifiers in program names. Values whose payload is not a count
/// record are skipped.
pub fn decode_entries(entries: &[RawEntry], generation: OsGeneration) -> Vec<ExecutionRecord> {
    entries
        .iter()
        .filter_map(|entry| {
            let Some(mut record) = ExecutionRecord::decode(entry) else {
                debug!(
                    "skipping {} byte value '{}', not a count record",
                    entry.data.len(),
                    entry.name
                );
                return None;
            };
            record.program = knownfolders::resolve(&record.program, generation);
            Some(record)
        })
        .collect()
}
