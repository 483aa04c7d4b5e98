//! Fixed-layout decoding of UserAssist count records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::filetime::filetime_to_utc;
use crate::userassist::RawEntry;

/// Length of an XP-era count record.
const LEGACY_RECORD_LEN: usize = 16;
/// Length of a Windows 7-era count record.
const MODERN_RECORD_LEN: usize = 72;
/// Offset of the last-access FILETIME in a modern record. The fields
/// between the focus time and here are padding and focus-tracking
/// floats this tool does not report.
const MODERN_FILETIME_OFFSET: usize = 60;

/// One decoded program execution record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionRecord {
    /// Program name with any known-folder identifier resolved.
    pub program: String,
    /// Session identifier recorded with the entry.
    pub session_id: i32,
    /// Number of recorded executions.
    pub used_count: i32,
    /// Times the program's window gained focus. Windows 7-era records
    /// only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_count: Option<i32>,
    /// Total milliseconds the program's window held focus. Windows
    /// 7-era records only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_time_ms: Option<i32>,
    /// Last execution time in UTC. `None` when the stored timestamp is
    /// the zero sentinel.
    pub last_access: Option<DateTime<Utc>>,
}

impl ExecutionRecord {
    /// Decode a raw UserAssist value into an execution record.
    ///
    /// Returns `None` for payloads that are neither the 16-byte XP-era
    /// layout nor the 72-byte Windows 7-era layout; the
    /// `UEME_CTLSESSION` bookkeeping value is the usual case.
    pub fn decode(entry: &RawEntry) -> Option<Self> {
        let data = entry.data.as_slice();
        match data.len() {
            LEGACY_RECORD_LEN => Some(Self {
                program: entry.name.clone(),
                session_id: i32_at(data, 0),
                used_count: i32_at(data, 4),
                focus_count: None,
                focus_time_ms: None,
                last_access: filetime_to_utc(i64_at(data, 8)),
            }),
            MODERN_RECORD_LEN => Some(Self {
                program: entry.name.clone(),
                session_id: i32_at(data, 0),
                used_count: i32_at(data, 4),
                focus_count: Some(i32_at(data, 8)),
                focus_time_ms: Some(i32_at(data, 12)),
                last_access: filetime_to_utc(i64_at(data, MODERN_FILETIME_OFFSET)),
            }),
            _ => None,
        }
    }
}

// Little-endian field readers; record length is matched before use.

fn i32_at(data: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn i64_at(data: &[u8], offset: usize) -> i64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..offset + 8]);
    i64::from_le_bytes(bytes)
}
