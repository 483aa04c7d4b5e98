//! Extraction of raw UserAssist values from a user hive.

use tracing::debug;

use crate::error::Result;
use crate::hive::Hive;

/// Key holding the per-provider UserAssist subkeys, relative to the
/// root of an NTUSER.DAT hive.
pub const USERASSIST_KEY: &str =
    r"SOFTWARE\Microsoft\Windows\CurrentVersion\Explorer\UserAssist";

/// A single UserAssist value: ROT13-decoded name plus raw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub name: String,
    pub data: Vec<u8>,
}

/// Apply the ROT13 rotation UserAssist uses to obscure value names.
/// Only ASCII letters rotate, so the transform is its own inverse.
pub fn rot13(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'a'..='z' => (((c as u8 - b'a' + 13) % 26) + b'a') as char,
            'A'..='Z' => (((c as u8 - b'A' + 13) % 26) + b'A') as char,
            _ => c,
        })
        .collect()
}

/// Collect every UserAssist count value in the hive, names decoded.
///
/// Each GUID-named provider subkey keeps its records under a `Count`
/// child; providers without one are skipped. A hive with no UserAssist
/// key at all is an error, since it means the file is not a user hive
/// or the artifact has been stripped.
pub fn collect_entries(hive: &Hive) -> Result<Vec<RawEntry>> {
    let userassist = hive.open_key(USERASSIST_KEY)?;
    let mut entries = Vec::new();
    for provider in userassist.subkeys()? {
        let Some(count) = provider.subkey("Count")? else {
            debug!("provider {} has no Count subkey", provider.name());
            continue;
        };
        for value in count.values()? {
            entries.push(RawEntry {
                name: rot13(&value.name),
                data: value.data,
            });
        }
    }
    Ok(entries)
}
