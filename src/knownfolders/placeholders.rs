//! Placeholder roots for each supported Windows generation.
//!
//! Known-folder locations are stored with a leading environment-style
//! placeholder (`%USERPROFILE%\Desktop`). Expanding that placeholder to a
//! concrete path depends on which Windows generation laid out the profile,
//! so each generation carries its own root table. The literal `[user]`
//! stands in for the account name, which a hive alone cannot supply.

use std::fmt;

use serde::Serialize;

/// Windows generation whose default filesystem layout anchors placeholder
/// expansion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OsGeneration {
    /// Windows XP layout (`C:\Documents and Settings` profiles).
    #[value(name = "winxp", alias = "xp")]
    WinXp,
    /// Windows Vista and later layout (`C:\Users` profiles).
    #[default]
    #[value(name = "win7")]
    Win7,
}

impl fmt::Display for OsGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsGeneration::WinXp => write!(f, "winxp"),
            OsGeneration::Win7 => write!(f, "win7"),
        }
    }
}

/// Default roots on Windows Vista and later.
static WINDOWS_7_ROOTS: &[(&str, &str)] = &[
    ("%ALLUSERSPROFILE%", r"C:\ProgramData"),
    ("%APPDATA%", r"C:\Users\[user]\AppData\Roaming"),
    ("%LOCALAPPDATA%", r"C:\Users\[user]\AppData\Local"),
    ("%ProgramData%", r"C:\ProgramData"),
    ("%ProgramFiles%", r"C:\Program Files"),
    ("%ProgramFiles(x86)%", r"C:\Program Files (x86)"),
    ("%PUBLIC%", r"C:\Users\Public"),
    ("%SystemDrive%", r"C:"),
    ("%SystemRoot%", r"C:\Windows"),
    ("%USERPROFILE%", r"C:\Users\[user]"),
    ("%windir%", r"C:\Windows"),
];

/// Default roots on Windows XP. Tokens introduced by later generations,
/// such as `%PUBLIC%` and `%ProgramData%`, have no XP equivalent and are
/// deliberately absent; locations using them stay unexpanded.
static WINDOWS_XP_ROOTS: &[(&str, &str)] = &[
    ("%ALLUSERSPROFILE%", r"C:\Documents and Settings\All Users"),
    ("%APPDATA%", r"C:\Documents and Settings\[user]\Application Data"),
    (
        "%LOCALAPPDATA%",
        r"C:\Documents and Settings\[user]\Local Settings\Application Data",
    ),
    ("%ProgramFiles%", r"C:\Program Files"),
    ("%SystemDrive%", r"C:"),
    ("%SystemRoot%", r"C:\Windows"),
    ("%USERPROFILE%", r"C:\Documents and Settings\[user]"),
    ("%windir%", r"C:\Windows"),
];

impl OsGeneration {
    /// Concrete root for a placeholder token, if this generation defines
    /// one. Tokens are matched exactly, in their canonical casing.
    pub(crate) fn root(self, token: &str) -> Option<&'static str> {
        let table = match self {
            OsGeneration::WinXp => WINDOWS_XP_ROOTS,
            OsGeneration::Win7 => WINDOWS_7_ROOTS,
        };
        table
            .iter()
            .find(|(key, _)| *key == token)
            .map(|(_, path)| *path)
    }
}
