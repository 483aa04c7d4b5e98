//! Known-folder resolution for UserAssist value names.
//!
//! Modern UserAssist entries name programs relative to a known folder by
//! embedding the folder's brace-delimited GUID:
//! `{B4BFCC3A-DB2C-424C-B029-7FE99A87C641}\notepad.exe`. Resolution runs
//! in two stages. First the GUID span is swapped for the folder's default
//! location, which usually carries an environment-style placeholder.
//! Then the placeholder is expanded to the concrete root of the chosen
//! Windows generation. A stage that finds nothing to substitute leaves
//! the name as it stands, so unknown GUIDs, legacy XP-era paths, and
//! session control markers all pass through unchanged.

mod placeholders;
mod table;

pub use placeholders::OsGeneration;
pub use table::{known_folder_path, FOLDER_GUIDS};

use std::sync::LazyLock;

use regex::Regex;

/// Regex for the GUID span of a value name. Deliberately greedy: first
/// `{` through last `}`, matching how the identifiers were recorded.
static GUID_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{.*\}").expect("GUID_SPAN must compile"));

/// Regex for the placeholder span of a folder location, first `%`
/// through last `%`.
static PLACEHOLDER_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%.*%").expect("PLACEHOLDER_SPAN must compile"));

/// Rewrite the known-folder GUID in `name`, if any, to a concrete path
/// for the given Windows generation.
///
/// Names with no brace span, or whose span is not a recognized folder
/// identifier, are returned verbatim. A recognized folder whose
/// placeholder has no root under `generation` keeps the placeholder.
pub fn resolve(name: &str, generation: OsGeneration) -> String {
    let Some(span) = GUID_SPAN.find(name) else {
        return name.to_string();
    };
    let Some(location) = known_folder_path(span.as_str()) else {
        return name.to_string();
    };
    let logical = name.replacen(span.as_str(), location, 1);
    expand_root(&logical, generation)
}

/// Expand the leading placeholder of a folder location to the
/// generation's root, when the generation defines one.
fn expand_root(location: &str, generation: OsGeneration) -> String {
    let Some(span) = PLACEHOLDER_SPAN.find(location) else {
        return location.to_string();
    };
    match generation.root(span.as_str()) {
        Some(root) => location.replacen(span.as_str(), root, 1),
        None => location.to_string(),
    }
}
