//! Folders command implementation.
//!
//! The `runtrail folders` command prints the known-folder GUID table
//! used for path resolution.

use serde::Serialize;

use crate::cli::args::FoldersArgs;
use crate::error::{Result, RuntrailError};
use crate::knownfolders::FOLDER_GUIDS;
use crate::ui::theme::RuntrailTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// One known-folder mapping, for JSON output.
#[derive(Debug, Serialize)]
struct FolderRow {
    guid: &'static str,
    path: &'static str,
}

/// The folders command implementation.
pub struct FoldersCommand {
    args: FoldersArgs,
}

impl FoldersCommand {
    /// Create a new folders command.
    pub fn new(args: FoldersArgs) -> Self {
        Self { args }
    }
}

impl Command for FoldersCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let rows: Vec<FolderRow> = FOLDER_GUIDS
                .iter()
                .map(|&(guid, path)| FolderRow { guid, path })
                .collect();
            let output = serde_json::to_string_pretty(&rows)
                .map_err(|e| RuntrailError::Other(e.into()))?;
            ui.message(&output);
            return Ok(CommandResult::success());
        }

        let theme = RuntrailTheme::new();
        ui.message(&format!("  {}", theme.key.apply_to("Known folders:")));
        for (guid, path) in FOLDER_GUIDS {
            ui.message(&format!("    {}  {}", theme.dim.apply_to(guid), path));
        }
        ui.message("");
        ui.message(&format!("  {} locations", FOLDER_GUIDS.len()));

        Ok(CommandResult::success())
    }
}
