//! Parse command implementation.
//!
//! The `runtrail parse` command reads a registry hive, decodes its
//! UserAssist entries, and writes a report to stdout or a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::ParseArgs;
use crate::error::{Result, RuntrailError};
use crate::hive::Hive;
use crate::knownfolders::OsGeneration;
use crate::output::{write_report, OutputFormat, Report};
use crate::ui::{Prompt, PromptType, UserInterface};
use crate::userassist;

use super::dispatcher::{Command, CommandResult};

/// The parse command implementation.
pub struct ParseCommand {
    args: ParseArgs,
}

impl ParseCommand {
    /// Create a new parse command.
    pub fn new(args: ParseArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ParseArgs {
        &self.args
    }

    /// Resolve the hive path from the CLI argument or an interactive
    /// prompt. `None` means no path is available.
    fn resolve_hive_path(&self, ui: &mut dyn UserInterface) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.args.hive {
            return Ok(Some(path.clone()));
        }
        if !ui.is_interactive() {
            return Ok(None);
        }

        let prompt = Prompt {
            key: "hive_path".to_string(),
            question: "Path to the registry hive (e.g. NTUSER.DAT)".to_string(),
            prompt_type: PromptType::Input,
            default: None,
        };
        let answer = ui.prompt(&prompt)?.as_string();
        Ok(Some(PathBuf::from(answer)))
    }

    /// Resolve the Windows generation from `--os` or a prompt. Without
    /// either, assume a modern hive.
    fn resolve_generation(&self, ui: &mut dyn UserInterface) -> Result<OsGeneration> {
        if let Some(generation) = self.args.os {
            return Ok(generation);
        }
        if !ui.is_interactive() {
            return Ok(OsGeneration::default());
        }

        let prompt = Prompt {
            key: "os_generation".to_string(),
            question: "Is this hive from Windows XP?".to_string(),
            prompt_type: PromptType::Confirm,
            default: Some("no".to_string()),
        };
        match ui.prompt(&prompt)?.as_bool() {
            Some(true) => Ok(OsGeneration::WinXp),
            _ => Ok(OsGeneration::Win7),
        }
    }

    /// Determine where the report goes: an explicit `--output` file, an
    /// interactively chosen file, or stdout (`None`).
    fn resolve_destination(&self, ui: &mut dyn UserInterface) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.args.output {
            return Ok(Some(path.clone()));
        }
        // An explicit --format without --output means stdout
        if self.args.format.is_some() || !ui.is_interactive() {
            return Ok(None);
        }

        let confirm = Prompt {
            key: "write_file".to_string(),
            question: "Write the report to a file?".to_string(),
            prompt_type: PromptType::Confirm,
            default: Some("no".to_string()),
        };
        if ui.prompt(&confirm)?.as_bool() != Some(true) {
            return Ok(None);
        }

        let name = Prompt {
            key: "output_path".to_string(),
            question: "Output file name (.json or .yaml)".to_string(),
            prompt_type: PromptType::Input,
            default: Some("report.json".to_string()),
        };
        let answer = ui.prompt(&name)?.as_string();
        Ok(Some(PathBuf::from(answer)))
    }

    /// Pick the format for a file report: `--format` wins, then the file
    /// extension. A name with no extension at all gets `.json` appended;
    /// an unrecognized extension is an error.
    fn resolve_file_format(
        &self,
        path: &Path,
        ui: &mut dyn UserInterface,
    ) -> Result<(PathBuf, OutputFormat)> {
        if let Some(format) = self.args.format {
            return Ok((path.to_path_buf(), format));
        }
        if let Some(format) = OutputFormat::from_extension(path) {
            return Ok((path.to_path_buf(), format));
        }
        if path.extension().is_none() {
            let with_ext = path.with_extension("json");
            ui.message(&format!(
                "No file extension given, writing JSON to {}",
                with_ext.display()
            ));
            return Ok((with_ext, OutputFormat::Json));
        }
        Err(RuntrailError::UnrecognizedExtension {
            path: path.to_path_buf(),
        })
    }
}

impl Command for ParseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(hive_path) = self.resolve_hive_path(ui)? else {
            ui.error("No hive file given. Pass a path: runtrail parse <HIVE>");
            return Ok(CommandResult::failure(2));
        };
        let generation = self.resolve_generation(ui)?;
        debug!("parsing {} as {}", hive_path.display(), generation);

        let mut spinner = ui.start_spinner(&format!("Parsing {}", hive_path.display()));
        let hive = match Hive::open(&hive_path) {
            Ok(hive) => hive,
            Err(e) => {
                spinner.finish_error(&format!("Could not read {}", hive_path.display()));
                return Err(e);
            }
        };
        let records = match userassist::parse_hive(&hive, generation) {
            Ok(records) => records,
            Err(e) => {
                spinner.finish_error(&format!("Failed to parse {}", hive_path.display()));
                return Err(e);
            }
        };
        spinner.finish_success(&format!("Decoded {} execution records", records.len()));

        let report = Report::new(&hive_path, &hive, generation, records);

        match self.resolve_destination(ui)? {
            Some(path) => {
                let (path, format) = self.resolve_file_format(&path, ui)?;
                let file = File::create(&path)?;
                let mut writer = BufWriter::new(file);
                write_report(&report, format, &mut writer)?;
                writer.flush()?;
                ui.success(&format!("Report written to {}", path.display()));
            }
            None => {
                let format = self.args.format.unwrap_or(OutputFormat::Text);
                let stdout = io::stdout();
                write_report(&report, format, &mut stdout.lock())?;
            }
        }

        Ok(CommandResult::success())
    }
}
