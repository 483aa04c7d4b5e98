//! Non-interactive UI for CI, piped, and headless environments.

use crate::error::{Result, RuntrailError};

use super::{OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Plain messages are a command's output and stay on stdout; status and
/// spinner lines go to stderr so report output piped from stdout stays
/// machine-readable. Prompts are answered from their default value; a
/// prompt without a default is an error.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        if let Some(default) = &prompt.default {
            if matches!(prompt.prompt_type, PromptType::Confirm) {
                let value = default.to_lowercase() == "true" || default == "y" || default == "yes";
                return Ok(PromptResult::Bool(value));
            }
            return Ok(PromptResult::String(default.clone()));
        }

        Err(RuntrailError::NonInteractivePrompt {
            prompt: prompt.key.clone(),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let show = self.mode.shows_spinners();
        if show {
            eprintln!("  {}", message);
        }
        Box::new(NoopSpinner { show })
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that does not animate (for non-interactive mode).
struct NoopSpinner {
    show: bool,
}

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.show {
            eprintln!("✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
