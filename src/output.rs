//! Output formatting for human and JSON modes
//!
//! Session snapshots can be rendered either as human-readable text or
//! machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Notice, StateLabel};
use crate::core::services::SessionView;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Final report of a command: the session view plus every notice raised
#[derive(Debug, Serialize)]
pub struct SessionReport {
    /// Session state when the command finished
    #[serde(flatten)]
    pub view: SessionView,
    /// Notices in the order they were raised
    pub notices: Vec<Notice>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl SessionReport {
    /// Render the report based on output mode
    ///
    /// Human mode prints only the summary; notices were already printed as
    /// they happened.
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.view.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl SessionView {
    /// Render the view based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        let name = if self.app_name.is_empty() { "(none)" } else { self.app_name.as_str() };
        println!("App name: {name}");

        println!(
            "Upload:   {} {}",
            state_badge(self.upload_state),
            self.upload_file_name.as_deref().unwrap_or("(no file)")
        );
        if let Some(err) = &self.upload_error {
            println!("          {err}");
        }

        println!(
            "Check:    {} {}",
            state_badge(self.check_state),
            self.check_file_name.as_deref().unwrap_or("(no file)")
        );
        if let Some(err) = &self.check_error {
            println!("          {err}");
        }
        if let Some(name) = &self.checked_file_name {
            println!("          last result: {name}");
        }

        if self.matched_count > 0 {
            println!(
                "\n{}",
                format!("Found {} matching keys", self.matched_count).red().bold()
            );
            for entry in &self.matched_keys {
                println!("  {}  [{}]", entry.key, entry.app_name);
            }
        }

        if !self.artifacts.is_empty() {
            println!();
            for artifact in &self.artifacts {
                match &artifact.location {
                    Some(path) => println!("Saved {} ({} bytes)", path.display(), artifact.size),
                    None => println!("Saved {} ({} bytes)", artifact.name, artifact.size),
                }
            }
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

fn state_badge(state: StateLabel) -> String {
    let label = format!("[{state}]");
    match state {
        StateLabel::Idle => label.dimmed().to_string(),
        StateLabel::Pending => label.yellow().to_string(),
        StateLabel::Succeeded => label.green().to_string(),
        StateLabel::Failed => label.red().to_string(),
    }
}
