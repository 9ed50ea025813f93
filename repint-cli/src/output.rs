//! Output formatting for the CLI.
//!
//! Handles human-readable, table and JSON output formats.

use serde::Serialize;
use serde_json::json;
use tabled::Table;
use tabled::Tabled;

use crate::OutputFormat;

/// Output handler for CLI commands.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Check if JSON output was requested.
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Check if table output was requested.
    pub fn is_table(&self) -> bool {
        self.format == OutputFormat::Table
    }

    /// Print a line to stdout (respects quiet mode).
    pub fn println(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg);
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            match self.format {
                OutputFormat::Json => println!("{}", json!({"type": "info", "message": msg})),
                _ => println!("{}", msg),
            }
        }
    }

    /// Print a warning message (yellow in human format).
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            match self.format {
                OutputFormat::Json => eprintln!("{}", json!({"type": "warning", "message": msg})),
                _ => eprintln!("\x1b[33m{}\x1b[0m", msg),
            }
        }
    }

    /// Print an error message (red in human format, always shown).
    pub fn error(&self, error_type: &str, msg: &str) {
        match self.format {
            OutputFormat::Json => eprintln!(
                "{}",
                json!({"type": "error", "error_type": error_type, "message": msg})
            ),
            _ => eprintln!("\x1b[31merror: {}\x1b[0m", msg),
        }
    }

    /// Print a value as a single JSON document (always shown).
    pub fn json<T: Serialize>(&self, value: &T) {
        match serde_json::to_string(value) {
            Ok(s) => println!("{}", s),
            Err(e) => self.error("json_error", &e.to_string()),
        }
    }

    /// Print rows as a table.
    pub fn table<T: Tabled>(&self, rows: &[T]) {
        if !self.quiet {
            println!("{}", Table::new(rows));
        }
    }
}
