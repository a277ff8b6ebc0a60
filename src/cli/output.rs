//! Output formatting module for Playwright
//!
//! Provides colored human output and a JSON mode that prints one document
//! per event.

use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

/// Output formatter for different output modes
pub struct OutputFormatter {
    /// Use colored output
    use_color: bool,
    /// JSON output mode
    json_mode: bool,
    /// Verbosity level
    verbosity: u8,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(use_color: bool, json_mode: bool, verbosity: u8) -> Self {
        // Respect NO_COLOR environment variable
        let use_color = use_color && std::env::var("NO_COLOR").is_err();

        Self {
            use_color,
            json_mode,
            verbosity,
        }
    }

    /// Whether JSON output is active
    pub fn is_json(&self) -> bool {
        self.json_mode
    }

    /// Print a labelled value (always shows, bypasses verbosity)
    pub fn field(&self, label: &str, value: &str) {
        if self.json_mode {
            self.emit(&serde_json::json!({
                "type": "field",
                "label": label,
                "value": value
            }));
            return;
        }

        if self.use_color {
            println!("{} {}", format!("{}:", label).bright_white().bold(), value);
        } else {
            println!("{}: {}", label, value);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.json_mode {
            let err = serde_json::json!({
                "type": "error",
                "message": message
            });
            eprintln!("{}", err);
            return;
        }

        if self.use_color {
            eprintln!("{} {}", "ERROR:".red().bold(), message);
        } else {
            eprintln!("ERROR: {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.json_mode {
            let warn = serde_json::json!({
                "type": "warning",
                "message": message
            });
            eprintln!("{}", warn);
            return;
        }

        if self.use_color {
            eprintln!("{} {}", "WARNING:".yellow().bold(), message);
        } else {
            eprintln!("WARNING: {}", message);
        }
    }

    /// Print an info message (respects verbosity)
    pub fn info(&self, message: &str) {
        if self.verbosity < 1 {
            return;
        }

        if self.json_mode {
            self.emit(&serde_json::json!({
                "type": "info",
                "message": message
            }));
            return;
        }

        if self.use_color {
            println!("{} {}", "INFO:".blue(), message);
        } else {
            println!("INFO: {}", message);
        }
    }

    /// Print a debug message (requires higher verbosity)
    pub fn debug(&self, message: &str) {
        if self.verbosity < 2 {
            return;
        }

        if self.json_mode {
            self.emit(&serde_json::json!({
                "type": "debug",
                "message": message
            }));
            return;
        }

        if self.use_color {
            println!("{} {}", "DEBUG:".magenta(), message);
        } else {
            println!("DEBUG: {}", message);
        }
    }

    /// Print a list of items
    pub fn list(&self, title: &str, items: &[String]) {
        if self.json_mode {
            self.emit(&serde_json::json!({
                "type": "list",
                "title": title,
                "items": items
            }));
            return;
        }

        if self.use_color {
            println!("\n{}:", title.bright_white().bold());
        } else {
            println!("\n{}:", title);
        }

        for item in items {
            if self.use_color {
                println!("  {} {}", "-".bright_black(), item);
            } else {
                println!("  - {}", item);
            }
        }
    }

    /// Print a serializable result as a JSON document (JSON mode only)
    pub fn result<T: Serialize>(&self, kind: &str, value: &T) {
        if !self.json_mode {
            return;
        }

        match serde_json::to_value(value) {
            Ok(data) => self.emit(&serde_json::json!({
                "type": kind,
                "data": data
            })),
            Err(e) => self.error(&format!("Failed to serialize {}: {}", kind, e)),
        }
    }

    /// Flush stdout
    pub fn flush(&self) {
        let _ = io::stdout().flush();
    }

    fn emit(&self, value: &serde_json::Value) {
        println!("{}", value);
    }
}
