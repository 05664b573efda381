//
//  geoserver-rest
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the `gsrc` CLI:
//!
//! - **Table format**: Human-readable tables for interactive terminal use
//! - **JSON format**: Machine-readable JSON for scripting (`--json`)
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: The available output formats
//! - [`OutputWriter`]: Main entry point for writing formatted output
//! - [`TableOutput`]: Types rendered as a block of fields
//! - [`TableRow`]: Types rendered as one row of a list table
//!
//! ## Example
//!
//! ```rust,ignore
//! use geoserver_rest::output::{OutputWriter, OutputFormat};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write_list(&workspaces)?;
//! writer.write_success("Workspace created");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// The available output formats.
///
/// The default is [`OutputFormat::Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table format with optional color support.
    #[default]
    Table,
    /// Pretty-printed JSON for scripting and automation.
    Json,
}

impl OutputFormat {
    /// Maps the global `--json` switch to a format.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// A unified output writer for both formats.
///
/// Data goes to stdout; warnings go to stderr. Color output is
/// detected from the terminal and disabled when output is piped.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a writer for `format`, with color detected from the terminal.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Writes a single value.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails (only applicable for JSON format).
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value)?,
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    /// Writes a list as a JSON array or as one table with a row per value.
    ///
    /// An empty list prints `empty_message` in table format and `[]` in JSON.
    pub fn write_list<T: Serialize + TableRow>(
        &self,
        values: &[T],
        empty_message: &str,
    ) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&values)?,
            OutputFormat::Table if values.is_empty() => println!("{empty_message}"),
            OutputFormat::Table => list_table(values, self.color).print(),
        }
        Ok(())
    }

    /// Writes an arbitrary JSON document, pretty-printed, in either format.
    pub fn write_raw(&self, value: &serde_json::Value) -> anyhow::Result<()> {
        write_json(value)
    }

    /// Writes a warning message to stderr, prefixed with "warning:".
    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    /// Writes a success message to stdout.
    ///
    /// In JSON mode the message is suppressed so stdout stays parseable.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        match (self.format, self.color) {
            (OutputFormat::Json, _) => {}
            (OutputFormat::Table, true) => println!("{} {}", style("✓").green().bold(), msg),
            (OutputFormat::Table, false) => println!("✓ {}", msg),
        }
    }
}

/// A value rendered as a block of labelled fields.
///
/// # Example
///
/// ```rust,ignore
/// impl TableOutput for Namespace {
///     fn print_table(&self, color: bool) {
///         print_header(&self.prefix);
///         print_field("URI", &self.uri, color);
///     }
/// }
/// ```
pub trait TableOutput {
    fn print_table(&self, color: bool);
}

/// A value rendered as one row of a list table.
pub trait TableRow {
    /// Column headers, shared by every row.
    const HEADERS: &'static [&'static str];

    /// The cells of this row, one per header.
    fn cells(&self, color: bool) -> Vec<String>;
}

/// Builds the table for a list of rows.
pub fn list_table<T: TableRow>(values: &[T], color: bool) -> TableBuilder {
    TableBuilder::new()
        .color(color)
        .headers(T::HEADERS.iter().copied())
        .rows(values.iter().map(|v| v.cells(color)))
}

/// Prints a bold header with a dashed underline.
pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.chars().count()));
}

/// Prints a key-value pair. The key is dimmed when color is enabled.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}
