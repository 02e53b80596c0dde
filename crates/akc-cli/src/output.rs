//! Output formatting utilities.

use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex};

use akc_client::record::value_text;
use akc_client::Record;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use tabled::settings::{Panel, Style};
use tabled::{Table, Tabled};

use crate::CliResult;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

/// A table row built from an API record.
pub trait Row: Tabled {
    /// Extracts the row's columns. Missing values become empty strings.
    fn from_record(record: &Record) -> Self;
}

/// Where command output goes.
pub struct Console {
    sink: Box<dyn Write + Send>,
    color: bool,
}

impl Console {
    /// Console on standard output, coloured when attached to a terminal.
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let color = stdout.is_terminal();
        Self {
            sink: Box::new(stdout),
            color,
        }
    }

    /// Console writing into an in-memory buffer, without colour.
    pub fn capture() -> (Self, Captured) {
        let captured = Captured::default();
        let console = Self {
            sink: Box::new(captured.clone()),
            color: false,
        };
        (console, captured)
    }

    /// Writes one line verbatim.
    pub fn line(&mut self, text: &str) {
        // A closed stdout (e.g. piped into `head`) is not worth failing over.
        let _ = writeln!(self.sink, "{text}");
        let _ = self.sink.flush();
    }

    /// Writes text without adding a newline.
    pub fn raw(&mut self, text: &str) {
        let _ = write!(self.sink, "{text}");
        let _ = self.sink.flush();
    }

    /// Prints a success message.
    pub fn success(&mut self, message: &str) {
        let text = self.paint(message, |m| m.green().bold().to_string());
        self.line(&text);
    }

    /// Prints a warning message.
    pub fn warning(&mut self, message: &str) {
        let text = self.paint(message, |m| m.yellow().bold().to_string());
        self.line(&text);
    }

    /// Prints an error message.
    pub fn error(&mut self, message: &str) {
        let text = self.paint(message, |m| m.red().bold().to_string());
        self.line(&text);
    }

    /// Prints an info message.
    pub fn info(&mut self, message: &str) {
        let text = self.paint(message, |m| m.blue().to_string());
        self.line(&text);
    }

    /// Outputs a list of records as a titled table or a JSON array.
    pub fn list<R: Row>(
        &mut self,
        title: &str,
        records: &[Record],
        format: OutputFormat,
    ) -> CliResult<()> {
        match format {
            OutputFormat::Table => {
                if records.is_empty() {
                    self.info("No results found.");
                } else {
                    let rows: Vec<R> = records.iter().map(R::from_record).collect();
                    let table = Table::new(&rows)
                        .with(Style::rounded())
                        .with(Panel::header(title))
                        .to_string();
                    self.line(&table);
                }
            }
            OutputFormat::Json => self.json(records)?,
        }
        Ok(())
    }

    /// Outputs any serializable value as pretty JSON.
    pub fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> CliResult<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.line(&json);
        Ok(())
    }

    /// Outputs a single record as a field map or as JSON.
    pub fn record(&mut self, record: &Record, format: OutputFormat) -> CliResult<()> {
        match format {
            OutputFormat::Table => {
                let mut text = String::new();
                write_field_map(&mut text, &Value::Object(record.clone()), 0);
                self.raw(&text);
            }
            OutputFormat::Json => self.json(record)?,
        }
        Ok(())
    }

    fn paint(&self, message: &str, style: impl Fn(&str) -> String) -> String {
        if self.color {
            style(message)
        } else {
            message.to_string()
        }
    }
}

/// Shared buffer behind [`Console::capture`].
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.0
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }
}

impl Write for Captured {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self
            .0
            .lock()
            .map_err(|_| io::Error::other("capture buffer poisoned"))?;
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Renders a JSON value as indented `key: value` lines.
fn write_field_map(out: &mut String, value: &Value, indent: usize) {
    let prefix = "  ".repeat(indent);

    match value {
        Value::Object(map) => {
            for (key, val) in map {
                if is_nested(val) {
                    out.push_str(&format!("{prefix}{key}:\n"));
                    write_field_map(out, val, indent + 1);
                } else {
                    out.push_str(&format!("{prefix}{key}: {}\n", value_text(val)));
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                if is_nested(item) {
                    out.push_str(&format!("{prefix}-\n"));
                    write_field_map(out, item, indent + 1);
                } else {
                    out.push_str(&format!("{prefix}- {}\n", value_text(item)));
                }
            }
        }
        scalar => out.push_str(&format!("{prefix}{}\n", value_text(scalar))),
    }
}

/// Non-empty containers get their own block.
fn is_nested(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}
