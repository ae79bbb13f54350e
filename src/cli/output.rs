use crate::error::Result;
use crate::{FileReport, Misspelling};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonFile<'a> {
    file: String,
    errors: &'a [Misspelling],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn write_opening<W: Write>(out: &mut W, path: &Path, colored_output: bool) -> io::Result<()> {
    let path = path.display().to_string();
    if colored_output {
        writeln!(out, "Opening file: {}", path.bold())
    } else {
        writeln!(out, "Opening file: {}", path)
    }
}

/// Write the outcome for one file in the plain report format.
///
/// Read failures go to `err`; the caller carries on with the next file.
pub fn write_text_result<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    path: &Path,
    result: &Result<FileReport>,
    colored_output: bool,
) -> io::Result<()> {
    write_opening(out, path, colored_output)?;

    let report = match result {
        Ok(report) => report,
        Err(failure) => return writeln!(err, "{}", failure),
    };

    let file_name = path.display().to_string();
    for error in &report.misspellings {
        if colored_output {
            writeln!(
                out,
                "{} ({},{}): {}",
                file_name,
                error.line.to_string().blue(),
                error.column.to_string().blue(),
                error.word.red().bold()
            )?;
        } else {
            writeln!(out, "{} ({},{}): {}", file_name, error.line, error.column, error.word)?;
        }
    }

    if !report.has_errors() {
        let message = format!("No spelling errors found in file: {}", file_name);
        if colored_output {
            writeln!(out, "{}", message.green())?;
        } else {
            writeln!(out, "{}", message)?;
        }
    }

    Ok(())
}

/// Print one file's outcome to stdout and stderr.
pub fn print_text_result(
    path: &Path,
    result: &Result<FileReport>,
    colored_output: bool,
) -> io::Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    write_text_result(
        &mut stdout.lock(),
        &mut stderr.lock(),
        path,
        result,
        colored_output,
    )
}

/// Render all results as one JSON array, in file-list order.
pub fn render_json(results: &[(PathBuf, Result<FileReport>)]) -> serde_json::Result<String> {
    let files: Vec<JsonFile<'_>> = results
        .iter()
        .map(|(path, result)| match result {
            Ok(report) => JsonFile {
                file: path.display().to_string(),
                errors: &report.misspellings,
                error: None,
            },
            Err(err) => JsonFile {
                file: path.display().to_string(),
                errors: &[],
                error: Some(err.to_string()),
            },
        })
        .collect();

    serde_json::to_string_pretty(&files)
}
