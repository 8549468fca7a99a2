//! Output formatting for the SyncFlow CLI.
//!
//! The CLI prints every payload either as JSON (optionally pretty-printed)
//! or as a plain-text table. Response models implement [`Formattable`]
//! through the [`TextRecordProducer`] trait defined here.

use serde::Serialize;
use std::str::FromStr;
use strum::EnumIter;

pub const JSON: &str = "json";
pub const TEXT: &str = "text";

/// Error types that can occur during formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    /// Error when an unsupported output format is requested
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),
    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct OutputFormatOptions {
    pub pretty: bool,
}

/// Enum representing the supported output formats
#[derive(Debug, Clone, PartialEq, PartialOrd, EnumIter)]
pub enum OutputFormat {
    /// JSON (JavaScript Object Notation) format
    Json(OutputFormatOptions),
    /// Plain-text table format
    Text,
}

impl OutputFormat {
    /// Returns a vector of all supported format names as strings
    pub fn names() -> Vec<&'static str> {
        vec![JSON, TEXT]
    }

    pub fn from_string_with_options(
        format_str: &str,
        options: OutputFormatOptions,
    ) -> Result<OutputFormat, FormattingError> {
        let normalized_format = format_str.to_lowercase();
        match normalized_format.as_str() {
            JSON => Ok(OutputFormat::Json(options)),
            TEXT => Ok(OutputFormat::Text),
            _ => Err(FormattingError::UnsupportedOutputFormat(normalized_format)),
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Json(_) => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormattingError;

    fn from_str(format_str: &str) -> Result<OutputFormat, FormattingError> {
        Self::from_string_with_options(format_str, OutputFormatOptions::default())
    }
}

/// Trait for producing plain-text table records from data
pub trait TextRecordProducer {
    /// Returns the header row for the text output
    fn text_header() -> Vec<&'static str>;

    /// Converts the data into table records
    fn as_text_records(&self) -> Vec<Vec<String>>;
}

/// Trait for formatting data in any of the supported output formats
pub trait Formattable {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError>;
}

/// Serialize a value as JSON, honoring the pretty option
pub fn to_json<T: Serialize>(
    value: &T,
    options: &OutputFormatOptions,
) -> Result<String, FormattingError> {
    if options.pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

/// Render a header row plus records as a column-aligned table
pub fn to_text_table(header: &[&str], records: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for record in records {
        for (i, cell) in record.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    render_row(&mut out, &widths, header.iter().map(|h| h.to_string()));
    for record in records {
        render_row(&mut out, &widths, record.iter().cloned());
    }
    out
}

fn render_row(out: &mut String, widths: &[usize], cells: impl Iterator<Item = String>) {
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&cell);
        // no trailing padding on the last column
        if i + 1 < widths.len() {
            for _ in cell.len()..widths[i] {
                out.push(' ');
            }
        }
    }
    out.push('\n');
}

/// Blanket list formatter: any record-producing model can be printed as a
/// JSON array or a multi-row table.
impl<T> Formattable for Vec<T>
where
    T: TextRecordProducer + Serialize,
{
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Json(options) => to_json(self, options),
            OutputFormat::Text => {
                let records: Vec<Vec<String>> =
                    self.iter().flat_map(|item| item.as_text_records()).collect();
                Ok(to_text_table(&T::text_header(), &records))
            }
        }
    }
}

/// Raw JSON payloads (e.g. LiveKit session info) have no table shape; text
/// output falls back to pretty JSON.
impl Formattable for serde_json::Value {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Json(options) => to_json(self, options),
            OutputFormat::Text => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!(
            OutputFormat::from_str("json").unwrap(),
            OutputFormat::Json(OutputFormatOptions::default())
        );
        assert_eq!(OutputFormat::from_str("TEXT").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_str("csv").is_err());
    }

    #[test]
    fn text_table_aligns_columns() {
        let header = vec!["ID", "NAME"];
        let records = vec![
            vec!["s1".to_string(), "Demo".to_string()],
            vec!["session-2".to_string(), "X".to_string()],
        ];
        let table = to_text_table(&header, &records);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("s1        "));
        assert!(lines[2].starts_with("session-2"));
    }
}
