//! Fixed-width console preview of a dataset's first rows.

use crate::data::{Dataset, Row};
use crate::ParseEnumError;
use log::debug;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;

/// Default number of previewed rows.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;
/// Default number of dashes below the header.
pub const DEFAULT_SEPARATOR_LEN: usize = 75;
/// Default text between two cells.
pub const DEFAULT_GAP: &str = " ";

/// Error type for previews that can't be produced.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("insufficient rows: preview needs {required}, dataset has {available}")]
    InsufficientRows { required: usize, available: usize },
    #[error(
        "insufficient columns in row {row}: preview needs {required} fields, row has {available}"
    )]
    InsufficientColumns {
        row: usize,
        required: usize,
        available: usize,
    },
    #[error("unable to serialize preview")]
    Json(#[from] serde_json::Error),
    #[error("unable to write preview")]
    Io(#[from] io::Error),
}

/// A labelled, left-justified output column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    label: String,
    width: usize,
}

impl Column {
    pub fn new(label: &str, width: usize) -> Self {
        Column {
            label: label.to_string(),
            width,
        }
    }
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn width(&self) -> usize {
        self.width
    }

    /// The columns of the Iris dataset: four measurements and the class label.
    pub fn iris() -> Vec<Column> {
        vec![
            Column::new("sepal_length", 15),
            Column::new("sepal_width", 15),
            Column::new("petal_length", 15),
            Column::new("petal_width", 15),
            Column::new("class", 20),
        ]
    }
}

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-width text table.
    Table,
    /// Array of JSON objects, keyed by column label.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ParseEnumError;
    /// Parse a string to an `OutputFormat`.
    ///
    /// Accepts `"table" | "json"`.
    fn from_str(str: &str) -> Result<Self, Self::Err> {
        match str {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseEnumError(format!(
                "Not an output format: {}. Must be one of (table|json)",
                str
            ))),
        }
    }
}

/// Builder for [`Preview`](struct.Preview.html).
pub struct PreviewBuilder {
    columns: Vec<Column>,
    rows: usize,
    separator_len: usize,
    gap: String,
    format: OutputFormat,
}

impl Default for PreviewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewBuilder {
    /// Creates a `PreviewBuilder` for the Iris columns, 5 rows and a table.
    pub fn new() -> Self {
        PreviewBuilder {
            columns: Column::iris(),
            rows: DEFAULT_PREVIEW_ROWS,
            separator_len: DEFAULT_SEPARATOR_LEN,
            gap: DEFAULT_GAP.to_string(),
            format: OutputFormat::Table,
        }
    }
    /// Sets the columns. Fields are taken positionally, one per column.
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }
    /// Sets the number of previewed rows. Default 5.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }
    /// Sets the length of the dash line below the header. Default 75.
    pub fn with_separator_len(mut self, len: usize) -> Self {
        self.separator_len = len;
        self
    }
    /// Sets the text between two cells of a table line. Default one space.
    pub fn with_gap(mut self, gap: &str) -> Self {
        self.gap = gap.to_string();
        self
    }
    /// Sets the output format. Default table.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
    pub fn build(self) -> Preview {
        Preview {
            columns: self.columns,
            rows: self.rows,
            separator_len: self.separator_len,
            gap: self.gap,
            format: self.format,
        }
    }
}

/// Formats the head of a dataset.
#[derive(Debug, Clone)]
pub struct Preview {
    columns: Vec<Column>,
    rows: usize,
    separator_len: usize,
    gap: String,
    format: OutputFormat,
}

impl Preview {
    /// Returns the rows to preview, or an error if the dataset has too few rows,
    /// or one of them has too few fields.
    pub fn validate<'a>(&self, data: &'a Dataset) -> Result<&'a [Row], PreviewError> {
        if data.nrows() < self.rows {
            return Err(PreviewError::InsufficientRows {
                required: self.rows,
                available: data.nrows(),
            });
        }
        let head = data.head(self.rows);
        let required = self.columns.len();
        if let Some((row, short)) = head.iter().enumerate().find(|(_, r)| r.len() < required) {
            return Err(PreviewError::InsufficientColumns {
                row,
                required,
                available: short.len(),
            });
        }
        Ok(head)
    }

    /// Renders the preview to a string. Nothing is rendered if validation fails.
    pub fn render(&self, data: &Dataset) -> Result<String, PreviewError> {
        let head = self.validate(data)?;
        debug!("Rendering {} rows as {:?}", head.len(), self.format);

        match self.format {
            OutputFormat::Table => Ok(self.render_table(head)),
            OutputFormat::Json => self.render_json(head),
        }
    }

    /// Writes the preview. Validation happens before anything is written.
    pub fn write_to<W: Write>(&self, data: &Dataset, out: &mut W) -> Result<(), PreviewError> {
        let text = self.render(data)?;
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Writes the preview to standard output.
    pub fn print(&self, data: &Dataset) -> Result<(), PreviewError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(data, &mut out)
    }

    fn render_table(&self, head: &[Row]) -> String {
        let mut text = self.format_line(self.columns.iter().map(|c| c.label()));
        text.push_str(&"-".repeat(self.separator_len));
        text.push('\n');
        for row in head {
            text.push_str(&self.format_line(row.iter().map(|f| &**f)));
        }
        text
    }

    fn format_line<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        let mut line = String::new();
        for (i, (col, cell)) in self.columns.iter().zip(cells).enumerate() {
            if i > 0 {
                line.push_str(&self.gap);
            }
            line.push_str(&format!("{:<width$}", cell, width = col.width()));
        }
        line.push('\n');
        line
    }

    fn render_json(&self, head: &[Row]) -> Result<String, PreviewError> {
        let records: Vec<_> = head
            .iter()
            .map(|row| Record {
                columns: &self.columns,
                row,
            })
            .collect();
        let mut text = serde_json::to_string_pretty(&records)?;
        text.push('\n');
        Ok(text)
    }
}

/// A row serialized as a map from column label to field, in column order.
struct Record<'a> {
    columns: &'a [Column],
    row: &'a Row,
}

impl<'a> Serialize for Record<'a> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (col, field) in self.columns.iter().zip(self.row.iter()) {
            map.serialize_entry(col.label(), field)?;
        }
        map.end()
    }
}

/// Prints the default preview (Iris columns, 5 rows) to standard output.
pub fn print_preview(data: &Dataset) -> Result<(), PreviewError> {
    PreviewBuilder::new().build().print(data)
}
