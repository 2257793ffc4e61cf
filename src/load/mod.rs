//! Loading of delimited text files into a [`Dataset`](../data/struct.Dataset.html).
//!
//! Every line becomes one row, blank lines included. Lines are split on a literal
//! delimiter. There is no header row and no quoting: a `"` is an ordinary
//! character, and a delimiter inside a field can't be told apart from a field
//! separator.

use crate::data::{Dataset, Row};
use csv::{ByteRecord, ReaderBuilder, Terminator, Trim};
use log::{debug, info, trace, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default input file, resolved against the working directory.
pub const DEFAULT_PATH: &str = "bezdekIris.data";

/// Cause of a failed load.
#[derive(Debug, Error)]
pub enum LoadErrorKind {
    /// The file could not be opened.
    #[error("unable to open file")]
    Open(#[source] io::Error),
    /// Reading failed at the given line; rows before it were kept.
    #[error("read failed at line {line}")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },
    /// A line could not be split into fields; rows before it were kept.
    #[error("unable to split line {line}")]
    Split {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// A failed load, together with all rows read before the failure.
///
/// Callers that can live with partial data take it via
/// [`into_partial`](#method.into_partial).
#[derive(Debug, Error)]
#[error("failed to load '{}'", .path.display())]
pub struct LoadError {
    path: PathBuf,
    #[source]
    kind: LoadErrorKind,
    partial: Dataset,
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &Path {
        &self.path
    }
    /// The cause of the failure.
    pub fn kind(&self) -> &LoadErrorKind {
        &self.kind
    }
    /// Rows read before the failure.
    pub fn partial(&self) -> &Dataset {
        &self.partial
    }
    /// Consumes the error, returning the rows read before the failure.
    pub fn into_partial(self) -> Dataset {
        self.partial
    }
}

/// Csv file options
#[derive(Clone, Debug)]
struct CsvOptions {
    delimiter: u8,
}

/// Builder for [`Loader`](struct.Loader.html).
pub struct LoaderBuilder {
    csv_options: CsvOptions,
}

impl Default for LoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoaderBuilder {
    /// Creates a `LoaderBuilder` with default options.
    pub fn new() -> Self {
        LoaderBuilder {
            csv_options: CsvOptions { delimiter: b',' },
        }
    }
    /// Sets the field delimiter. Default ','.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.csv_options.delimiter = delimiter;
        self
    }
    /// Builds the [`Loader`](struct.Loader.html).
    pub fn build(self) -> Loader {
        Loader {
            csv_options: self.csv_options,
        }
    }
}

/// Reads delimited files into datasets.
pub struct Loader {
    csv_options: CsvOptions,
}

impl Loader {
    /// Reads all lines of the file at `path`, one row per line, in file order.
    ///
    /// The file is closed before this returns, on success and on failure.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Dataset, LoadError> {
        let path = path.as_ref();
        debug!("Opening {}", path.display());

        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                return Err(LoadError {
                    path: path.to_path_buf(),
                    kind: LoadErrorKind::Open(err),
                    partial: Dataset::empty(),
                })
            }
        };
        self.read_lines(BufReader::new(file), path)
    }

    /// Reads all lines from an arbitrary reader. `name` is only used for errors and logging.
    pub fn load_reader<R: io::Read>(&self, reader: R, name: &str) -> Result<Dataset, LoadError> {
        self.read_lines(BufReader::new(reader), Path::new(name))
    }

    fn reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(self.csv_options.delimiter)
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::None);
        builder
    }

    fn read_lines<R: BufRead>(&self, mut input: R, path: &Path) -> Result<Dataset, LoadError> {
        let mut dataset = Dataset::empty();
        let mut buffer = Vec::new();
        let mut record = ByteRecord::new();

        loop {
            let line = dataset.nrows() as u64 + 1;
            buffer.clear();
            let result = match input.read_until(b'\n', &mut buffer) {
                Ok(0) => break,
                Ok(_) => self
                    .split_line(strip_terminator(&buffer), &mut record)
                    .map_err(|source| LoadErrorKind::Split { line, source }),
                Err(source) => Err(LoadErrorKind::Read { line, source }),
            };
            match result {
                Ok(row) => {
                    trace!("Row {}: {:?}", dataset.nrows(), row);
                    dataset.push_row(row);
                }
                Err(kind) => {
                    warn!(
                        "Reading {} stopped at line {}, keeping {} rows",
                        path.display(),
                        line,
                        dataset.nrows()
                    );
                    return Err(LoadError {
                        path: path.to_path_buf(),
                        kind,
                        partial: dataset,
                    });
                }
            }
        }

        info!("Read {} rows from {}", dataset.nrows(), path.display());
        Ok(dataset)
    }

    /// Splits a single line, without terminator. An empty line is a row with one empty field.
    fn split_line(&self, line: &[u8], record: &mut ByteRecord) -> Result<Row, csv::Error> {
        if line.is_empty() {
            return Ok(Row::new(vec![String::new()]));
        }
        let mut reader = self
            .reader_builder()
            .buffer_capacity(line.len())
            .from_reader(line);
        reader.read_byte_record(record)?;
        Ok(Row::from(&*record))
    }
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Loads a comma-separated file with default options.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset, LoadError> {
    LoaderBuilder::new().build().load(path)
}
