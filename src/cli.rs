//! Command-line interface for dataset previews.
use crate::load::DEFAULT_PATH;
use crate::preview::{OutputFormat, DEFAULT_PREVIEW_ROWS};
use crate::ParseEnumError;
use structopt::StructOpt;
use thiserror::Error;

/// Raw command line arguments.
#[derive(StructOpt, Debug)]
#[structopt(name = "Dataset preview command line application")]
pub struct Cli {
    /// Path to the data file. Optional, default: 'bezdekIris.data'.
    #[structopt(short, long)]
    file: Option<String>,
    /// Number of rows to preview. Optional, default: '5'.
    #[structopt(short, long)]
    rows: Option<usize>,
    /// Field delimiter, a single ASCII character or 'tab'. Optional, default: ','.
    #[structopt(short, long)]
    delimiter: Option<String>,
    /// Output format (table|json). Optional, default: 'table'.
    #[structopt(long)]
    format: Option<String>,
}

/// Error type for invalid command line arguments.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Not a delimiter: '{0}'. Must be a single ASCII character or 'tab'")]
    Delimiter(String),
    #[error(transparent)]
    Format(#[from] ParseEnumError),
}

/// Parsed command line arguments.
#[derive(Debug, PartialEq)]
pub struct CliParsed {
    pub file: String,
    pub rows: usize,
    pub delimiter: u8,
    pub format: OutputFormat,
}

impl CliParsed {
    /// Parse arguments from a [`Cli`](struct.Cli.html).
    pub fn from_cli(cli: Cli) -> Result<Self, CliError> {
        Ok(CliParsed {
            file: cli.file.unwrap_or_else(|| DEFAULT_PATH.to_string()),
            rows: cli.rows.unwrap_or(DEFAULT_PREVIEW_ROWS),
            delimiter: match &cli.delimiter {
                Some(d) => Self::parse_delimiter(d)?,
                None => b',',
            },
            format: match &cli.format {
                Some(f) => f.parse()?,
                None => OutputFormat::Table,
            },
        })
    }

    fn parse_delimiter(value: &str) -> Result<u8, CliError> {
        match value.as_bytes() {
            b"tab" | b"\\t" => Ok(b'\t'),
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(CliError::Delimiter(value.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::cli::{Cli, CliError, CliParsed};
    use crate::preview::OutputFormat;
    use structopt::StructOpt;

    fn parse(args: &[&str]) -> Result<CliParsed, CliError> {
        CliParsed::from_cli(Cli::from_iter(args))
    }

    #[test]
    fn defaults() {
        let parsed = parse(&["datapeek"]).unwrap();

        assert_eq!(
            parsed,
            CliParsed {
                file: "bezdekIris.data".to_string(),
                rows: 5,
                delimiter: b',',
                format: OutputFormat::Table,
            }
        );
    }

    #[test]
    fn all_options() {
        let parsed = parse(&[
            "datapeek", "-f", "iris.csv", "-r", "3", "-d", ";", "--format", "json",
        ])
        .unwrap();

        assert_eq!(parsed.file, "iris.csv");
        assert_eq!(parsed.rows, 3);
        assert_eq!(parsed.delimiter, b';');
        assert_eq!(parsed.format, OutputFormat::Json);
    }

    #[test]
    fn tab_delimiter() {
        assert_eq!(parse(&["datapeek", "-d", "tab"]).unwrap().delimiter, b'\t');
    }

    #[test]
    fn invalid_delimiter() {
        assert!(matches!(
            parse(&["datapeek", "--delimiter", ";;"]),
            Err(CliError::Delimiter(_))
        ));
        assert!(matches!(
            parse(&["datapeek", "--delimiter", "é"]),
            Err(CliError::Delimiter(_))
        ));
    }

    #[test]
    fn invalid_format() {
        assert!(matches!(
            parse(&["datapeek", "--format", "xml"]),
            Err(CliError::Format(_))
        ));
    }
}
