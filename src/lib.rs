//! Loading of comma-separated datasets and fixed-width previews of their first rows.
//!
//! ```no_run
//! let data = datapeek::load("bezdekIris.data").unwrap();
//! datapeek::print_preview(&data).unwrap();
//! ```

pub mod cli;
pub mod data;
pub mod load;
pub mod preview;

pub use data::{Dataset, Row};
pub use load::{load, LoadError};
pub use preview::print_preview;

use core::fmt;
use std::error::Error;

/// Error type for failed parsing of `String`s to `enum`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError(String);

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for ParseEnumError {}

/// Formats an error with all its sources, separated by `": "`.
pub fn error_chain(err: &dyn Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
