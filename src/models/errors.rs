use serde::Serialize;
use thiserror::Error;

use crate::types::{DateError, FileType};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("The file is empty.")]
    EmptyInput,
    #[error("The file type is unknown.")]
    UnknownSchema,
    #[error("The {file_type} file needs a header line and at least one data line")]
    TooFewLines {
        file_type: FileType
    },
    #[error("No. of values [{values}] don't match no. of headers [{headers}] on line [{line}]")]
    SchemaMismatch {
        line: u64,
        values: usize,
        headers: usize
    },
    #[error("Invalid timestamp on line [{line}]: {source}")]
    MalformedDate {
        line: u64,
        #[source]
        source: DateError
    },
    #[error("CSV read error: {0}")]
    MalformedCsv(#[from] csv::Error)
}

/// Machine-readable counterpart of [`ParseError`], exposed in the result envelope.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyInput,
    UnknownSchema,
    TooFewLines,
    SchemaMismatch,
    MalformedDate,
    MalformedCsv
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::EmptyInput => ErrorKind::EmptyInput,
            ParseError::UnknownSchema => ErrorKind::UnknownSchema,
            ParseError::TooFewLines { .. } => ErrorKind::TooFewLines,
            ParseError::SchemaMismatch { .. } => ErrorKind::SchemaMismatch,
            ParseError::MalformedDate { .. } => ErrorKind::MalformedDate,
            ParseError::MalformedCsv(_) => ErrorKind::MalformedCsv
        }
    }
}
