mod errors;
mod numeric;

use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use serde::Serialize;

pub use errors::DateError;
pub use numeric::{coerce_number, signed_number};

/// Local wall-clock time of a transaction, as written in the export.
pub type Timestamp = NaiveDateTime;

/// The two export layouts the parser understands.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Order,
    Wallet
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Order => "order",
            FileType::Wallet => "wallet"
        }
    }
}

impl Display for FileType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// What to do with a `timestamp` value that is not a valid `DD-MM-YYYY hh:mm` string.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum DatePolicy {
    /// Log the failure and use the current local time instead.
    #[default]
    Fallback,
    /// Fail the row, and with it the whole parse.
    Strict
}
