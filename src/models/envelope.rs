use serde::Serialize;

use crate::models::{ErrorKind, OrderRecord, ParseError, WalletRecord};
use crate::types::FileType;

/// Records of a successfully parsed file, in file order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Records {
    Order(Vec<OrderRecord>),
    Wallet(Vec<WalletRecord>)
}

impl Records {
    pub fn file_type(&self) -> FileType {
        match self {
            Records::Order(_) => FileType::Order,
            Records::Wallet(_) => FileType::Wallet
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Records::Order(records) => records.len(),
            Records::Wallet(records) => records.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The uniform outcome handed back to the presentation layer.
///
/// Serializes as `{ "status": "success" | "error", "message", ... }`. Both variants
/// carry a displayable message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ParseResult {
    Success {
        message: String,
        #[serde(rename = "fileType")]
        file_type: FileType,
        data: Records
    },
    Error {
        message: String,
        kind: ErrorKind
    }
}

impl ParseResult {
    pub fn success(data: Records) -> Self {
        let file_type = data.file_type();

        Self::Success {
            message: format!("{file_type} file parsed successfully."),
            file_type,
            data
        }
    }

    /// Builds the error envelope for a failure while parsing a file of a known type.
    pub fn parse_failure(file_type: FileType, error: &ParseError) -> Self {
        Self::Error {
            message: format!("Error while parsing {file_type} file."),
            kind: error.kind()
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ParseResult::Success { message, .. } => message,
            ParseResult::Error { message, .. } => message
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    pub fn data(&self) -> Option<&Records> {
        match self {
            ParseResult::Success { data, .. } => Some(data),
            ParseResult::Error { .. } => None
        }
    }
}

impl From<ParseError> for ParseResult {
    fn from(error: ParseError) -> Self {
        Self::Error {
            message: error.to_string(),
            kind: error.kind()
        }
    }
}
