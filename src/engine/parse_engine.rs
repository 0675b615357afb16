use tracing::{error, info};

use crate::models::{OrderRecord, ParseError, ParseResult, Records, WalletRecord};
use crate::parser::{classify, extract};
use crate::types::{DatePolicy, FileType};

/// Entry point of the parsing core: turns the text of one export into a [`ParseResult`].
#[derive(Debug, Clone, Default)]
pub struct ParseEngine {
    date_policy: DatePolicy
}

impl ParseEngine {
    /// Creates an engine that falls back to the current time on unreadable dates.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date_policy(mut self, date_policy: DatePolicy) -> Self {
        self.date_policy = date_policy;
        self
    }

    /// Classifies `text`, extracts its records and wraps the outcome in an envelope.
    ///
    /// Never fails: every error ends up in the returned envelope.
    pub fn parse(&self, text: &str) -> ParseResult {
        if text.is_empty() {
            return ParseError::EmptyInput.into();
        }

        let Some(file_type) = classify(text) else {
            return ParseError::UnknownSchema.into();
        };

        match self.extract(file_type, text) {
            Ok(data) => {
                info!("Parsed {} {file_type} records", data.len());
                ParseResult::success(data)
            }
            Err(error) => {
                error!("Error while parsing {file_type} file: {error}");
                ParseResult::parse_failure(file_type, &error)
            }
        }
    }

    fn extract(&self, file_type: FileType, text: &str) -> Result<Records, ParseError> {
        match file_type {
            FileType::Order => extract::<OrderRecord>(text, self.date_policy).map(Records::Order),
            FileType::Wallet => extract::<WalletRecord>(text, self.date_policy).map(Records::Wallet)
        }
    }
}

/// Parses `text` with the default engine.
pub fn parse_csv(text: &str) -> ParseResult {
    ParseEngine::new().parse(text)
}
