use csv::{ReaderBuilder, Terminator};
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::models::ParseError;
use crate::parser::dates::{parse_date, parse_date_or_now};
use crate::parser::headers::friendly_name;
use crate::types::{DatePolicy, FileType, Timestamp};

const TIMESTAMP_FIELD: &str = "timestamp";

/// A record layout that can be built from one aligned CSV row.
pub trait Schema: Sized {
    const FILE_TYPE: FileType;
    /// Normalized header names dropped before any coercion happens.
    const IGNORED_FIELDS: &'static [&'static str];

    fn from_row(row: Row, timestamp: Timestamp) -> Self;
}

/// Raw values of one data line, keyed by normalized header name, in header order.
#[derive(Debug, Default)]
pub struct Row {
    fields: Vec<(String, String)>
}

impl Row {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn take(&mut self, field: &str) -> Option<String> {
        let index = self.fields.iter().position(|(name, _)| name == field)?;
        Some(self.fields.remove(index).1)
    }

    /// Whatever was not taken by the schema, still in header order.
    pub fn into_extra(self) -> Map<String, Value> {
        self.fields.into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect()
    }

    /// A repeated header keeps its first position but takes the later value.
    fn insert(&mut self, field: &str, value: &str) {
        match self.fields.iter_mut().find(|(name, _)| name == field) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.fields.push((field.to_string(), value.to_string()))
        }
    }
}

/// Extracts every data line of `text` as a record of schema `S`.
///
/// The header is always the first line of `text`, even when it is blank. Lines end
/// at `\n` or `\r\n` and are split on bare commas, with no quoting; a lone `\r` stays
/// part of the value. Lines holding a single value are skipped. The first line whose
/// width differs from the header aborts the whole extraction, so either every row is
/// returned or none is.
pub fn extract<S: Schema>(text: &str, policy: DatePolicy) -> Result<Vec<S>, ParseError> {
    let Some((header_line, body)) = text.split_once('\n') else {
        return Err(ParseError::TooFewLines { file_type: S::FILE_TYPE });
    };

    let headers: Vec<String> = strip_carriage_return(header_line)
        .split(',')
        .map(friendly_name)
        .collect();

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(body.as_bytes());

    let mut records = Vec::new();

    for result in reader.records() {
        let record = result?;
        // The header line was split off before the reader saw the text.
        let line = record.position().map(|position| position.line()).unwrap_or_default() + 1;

        let mut values: Vec<&str> = record.iter().collect();

        if let Some(last) = values.last_mut() {
            *last = strip_carriage_return(*last);
        }

        if values.len() <= 1 {
            debug!("Skipping line [{line}] with a single value");
            continue;
        }

        if values.len() != headers.len() {
            error!("No. of values [{}] don't match no. of headers [{}] on line [{line}]", values.len(), headers.len());
            return Err(ParseError::SchemaMismatch { line, values: values.len(), headers: headers.len() });
        }

        let mut row = Row::default();

        for (header, value) in headers.iter().zip(values) {
            if !S::IGNORED_FIELDS.contains(&header.as_str()) {
                row.insert(header, value);
            }
        }

        let raw_timestamp = row.take(TIMESTAMP_FIELD);
        let timestamp = match policy {
            DatePolicy::Fallback => parse_date_or_now(raw_timestamp.as_deref()),
            DatePolicy::Strict => parse_date(raw_timestamp.as_deref())
                .map_err(|source| ParseError::MalformedDate { line, source })?
        };

        debug!("Extracted {} row on line [{line}]", S::FILE_TYPE);
        records.push(S::from_row(row, timestamp));
    }

    Ok(records)
}

fn strip_carriage_return(value: &str) -> &str {
    value.strip_suffix('\r').unwrap_or(value)
}
