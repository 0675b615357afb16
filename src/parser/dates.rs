use chrono::{Local, NaiveDateTime};
use tracing::error;

use crate::types::{DateError, Timestamp};

const DATE_LENGTH: usize = 16;
const AMERICAN_FORMAT: &str = "%m-%d-%Y %H:%M";

/// Parses an export date written as `DD-MM-YYYY hh:mm`.
///
/// Day and month are swapped into `MM-DD-YYYY hh:mm` before parsing. Length is
/// counted in characters, not bytes.
pub fn parse_date(raw: Option<&str>) -> Result<Timestamp, DateError> {
    let value = raw.ok_or(DateError::Missing)?;
    let chars: Vec<char> = value.chars().collect();

    if chars.len() != DATE_LENGTH {
        return Err(DateError::InvalidLength { value: value.to_string(), length: chars.len() });
    }

    let day: String = chars[0..2].iter().collect();
    let month: String = chars[3..5].iter().collect();
    let rest: String = chars[5..].iter().collect();
    let american = format!("{month}-{day}{rest}");

    NaiveDateTime::parse_from_str(&american, AMERICAN_FORMAT)
        .map_err(|source| DateError::InvalidFormat { value: value.to_string(), source })
}

/// Same as [`parse_date`], but logs the failure and returns the current local time
/// instead of an error.
pub fn parse_date_or_now(raw: Option<&str>) -> Timestamp {
    //NOTE: Missing and wrong-length values are the classic "now" fallback. A 16-character value that
    //      is not a real date also lands here, where browser parsing would have produced an invalid date.
    parse_date(raw).unwrap_or_else(|error| {
        error!("Error casting {raw:?} to date: {error}");
        Local::now().naive_local()
    })
}
