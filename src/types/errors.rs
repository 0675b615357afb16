use thiserror::Error;

#[derive(Debug, Error)]
pub enum DateError {
    #[error("Date error: value is missing")]
    Missing,
    #[error("Date error: [{value}] has {length} characters, expected 16")]
    InvalidLength {
        value: String,
        length: usize
    },
    #[error("Date error: [{value}] is not a valid DD-MM-YYYY hh:mm date")]
    InvalidFormat {
        value: String,
        #[source]
        source: chrono::ParseError
    }
}
