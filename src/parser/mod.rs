mod classifier;
mod dates;
mod extractor;
mod headers;

pub use classifier::{classify, ORDER_MARKER, WALLET_MARKER};
pub use dates::{parse_date, parse_date_or_now};
pub use extractor::{extract, Row, Schema};
pub use headers::friendly_name;
