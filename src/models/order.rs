use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::OrderSide;
use crate::parser::{Row, Schema};
use crate::types::{coerce_number, signed_number, FileType, Timestamp};

/// A single trade from an order export.
///
/// Numeric fields are `None` when the column is missing or its value is not a number.
/// The `amount` is signed: positive for a buy, negative for anything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRecord {
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub qty: Option<Decimal>,
    pub price: Option<Decimal>,
    pub amount: Option<Decimal>,
    pub total_amount: Option<Decimal>,
    pub fees: Option<Decimal>,
    pub timestamp: Timestamp,
    /// Any other column, passed through as text.
    #[serde(flatten)]
    pub extra: Map<String, Value>
}

impl Schema for OrderRecord {
    const FILE_TYPE: FileType = FileType::Order;
    const IGNORED_FIELDS: &'static [&'static str] = &["fees_percentage"];

    fn from_row(mut row: Row, timestamp: Timestamp) -> Self {
        let side = OrderSide::from(row.take("type").unwrap_or_default().as_str());
        let amount = signed_number(side == OrderSide::Buy, row.take("amount").as_deref());

        Self {
            side,
            qty: take_number(&mut row, "qty"),
            price: take_number(&mut row, "price"),
            amount,
            total_amount: take_number(&mut row, "total_amount"),
            fees: take_number(&mut row, "fees"),
            timestamp,
            extra: row.into_extra()
        }
    }
}

pub(crate) fn take_number(row: &mut Row, field: &str) -> Option<Decimal> {
    row.take(field).as_deref().and_then(coerce_number)
}
