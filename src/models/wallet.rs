use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::order::take_number;
use crate::models::WalletMovement;
use crate::parser::{Row, Schema};
use crate::types::{signed_number, FileType, Timestamp};

/// A single deposit or withdrawal from a wallet export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletRecord {
    #[serde(rename = "type")]
    pub movement: WalletMovement,
    pub amount: Option<Decimal>,
    pub total_amount: Option<Decimal>,
    pub fees: Option<Decimal>,
    pub timestamp: Timestamp,
    #[serde(flatten)]
    pub extra: Map<String, Value>
}

impl Schema for WalletRecord {
    const FILE_TYPE: FileType = FileType::Wallet;
    const IGNORED_FIELDS: &'static [&'static str] = &["generated_by"];

    fn from_row(mut row: Row, timestamp: Timestamp) -> Self {
        let movement = WalletMovement::from(row.take("type").unwrap_or_default().as_str());
        let amount = signed_number(movement == WalletMovement::Deposit, row.take("amount").as_deref());

        Self {
            movement,
            amount,
            total_amount: take_number(&mut row, "total_amount"),
            fees: take_number(&mut row, "fees"),
            timestamp,
            extra: row.into_extra()
        }
    }
}
