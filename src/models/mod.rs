mod envelope;
mod errors;
mod order;
mod wallet;

use serde::{Serialize, Serializer};

pub use envelope::{ParseResult, Records};
pub use errors::{ErrorKind, ParseError};
pub use order::OrderRecord;
pub use wallet::WalletRecord;

/// The `Type` column of an order export.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum OrderSide {
    Buy,
    Sell,
    Other(String)
}

impl From<&str> for OrderSide {
    fn from(value: &str) -> Self {
        match value {
            "BUY" => OrderSide::Buy,
            "SELL" => OrderSide::Sell,
            other => OrderSide::Other(other.to_string())
        }
    }
}

impl OrderSide {
    pub fn as_str(&self) -> &str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
            OrderSide::Other(value) => value
        }
    }
}

/// The `Type` column of a wallet export.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum WalletMovement {
    Deposit,
    Withdrawal,
    Other(String)
}

impl From<&str> for WalletMovement {
    fn from(value: &str) -> Self {
        match value {
            "deposit" => WalletMovement::Deposit,
            "withdrawal" => WalletMovement::Withdrawal,
            other => WalletMovement::Other(other.to_string())
        }
    }
}

impl WalletMovement {
    pub fn as_str(&self) -> &str {
        match self {
            WalletMovement::Deposit => "deposit",
            WalletMovement::Withdrawal => "withdrawal",
            WalletMovement::Other(value) => value
        }
    }
}

//NOTE: Both types serialize back to the exact text found in the export, unknown values included.
impl Serialize for OrderSide {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for WalletMovement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
