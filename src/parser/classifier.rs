use crate::types::FileType;

pub const ORDER_MARKER: &str = "Quantity";
pub const WALLET_MARKER: &str = "Generated";

/// Decides which export layout `text` uses from the marker substrings it contains.
///
/// The wallet marker is checked last and wins when both are present.
pub fn classify(text: &str) -> Option<FileType> {
    let mut file_type = None;

    if text.contains(ORDER_MARKER) {
        file_type = Some(FileType::Order);
    }

    if text.contains(WALLET_MARKER) {
        file_type = Some(FileType::Wallet);
    }

    file_type
}
