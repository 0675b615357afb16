use super::{parse_csv, ParseEngine};

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{ErrorKind, ParseResult, Records};
use crate::types::{DatePolicy, FileType};

const ORDER_CSV: &str = "Date,Type,Quantity,Price per unit,Amount,Total amount,Fees\n\
25-12-2021 10:30,BUY,0.5,40000,20000,20010,10\n\
26-12-2021 11:00,SELL,0.25,42000,10500,10495,5\n";

const WALLET_CSV: &str = "Timestamp,Type,Currency,Amount,Total amount,Fees,Generated by\r\n\
01-03-2022 09:15,deposit,EUR,100,100,0,system\r\n\
02-03-2022 18:45,withdrawal,EUR,40,41,1,system\r\n";

fn order_amounts(result: &ParseResult) -> Result<Vec<Option<Decimal>>> {
    match result.data() {
        Some(Records::Order(records)) => Ok(records.iter().map(|record| record.amount).collect()),
        _ => Err(anyhow!("Expected order records, got {result:?}"))
    }
}

#[test]
fn test_empty_input_is_rejected() {
    let result = parse_csv("");

    assert_eq!(result, ParseResult::Error {
        message: "The file is empty.".to_string(),
        kind: ErrorKind::EmptyInput
    });
}

#[test]
fn test_unknown_file_type_is_rejected() {
    let result = parse_csv("Date,Amount\n01-01-2022 10:00,5\n");

    assert_eq!(result, ParseResult::Error {
        message: "The file type is unknown.".to_string(),
        kind: ErrorKind::UnknownSchema
    });
}

#[test]
fn test_whitespace_only_input_is_unknown_not_empty() {
    assert_eq!(parse_csv("  \n").message(), "The file type is unknown.");
}

#[test]
fn test_order_file_signs_buy_positive_and_sell_negative() -> Result<()> {
    let result = parse_csv(ORDER_CSV);

    assert_eq!(result.message(), "order file parsed successfully.");
    assert!(matches!(result, ParseResult::Success { file_type: FileType::Order, .. }));
    assert_eq!(order_amounts(&result)?, vec![
        Some(Decimal::from_str("20000")?),
        Some(Decimal::from_str("-10500")?)
    ]);

    Ok(())
}

#[test]
fn test_wallet_file_signs_deposit_positive_and_withdrawal_negative() -> Result<()> {
    let result = ParseEngine::new().with_date_policy(DatePolicy::Strict).parse(WALLET_CSV);

    let Some(Records::Wallet(records)) = result.data() else {
        return Err(anyhow!("Expected wallet records, got {result:?}"));
    };

    assert_eq!(records.len(), 2);
    assert!(records[0].amount.is_some_and(|amount| amount.is_sign_positive()));
    assert!(records[1].amount.is_some_and(|amount| amount.is_sign_negative()));

    Ok(())
}

#[test]
fn test_width_mismatch_fails_whole_parse() {
    let text = "Date,Type,Quantity,Price per unit,Amount,Total amount,Fees\n\
25-12-2021 10:30,BUY,0.5,40000,20000,20010,10\n\
26-12-2021 11:00,SELL,0.25,42000,10500\n";

    let result = parse_csv(text);

    assert_eq!(result, ParseResult::Error {
        message: "Error while parsing order file.".to_string(),
        kind: ErrorKind::SchemaMismatch
    });
    assert!(result.data().is_none());
}

#[test]
fn test_single_line_file_fails_extraction() {
    let result = parse_csv("Type,Amount,Generated by");

    assert_eq!(result.message(), "Error while parsing wallet file.");
    assert!(matches!(result, ParseResult::Error { kind: ErrorKind::TooFewLines, .. }));
}

#[test]
fn test_both_markers_parse_as_wallet() {
    let text = "Type,Quantity,Amount,Generated by\ndeposit,1,5,me\n";

    assert!(matches!(parse_csv(text), ParseResult::Success { file_type: FileType::Wallet, .. }));
}

#[test]
fn test_strict_policy_turns_bad_dates_into_errors() {
    let text = "Timestamp,Type,Quantity,Amount\n2021/12/25 10:30,BUY,1,5\n";
    let result = ParseEngine::new().with_date_policy(DatePolicy::Strict).parse(text);

    assert_eq!(result, ParseResult::Error {
        message: "Error while parsing order file.".to_string(),
        kind: ErrorKind::MalformedDate
    });
}

#[test]
fn test_parsing_is_idempotent_for_valid_dates() {
    let engine = ParseEngine::new();

    assert_eq!(engine.parse(WALLET_CSV), engine.parse(WALLET_CSV));
}
