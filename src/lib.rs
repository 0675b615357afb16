//! Turns cryptocurrency order and wallet CSV exports into typed records.
//!
//! [`ParseEngine::parse`] is the core entry point. The [`ui`] module wires it to a
//! file source and a renderer.

pub mod config;
pub mod engine;
pub mod models;
pub mod parser;
pub mod types;
pub mod ui;

pub use engine::{parse_csv, ParseEngine};
pub use models::{ErrorKind, OrderRecord, OrderSide, ParseError, ParseResult, Records, WalletMovement, WalletRecord};
pub use types::{DatePolicy, FileType};
