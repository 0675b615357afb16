mod parse_engine;
#[cfg(test)]
mod tests;

pub use parse_engine::{parse_csv, ParseEngine};
