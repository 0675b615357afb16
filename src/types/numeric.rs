use rust_decimal::Decimal;
use std::str::FromStr;

/// Coerces a raw CSV value into a decimal number.
///
/// Surrounding whitespace is ignored and an empty value counts as zero. Plain and
/// scientific notation are accepted, with an optional leading sign. Anything else,
/// including digit separators and values beyond `Decimal`'s range, yields `None`,
/// which stands in for "not a number" in the parsed records.
pub fn coerce_number(raw: &str) -> Option<Decimal> {
    let value = raw.trim();

    if value.is_empty() {
        return Some(Decimal::ZERO);
    }

    //NOTE: Decimal accepts `_` digit separators, exported numbers never carry them.
    if value.contains('_') {
        return None;
    }

    Decimal::from_str(value).ok()
        .or_else(|| Decimal::from_scientific(value).ok())
}

/// Prefixes `raw` with `+` or `-` before coercing it, so a value that already
/// carries a sign (or is blank) does not coerce at all.
pub fn signed_number(positive: bool, raw: Option<&str>) -> Option<Decimal> {
    let raw = raw?;
    let sign = if positive { '+' } else { '-' };

    coerce_number(&format!("{sign}{raw}"))
}
