use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use poem_openapi::payload::Json;

use crate::api::error::{ErrorResponse, validation_error};

const MONEY_SCALE: i64 = 2;
/// Integer digits that fit the `NUMERIC(12, 2)` columns.
const MAX_INTEGER_DIGITS: i64 = 10;
const MAX_INPUT_LEN: usize = 32;

/// Parses a decimal string such as `"19.99"` into an exact amount.
/// More than two fractional digits is rejected rather than rounded.
/// Magnitude is checked before rescaling so exponent notation such as
/// `"1e9999999"` never expands into a huge integer.
pub fn parse_amount(field: &str, raw: &str) -> Result<BigDecimal, Json<ErrorResponse>> {
    let raw = raw.trim();
    if raw.len() > MAX_INPUT_LEN {
        return Err(validation_error(format!("{field}.out_of_range")));
    }

    let value = BigDecimal::from_str(raw)
        .map_err(|_| validation_error(format!("{field}.invalid_amount")))?;

    let normalized = value.normalized();
    let (_, scale) = normalized.as_bigint_and_exponent();
    if scale > MONEY_SCALE {
        return Err(validation_error(format!("{field}.too_many_decimals")));
    }

    let integer_digits = i64::try_from(normalized.digits())
        .unwrap_or(i64::MAX)
        .saturating_sub(scale);
    if integer_digits > MAX_INTEGER_DIGITS {
        return Err(validation_error(format!("{field}.out_of_range")));
    }

    Ok(value.with_scale(MONEY_SCALE))
}

pub fn parse_optional_amount(
    field: &str,
    raw: Option<&str>,
) -> Result<Option<BigDecimal>, Json<ErrorResponse>> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => parse_amount(field, value).map(Some),
        None => Ok(None),
    }
}

pub fn format_amount(value: &BigDecimal) -> String {
    value
        .with_scale_round(MONEY_SCALE, RoundingMode::HalfUp)
        .to_string()
}
