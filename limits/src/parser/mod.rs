use crate::error::LimitsError;
use crate::units::{self, ByteUnit};
use crate::LimitsResult;
use pest::Parser;
use pest_derive::Parser;
use rust_decimal::Decimal;
use std::str::FromStr;

pub mod input;

pub use input::SizeInput;

#[derive(Parser)]
#[grammar = "src/parser/size.pest"]
pub struct SizeParser;

/// Parse a byte-size literal into whole mebibytes.
///
/// The unit suffix is required; only a bare number ([`SizeInput::Integer`])
/// is taken as MiB without one. Zero and negative results are returned
/// as-is; range checks belong to [`AnalysisLimits::new`](crate::AnalysisLimits::new).
pub fn parse_size_literal(text: &str) -> LimitsResult<i64> {
    let literal = SizeParser::parse(Rule::size_literal, text.trim())
        .map_err(|_| LimitsError::malformed(text))?
        .next()
        .ok_or_else(|| LimitsError::malformed(text))?;

    let mut mantissa = None;
    let mut suffix = None;
    for inner_pair in literal.into_inner() {
        match inner_pair.as_rule() {
            Rule::mantissa => mantissa = Some(inner_pair.as_str()),
            Rule::unit_suffix => suffix = Some(inner_pair.as_str()),
            _ => {}
        }
    }

    let mantissa = mantissa.ok_or_else(|| LimitsError::malformed(text))?;
    let suffix = suffix.ok_or_else(|| LimitsError::malformed(text))?;

    let unit = ByteUnit::from_suffix(suffix).ok_or_else(|| LimitsError::malformed(text))?;
    let value = Decimal::from_str(mantissa).map_err(|_| LimitsError::malformed(text))?;
    units::to_mebibytes(value, unit).ok_or_else(|| LimitsError::malformed(text))
}
