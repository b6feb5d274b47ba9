use crate::parser::parse_size_literal;
use crate::LimitsResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw memory limit as it appears in a limits document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeInput {
    /// A bare number, already in MiB
    Integer(i64),
    /// A size literal such as `"4g"` or `"1300kb"`
    Literal(String),
}

impl SizeInput {
    pub fn to_mebibytes(&self) -> LimitsResult<i64> {
        match self {
            SizeInput::Integer(mib) => Ok(*mib),
            SizeInput::Literal(text) => parse_size_literal(text),
        }
    }
}

impl From<i64> for SizeInput {
    fn from(mib: i64) -> Self {
        SizeInput::Integer(mib)
    }
}

impl From<&str> for SizeInput {
    fn from(text: &str) -> Self {
        SizeInput::Literal(text.to_string())
    }
}

impl From<String> for SizeInput {
    fn from(text: String) -> Self {
        SizeInput::Literal(text)
    }
}

impl fmt::Display for SizeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeInput::Integer(mib) => write!(f, "{}", mib),
            SizeInput::Literal(text) => write!(f, "\"{}\"", text),
        }
    }
}
