//! Binary byte units and conversion to mebibytes

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

/// Number of bytes in one mebibyte (1024^2)
pub const BYTES_PER_MIB: i64 = 1_048_576;

/// Binary-prefixed byte units accepted as size literal suffixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteUnit {
    Byte,
    Kibibyte,
    Mebibyte,
    Gibibyte,
    Tebibyte,
    Pebibyte,
}

impl ByteUnit {
    /// Resolve a unit suffix, ignoring ASCII case
    pub fn from_suffix(suffix: &str) -> Option<ByteUnit> {
        match suffix.to_ascii_lowercase().as_str() {
            "b" => Some(ByteUnit::Byte),
            "k" | "kb" => Some(ByteUnit::Kibibyte),
            "m" | "mb" => Some(ByteUnit::Mebibyte),
            "g" | "gb" => Some(ByteUnit::Gibibyte),
            "t" | "tb" => Some(ByteUnit::Tebibyte),
            "p" | "pb" => Some(ByteUnit::Pebibyte),
            _ => None,
        }
    }

    /// Bytes per one of this unit
    pub fn multiplier(&self) -> i64 {
        match self {
            ByteUnit::Byte => 1,
            ByteUnit::Kibibyte => 1024,
            ByteUnit::Mebibyte => BYTES_PER_MIB,
            ByteUnit::Gibibyte => 1_073_741_824,         // 1024^3
            ByteUnit::Tebibyte => 1_099_511_627_776,     // 1024^4
            ByteUnit::Pebibyte => 1_125_899_906_842_624, // 1024^5
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            ByteUnit::Byte => "b",
            ByteUnit::Kibibyte => "kb",
            ByteUnit::Mebibyte => "mb",
            ByteUnit::Gibibyte => "gb",
            ByteUnit::Tebibyte => "tb",
            ByteUnit::Pebibyte => "pb",
        }
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Convert a mantissa in `unit` to whole mebibytes.
///
/// Mebibyte mantissas are taken as-is (integer part only). Every other unit
/// goes through a byte count, and the byte magnitude is floor-divided by
/// [`BYTES_PER_MIB`] with the sign re-applied afterwards, so `-1000kb` yields
/// `0` rather than `-1`.
///
/// Returns `None` when the result does not fit in an `i64`.
pub fn to_mebibytes(mantissa: Decimal, unit: ByteUnit) -> Option<i64> {
    if unit == ByteUnit::Mebibyte {
        return mantissa.trunc().to_i64();
    }

    let bytes = mantissa.checked_mul(Decimal::from(unit.multiplier()))?;
    let whole = (bytes.abs() / Decimal::from(BYTES_PER_MIB)).floor();
    let signed = if bytes.is_sign_negative() {
        -whole
    } else {
        whole
    };
    signed.to_i64()
}
