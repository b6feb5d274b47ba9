//! User-facing message texts. Downstream consumers match on these strings,
//! so wording changes are breaking changes.

pub fn model_memory_limit_too_low(field: &str, min_mib: i64, value: i64) -> String {
    format!("{} must be at least {} MiB. Value = {}", field, min_mib, value)
}

pub fn field_value_too_low(field: &str, min: i64, value: i64) -> String {
    format!("{} cannot be less than {}. Value = {}", field, min, value)
}
