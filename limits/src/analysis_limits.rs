use crate::error::LimitsError;
use crate::messages;
use crate::parser::SizeInput;
use crate::LimitsResult;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MODEL_MEMORY_LIMIT: &str = "model_memory_limit";
pub const CATEGORIZATION_EXAMPLES_LIMIT: &str = "categorization_examples_limit";

/// Memory limit applied when none is configured, in MiB
pub const DEFAULT_MODEL_MEMORY_LIMIT_MB: u64 = 1024;

/// Examples limit applied when none is configured
pub const DEFAULT_CATEGORIZATION_EXAMPLES_LIMIT: u64 = 4;

const MIN_MODEL_MEMORY_LIMIT_MB: i64 = 1;
const MIN_CATEGORIZATION_EXAMPLES_LIMIT: i64 = 0;

/// Validated resource limits for an analysis job.
///
/// Both fields are optional; `None` means the system default applies.
/// Values can only be obtained through [`AnalysisLimits::new`] (or the
/// parsing entry points built on it), so every instance satisfies:
/// - `model_memory_limit` is absent or at least 1 MiB
/// - `categorization_examples_limit` is absent or non-negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "crate::serializers::json::LimitsDocument")]
pub struct AnalysisLimits {
    #[serde(skip_serializing_if = "Option::is_none")]
    model_memory_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    categorization_examples_limit: Option<u64>,
}

impl AnalysisLimits {
    /// Validate limit candidates and build a value.
    ///
    /// `model_memory_limit` is in MiB. The memory limit is checked first.
    pub fn new(
        model_memory_limit: Option<i64>,
        categorization_examples_limit: Option<i64>,
    ) -> LimitsResult<Self> {
        let model_memory_limit = model_memory_limit
            .map(|mib| {
                check_at_least(
                    MODEL_MEMORY_LIMIT,
                    MIN_MODEL_MEMORY_LIMIT_MB,
                    mib,
                    messages::model_memory_limit_too_low,
                )
            })
            .transpose()?;

        let categorization_examples_limit = categorization_examples_limit
            .map(|count| {
                check_at_least(
                    CATEGORIZATION_EXAMPLES_LIMIT,
                    MIN_CATEGORIZATION_EXAMPLES_LIMIT,
                    count,
                    messages::field_value_too_low,
                )
            })
            .transpose()?;

        Ok(Self {
            model_memory_limit,
            categorization_examples_limit,
        })
    }

    /// Parse a raw memory limit, then validate both fields
    pub fn from_inputs(
        model_memory_limit: Option<&SizeInput>,
        categorization_examples_limit: Option<i64>,
    ) -> LimitsResult<Self> {
        let model_memory_limit = model_memory_limit
            .map(SizeInput::to_mebibytes)
            .transpose()?;
        Self::new(model_memory_limit, categorization_examples_limit)
    }

    /// No limits imposed
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Configured memory limit in MiB
    pub fn model_memory_limit(&self) -> Option<u64> {
        self.model_memory_limit
    }

    pub fn categorization_examples_limit(&self) -> Option<u64> {
        self.categorization_examples_limit
    }

    pub fn effective_model_memory_limit(&self) -> u64 {
        self.model_memory_limit.unwrap_or(DEFAULT_MODEL_MEMORY_LIMIT_MB)
    }

    pub fn effective_categorization_examples_limit(&self) -> u64 {
        self.categorization_examples_limit
            .unwrap_or(DEFAULT_CATEGORIZATION_EXAMPLES_LIMIT)
    }

    pub fn is_unlimited(&self) -> bool {
        self.model_memory_limit.is_none() && self.categorization_examples_limit.is_none()
    }
}

fn check_at_least(
    field: &'static str,
    minimum: i64,
    value: i64,
    message: fn(&str, i64, i64) -> String,
) -> Result<u64, LimitsError> {
    if value < minimum {
        return Err(LimitsError::value_too_low(
            field,
            minimum,
            value,
            message(field, minimum, value),
        ));
    }
    // minimum >= 0, so value is non-negative here
    Ok(value.unsigned_abs())
}

impl fmt::Display for AnalysisLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unlimited() {
            return write!(f, "unlimited");
        }

        let mut parts = Vec::new();
        if let Some(mib) = self.model_memory_limit {
            parts.push(format!("{}={}mb", MODEL_MEMORY_LIMIT, mib));
        }
        if let Some(count) = self.categorization_examples_limit {
            parts.push(format!("{}={}", CATEGORIZATION_EXAMPLES_LIMIT, count));
        }
        write!(f, "{}", parts.join(", "))
    }
}
