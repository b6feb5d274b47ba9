use crate::analysis_limits::{CATEGORIZATION_EXAMPLES_LIMIT, MODEL_MEMORY_LIMIT};
use crate::parser::SizeInput;
use crate::{AnalysisLimits, LimitsError, LimitsResult};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Limits object as written in a JSON document, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsDocument {
    #[serde(default)]
    pub model_memory_limit: Option<SizeInput>,
    #[serde(default)]
    pub categorization_examples_limit: Option<i64>,
}

impl TryFrom<LimitsDocument> for AnalysisLimits {
    type Error = LimitsError;

    fn try_from(document: LimitsDocument) -> Result<Self, Self::Error> {
        AnalysisLimits::from_inputs(
            document.model_memory_limit.as_ref(),
            document.categorization_examples_limit,
        )
    }
}

/// Parse and validate a limits object from JSON text.
///
/// Structural problems are reported as [`LimitsError::Document`]; literal
/// and range errors keep their own kinds.
pub fn from_json(json: &str) -> LimitsResult<AnalysisLimits> {
    let document: LimitsDocument = serde_json::from_str(json)?;
    AnalysisLimits::try_from(document)
}

pub fn from_json_value(value: Value) -> LimitsResult<AnalysisLimits> {
    let document: LimitsDocument = serde_json::from_value(value)?;
    AnalysisLimits::try_from(document)
}

/// Canonical form: present fields only, memory as an integer MiB count.
/// Keys are inserted in sorted order.
pub fn to_json_value(limits: &AnalysisLimits) -> Value {
    let mut object = Map::new();
    if let Some(count) = limits.categorization_examples_limit() {
        object.insert(CATEGORIZATION_EXAMPLES_LIMIT.to_string(), Value::from(count));
    }
    if let Some(mib) = limits.model_memory_limit() {
        object.insert(MODEL_MEMORY_LIMIT.to_string(), Value::from(mib));
    }
    Value::Object(object)
}

pub fn to_json(limits: &AnalysisLimits) -> String {
    to_json_value(limits).to_string()
}
