//! # Analysis Limits
//!
//! Validated resource limits for analysis jobs: a model memory budget in
//! mebibytes and a cap on stored categorization examples.
//!
//! ## Quick Start
//!
//! ```rust
//! use analysis_limits::{AnalysisLimits, LimitsResult};
//!
//! fn main() -> LimitsResult<()> {
//!     let limits = analysis_limits::from_json(r#"{"model_memory_limit": "4g"}"#)?;
//!     assert_eq!(limits.model_memory_limit(), Some(4096));
//!
//!     let direct = AnalysisLimits::new(Some(4096), None)?;
//!     assert_eq!(limits, direct);
//!     Ok(())
//! }
//! ```
//!
//! ## Size literals
//!
//! Memory limits may be given as a bare integer, which is already in MiB, or
//! as a string that must end in a binary unit suffix (`b`, `k`/`kb`,
//! `m`/`mb`, `g`/`gb`, `t`/`tb`, `p`/`pb`, any case). A string without a
//! suffix, such as `"2048"`, is malformed. Suffixed literals are converted through a
//! byte count and truncated to whole MiB, so `"1300kb"` is `1` and
//! `"1000kb"` is `0`.
//!
//! ## Errors
//!
//! Text that does not match the grammar fails with
//! [`LimitsError::MalformedSizeLiteral`]. Values below a field's minimum fail
//! with [`LimitsError::ValueTooLow`], whose message is part of the public
//! contract:
//!
//! ```text
//! model_memory_limit must be at least 1 MiB. Value = 0
//! categorization_examples_limit cannot be less than 0. Value = -1
//! ```

pub mod analysis_limits;
pub mod error;
pub mod messages;
pub mod parser;
pub mod serializers;
pub mod units;

pub use analysis_limits::{
    AnalysisLimits, CATEGORIZATION_EXAMPLES_LIMIT, DEFAULT_CATEGORIZATION_EXAMPLES_LIMIT,
    DEFAULT_MODEL_MEMORY_LIMIT_MB, MODEL_MEMORY_LIMIT,
};
pub use error::LimitsError;
pub use parser::{parse_size_literal, SizeInput};
pub use serializers::{from_json, from_json_value, to_json, to_json_value};
pub use units::ByteUnit;

/// Result type for limits operations
pub type LimitsResult<T> = Result<T, LimitsError>;
