pub(crate) mod json;

pub use json::{from_json, from_json_value, to_json, to_json_value};
