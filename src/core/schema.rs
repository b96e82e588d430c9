//! Index mapping for company records
//!
//! The mapping is created once, when the index does not exist yet.
//! Field types must line up with [`Company`](crate::core::types::Company)
//! or the engine rejects (or silently coerces) writes.

use serde_json::{json, Value};

pub const FIELD_NAME: &str = "name";
pub const FIELD_AGE: &str = "age";
pub const FIELD_DESIGNATION: &str = "designation";
pub const FIELD_EXPERIENCE: &str = "experience";
pub const FIELD_SALARY: &str = "salary";

/// Un-analysed sub-field used for exact designation matches
///
/// Carries no `ignore_above`, so every saved designation stays
/// reachable by the filter whatever its length.
pub const FIELD_DESIGNATION_EXACT: &str = "designation.keyword";

/// `mappings` section for the company index
pub fn company_mappings() -> Value {
    json!({
        "properties": {
            FIELD_NAME: { "type": "text" },
            FIELD_AGE: { "type": "integer" },
            FIELD_DESIGNATION: {
                "type": "text",
                "fields": {
                    "keyword": { "type": "keyword" }
                }
            },
            FIELD_EXPERIENCE: { "type": "integer" },
            FIELD_SALARY: { "type": "long" }
        }
    })
}
