use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;

/// Arguments of `replace_metadata` at version 2.
#[derive(Debug, Clone, Serialize)]
pub struct V2ReplaceMetadataArgs {
    pub allow_inconsistent_metadata: bool,
    pub metadata: Box<RawValue>,
}

/// Answer to `replace_metadata` at version 2. Only filled with objects when
/// inconsistencies were allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct V2ReplaceMetadataResponse {
    pub is_consistent: bool,
    #[serde(default)]
    pub inconsistent_objects: Vec<InconsistentObject>,
}

impl From<V2ReplaceMetadataResponse> for InconsistentMetadata {
    fn from(response: V2ReplaceMetadataResponse) -> Self {
        Self {
            is_consistent: response.is_consistent,
            inconsistent_objects: response.inconsistent_objects,
        }
    }
}

/// Decoded shape of `get_inconsistent_metadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InconsistentMetadata {
    pub is_consistent: bool,
    #[serde(default)]
    pub inconsistent_objects: Vec<InconsistentObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InconsistentObject {
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub definition: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_inconsistent_objects() {
        let decoded: InconsistentMetadata = serde_json::from_value(json!({
            "is_consistent": false,
            "inconsistent_objects": [{
                "type": "table",
                "reason": "no such table/view exists in source: \"users\"",
                "definition": {"schema": "public", "name": "users"}
            }]
        }))
        .unwrap();
        assert!(!decoded.is_consistent);
        assert_eq!(decoded.inconsistent_objects[0].object_type, "table");
    }

    #[test]
    fn replace_response_without_objects_is_consistent() {
        let response: V2ReplaceMetadataResponse =
            serde_json::from_value(json!({"is_consistent": true})).unwrap();
        let report = InconsistentMetadata::from(response);
        assert!(report.is_consistent);
        assert!(report.inconsistent_objects.is_empty());
    }
}
