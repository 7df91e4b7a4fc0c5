use serde::{Deserialize, Serialize};

/// Response of `GET /v1/version`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_server_type_decodes_as_none() {
        let info: VersionInfo = serde_json::from_str(r#"{"version":"2.3.0"}"#).unwrap();
        assert_eq!(info.version, "2.3.0");
        assert_eq!(info.server_type, None);
        assert_eq!(serde_json::to_string(&info).unwrap(), r#"{"version":"2.3.0"}"#);
    }
}
