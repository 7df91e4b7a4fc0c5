use serde::{Deserialize, Serialize};

/// Body of a `/v1alpha1/pg_dump` call. `opts` are passed straight to
/// `pg_dump` on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PgDumpRequest {
    pub opts: Vec<String>,
    #[serde(default)]
    pub clean_output: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl PgDumpRequest {
    /// Schema-only dump of the given schemas, the way migrations squash
    /// their initial state.
    pub fn schema_only<I, S>(schemas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = vec!["-O".to_string(), "-x".to_string(), "--schema-only".to_string()];
        for schema in schemas {
            opts.push("--schema".to_string());
            opts.push(schema.as_ref().to_string());
        }
        Self {
            opts,
            clean_output: true,
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_only_lists_each_schema() {
        let request = PgDumpRequest::schema_only(["public", "audit"]);
        assert_eq!(
            request.opts,
            vec!["-O", "-x", "--schema-only", "--schema", "public", "--schema", "audit"]
        );
        assert!(request.clean_output);
    }
}
