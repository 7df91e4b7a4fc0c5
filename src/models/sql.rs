use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `run_sql` arguments for Postgres-flavoured sources (postgres, citus,
/// cockroach).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PgRunSqlInput {
    pub sql: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub cascade: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_metadata_consistency: Option<bool>,
}

impl PgRunSqlInput {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            ..Default::default()
        }
    }

    pub fn on_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MssqlRunSqlInput {
    pub sql: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub cascade: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_metadata_consistency: Option<bool>,
}

impl MssqlRunSqlInput {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            ..Default::default()
        }
    }

    pub fn on_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// BigQuery has no transactions to cascade through, so only the statement
/// and the source are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BigQueryRunSqlInput {
    pub sql: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl BigQueryRunSqlInput {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            source: None,
        }
    }

    pub fn on_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Decoded shape of a successful `*_run_sql` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSqlOutput {
    pub result_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<Vec<Value>>>,
}

impl RunSqlOutput {
    /// Column names, when the statement returned rows.
    pub fn header(&self) -> Option<&[Value]> {
        self.result.as_ref()?.first().map(|row| row.as_slice())
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        match &self.result {
            Some(rows) if !rows.is_empty() => &rows[1..],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn run_sql_output_splits_header_from_rows() {
        let output: RunSqlOutput = serde_json::from_value(json!({
            "result_type": "TuplesOk",
            "result": [["id", "name"], ["1", "alice"], ["2", "bob"]]
        }))
        .unwrap();
        assert_eq!(output.header().unwrap(), &[json!("id"), json!("name")]);
        assert_eq!(output.rows().len(), 2);

        let command: RunSqlOutput =
            serde_json::from_value(json!({"result_type": "CommandOk", "result": null})).unwrap();
        assert!(command.header().is_none());
        assert!(command.rows().is_empty());
    }

    #[test]
    fn bigquery_input_carries_no_postgres_flags() {
        let value = serde_json::to_value(BigQueryRunSqlInput::new("select 1").on_source("bq"))
            .unwrap();
        assert_eq!(value, json!({"sql": "select 1", "source": "bq"}));
    }
}
