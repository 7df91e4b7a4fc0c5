use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedTable {
    pub schema: String,
    pub name: String,
}

impl QualifiedTable {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
        }
    }
}

/// BigQuery tables live in datasets rather than schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigQueryTable {
    pub dataset: String,
    pub name: String,
}

impl BigQueryTable {
    pub fn new(dataset: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackTableInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub table: QualifiedTable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UntrackTableInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub table: QualifiedTable,
    #[serde(default)]
    pub cascade: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigQueryTrackTableInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub table: BigQueryTable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigQueryUntrackTableInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub table: BigQueryTable,
    #[serde(default)]
    pub cascade: bool,
}
