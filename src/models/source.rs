use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Backend database family a source belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Postgres,
    Mssql,
    Citus,
    Cockroach,
    Bigquery,
    Snowflake,
}

impl SourceKind {
    pub const ALL: [SourceKind; 6] = [
        SourceKind::Postgres,
        SourceKind::Mssql,
        SourceKind::Citus,
        SourceKind::Cockroach,
        SourceKind::Bigquery,
        SourceKind::Snowflake,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Postgres => "postgres",
            SourceKind::Mssql => "mssql",
            SourceKind::Citus => "citus",
            SourceKind::Cockroach => "cockroach",
            SourceKind::Bigquery => "bigquery",
            SourceKind::Snowflake => "snowflake",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        // "pg" is what most people type
        if wanted == "pg" {
            return Ok(SourceKind::Postgres);
        }
        SourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| format!("unknown source kind: {}", s))
    }
}
