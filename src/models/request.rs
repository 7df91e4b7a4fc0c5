use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;

use super::catalog::SetCatalogStateArgs;
use super::metadata::V2ReplaceMetadataArgs;
use super::sql::{BigQueryRunSqlInput, MssqlRunSqlInput, PgRunSqlInput};
use super::table::{
    BigQueryTrackTableInput, BigQueryUntrackTableInput, TrackTableInput, UntrackTableInput,
};
use crate::error::{EngineError, Result};

pub const BULK_REQUEST_TYPE: &str = "bulk";

/// The `{type, version, args}` envelope every typed operation is sent in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub request_type: String,
    /// `None` and `Some(0)` both leave the field off the wire, but stay
    /// distinct in memory.
    #[serde(default, skip_serializing_if = "is_unset_version")]
    pub version: Option<u32>,
    pub args: Args,
}

fn is_unset_version(version: &Option<u32>) -> bool {
    matches!(version, None | Some(0))
}

impl RequestBody {
    pub fn new(request_type: impl Into<String>, args: impl Into<Args>) -> Result<Self> {
        let body = Self {
            request_type: request_type.into(),
            version: None,
            args: args.into(),
        };
        body.validate()?;
        Ok(body)
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Wraps an ordered list of envelopes into a single `bulk` envelope.
    pub fn bulk(requests: Vec<RequestBody>) -> Self {
        Self {
            request_type: BULK_REQUEST_TYPE.to_string(),
            version: None,
            args: Args::Bulk(requests),
        }
    }

    /// Only the envelope itself is checked. `args` belong to the server.
    pub fn validate(&self) -> Result<()> {
        if self.request_type.trim().is_empty() {
            return Err(EngineError::InvalidRequest(
                "request type must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Arguments carried by a [`RequestBody`].
///
/// The typed variants cover the operations this crate models. `Raw` and
/// `Verbatim` pass anything else through untouched, so verbs the server knows
/// about but this client does not can still be sent.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Args {
    Empty(EmptyArgs),
    PgRunSql(PgRunSqlInput),
    MssqlRunSql(MssqlRunSqlInput),
    BigQueryRunSql(BigQueryRunSqlInput),
    TrackTable(TrackTableInput),
    UntrackTable(UntrackTableInput),
    BigQueryTrackTable(BigQueryTrackTableInput),
    BigQueryUntrackTable(BigQueryUntrackTableInput),
    SetCatalogState(SetCatalogStateArgs),
    ReplaceMetadata(V2ReplaceMetadataArgs),
    Bulk(Vec<RequestBody>),
    Raw(Value),
    /// Pre-serialised JSON, written out byte-for-byte.
    Verbatim(Box<RawValue>),
}

impl<'de> Deserialize<'de> for Args {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Args::Raw)
    }
}

/// Serialises as `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmptyArgs {}

impl From<EmptyArgs> for Args {
    fn from(args: EmptyArgs) -> Self {
        Args::Empty(args)
    }
}

impl From<PgRunSqlInput> for Args {
    fn from(input: PgRunSqlInput) -> Self {
        Args::PgRunSql(input)
    }
}

impl From<MssqlRunSqlInput> for Args {
    fn from(input: MssqlRunSqlInput) -> Self {
        Args::MssqlRunSql(input)
    }
}

impl From<BigQueryRunSqlInput> for Args {
    fn from(input: BigQueryRunSqlInput) -> Self {
        Args::BigQueryRunSql(input)
    }
}

impl From<TrackTableInput> for Args {
    fn from(input: TrackTableInput) -> Self {
        Args::TrackTable(input)
    }
}

impl From<UntrackTableInput> for Args {
    fn from(input: UntrackTableInput) -> Self {
        Args::UntrackTable(input)
    }
}

impl From<BigQueryTrackTableInput> for Args {
    fn from(input: BigQueryTrackTableInput) -> Self {
        Args::BigQueryTrackTable(input)
    }
}

impl From<BigQueryUntrackTableInput> for Args {
    fn from(input: BigQueryUntrackTableInput) -> Self {
        Args::BigQueryUntrackTable(input)
    }
}

impl From<SetCatalogStateArgs> for Args {
    fn from(args: SetCatalogStateArgs) -> Self {
        Args::SetCatalogState(args)
    }
}

impl From<V2ReplaceMetadataArgs> for Args {
    fn from(args: V2ReplaceMetadataArgs) -> Self {
        Args::ReplaceMetadata(args)
    }
}

impl From<Vec<RequestBody>> for Args {
    fn from(requests: Vec<RequestBody>) -> Self {
        Args::Bulk(requests)
    }
}

impl From<Value> for Args {
    fn from(value: Value) -> Self {
        Args::Raw(value)
    }
}

impl From<Box<RawValue>> for Args {
    fn from(raw: Box<RawValue>) -> Self {
        Args::Verbatim(raw)
    }
}
