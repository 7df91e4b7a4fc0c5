use std::sync::Arc;

use async_trait::async_trait;

use super::capabilities::{BulkSend, GenericSend, SourceCapabilities};
use super::sources::{
    BigQuerySourceOps, CitusSourceOps, CockroachSourceOps, MssqlSourceOps, PgSourceOps,
};
use super::Endpoint;
use crate::error::Result;
use crate::models::SourceKind;
use crate::transport::{RequestPayload, ResponseBody, ResponseMeta, Transport};

pub const V2_QUERY_PATH: &str = "v2/query";

/// The multi-source query generation. A new source kind is one more
/// operation-set trait added to this list.
pub trait V2Query:
    PgSourceOps
    + MssqlSourceOps
    + CitusSourceOps
    + CockroachSourceOps
    + BigQuerySourceOps
    + BulkSend
    + SourceCapabilities
{
}

impl<T> V2Query for T where
    T: PgSourceOps
        + MssqlSourceOps
        + CitusSourceOps
        + CockroachSourceOps
        + BigQuerySourceOps
        + BulkSend
        + SourceCapabilities
{
}

const V2_SOURCE_KINDS: [SourceKind; 5] = [
    SourceKind::Postgres,
    SourceKind::Mssql,
    SourceKind::Citus,
    SourceKind::Cockroach,
    SourceKind::Bigquery,
];

#[derive(Clone)]
pub struct V2QueryClient {
    endpoint: Endpoint,
}

impl V2QueryClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: Endpoint::new(transport, V2_QUERY_PATH),
        }
    }
}

#[async_trait]
impl GenericSend for V2QueryClient {
    async fn send(&self, payload: RequestPayload) -> Result<(ResponseMeta, ResponseBody)> {
        self.endpoint.post(payload).await
    }
}

impl BulkSend for V2QueryClient {}
impl PgSourceOps for V2QueryClient {}
impl MssqlSourceOps for V2QueryClient {}
impl CitusSourceOps for V2QueryClient {}
impl CockroachSourceOps for V2QueryClient {}
impl BigQuerySourceOps for V2QueryClient {}

impl SourceCapabilities for V2QueryClient {
    fn supported_source_kinds(&self) -> &'static [SourceKind] {
        &V2_SOURCE_KINDS
    }
}
