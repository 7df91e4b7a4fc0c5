use std::sync::Arc;

use async_trait::async_trait;

use super::capabilities::{BulkSend, CommonMetadataOperations, GenericSend, SourceCapabilities};
use super::sources::PgSourceOps;
use super::Endpoint;
use crate::error::Result;
use crate::models::SourceKind;
use crate::transport::{RequestPayload, ResponseBody, ResponseMeta, Transport};

pub const V1_QUERY_PATH: &str = "v1/query";

/// The legacy query generation. Postgres only, and it stays that way: new
/// source kinds go to [`super::V2Query`].
pub trait V1Query: CommonMetadataOperations + PgSourceOps + BulkSend + SourceCapabilities {}

impl<T> V1Query for T where T: CommonMetadataOperations + PgSourceOps + BulkSend + SourceCapabilities {}

#[derive(Clone)]
pub struct V1QueryClient {
    endpoint: Endpoint,
}

impl V1QueryClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: Endpoint::new(transport, V1_QUERY_PATH),
        }
    }
}

#[async_trait]
impl GenericSend for V1QueryClient {
    async fn send(&self, payload: RequestPayload) -> Result<(ResponseMeta, ResponseBody)> {
        self.endpoint.post(payload).await
    }
}

impl BulkSend for V1QueryClient {}
impl CommonMetadataOperations for V1QueryClient {}
impl PgSourceOps for V1QueryClient {}

impl SourceCapabilities for V1QueryClient {
    fn supported_source_kinds(&self) -> &'static [SourceKind] {
        &[SourceKind::Postgres]
    }
}
