use std::sync::Arc;

use async_trait::async_trait;

use super::capabilities::{
    CatalogStateOperations, CommonMetadataOperations, GenericSend, V2CommonMetadataOperations,
};
use super::Endpoint;
use crate::error::Result;
use crate::transport::{RequestPayload, ResponseBody, ResponseMeta, Transport};

pub const V1_METADATA_PATH: &str = "v1/metadata";

/// The metadata endpoint. No bulk: batching belongs to the query endpoints.
pub trait V1Metadata:
    CommonMetadataOperations + V2CommonMetadataOperations + CatalogStateOperations
{
}

impl<T> V1Metadata for T where
    T: CommonMetadataOperations + V2CommonMetadataOperations + CatalogStateOperations
{
}

#[derive(Clone)]
pub struct V1MetadataClient {
    endpoint: Endpoint,
}

impl V1MetadataClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: Endpoint::new(transport, V1_METADATA_PATH),
        }
    }
}

#[async_trait]
impl GenericSend for V1MetadataClient {
    async fn send(&self, payload: RequestPayload) -> Result<(ResponseMeta, ResponseBody)> {
        self.endpoint.post(payload).await
    }
}

impl CommonMetadataOperations for V1MetadataClient {}
impl V2CommonMetadataOperations for V1MetadataClient {}
impl CatalogStateOperations for V1MetadataClient {}
