use std::sync::Arc;

use async_trait::async_trait;

use super::Endpoint;
use crate::error::Result;
use crate::models::{GraphqlRequest, IntrospectionSchema};
use crate::transport::{RequestPayload, Transport};

pub const V1_GRAPHQL_PATH: &str = "v1/graphql";

#[async_trait]
pub trait V1Graphql: Send + Sync {
    async fn get_introspection_schema(&self) -> Result<IntrospectionSchema>;
}

#[derive(Clone)]
pub struct V1GraphqlClient {
    endpoint: Endpoint,
}

impl V1GraphqlClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: Endpoint::new(transport, V1_GRAPHQL_PATH),
        }
    }
}

#[async_trait]
impl V1Graphql for V1GraphqlClient {
    async fn get_introspection_schema(&self) -> Result<IntrospectionSchema> {
        let payload = RequestPayload::json(&GraphqlRequest::introspection())?;
        let (_, body) = self.endpoint.post(payload).await?;
        body.json().await
    }
}
