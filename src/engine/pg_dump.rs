use std::sync::Arc;

use async_trait::async_trait;

use super::capabilities::GenericSend;
use super::Endpoint;
use crate::error::Result;
use crate::models::PgDumpRequest;
use crate::transport::{RequestPayload, ResponseBody, ResponseMeta, Transport};

pub const PG_DUMP_PATH: &str = "v1alpha1/pg_dump";

#[async_trait]
pub trait PgDump: GenericSend {
    /// Plain SQL as produced by `pg_dump` on the server.
    async fn pg_dump(&self, request: PgDumpRequest) -> Result<ResponseBody> {
        let payload = RequestPayload::json(&request)?;
        let (_, body) = self.send(payload).await?;
        Ok(body)
    }
}

#[derive(Clone)]
pub struct PgDumpClient {
    endpoint: Endpoint,
}

impl PgDumpClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: Endpoint::new(transport, PG_DUMP_PATH),
        }
    }
}

#[async_trait]
impl GenericSend for PgDumpClient {
    async fn send(&self, payload: RequestPayload) -> Result<(ResponseMeta, ResponseBody)> {
        self.endpoint.post(payload).await
    }
}

impl PgDump for PgDumpClient {}
