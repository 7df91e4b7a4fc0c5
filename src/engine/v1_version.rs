use std::sync::Arc;

use async_trait::async_trait;

use super::Endpoint;
use crate::error::Result;
use crate::models::VersionInfo;
use crate::transport::Transport;

pub const V1_VERSION_PATH: &str = "v1/version";

#[async_trait]
pub trait V1Version: Send + Sync {
    /// Fails with a decode error unless the body is a [`VersionInfo`].
    async fn get_version(&self) -> Result<VersionInfo>;
}

#[derive(Clone)]
pub struct V1VersionClient {
    endpoint: Endpoint,
}

impl V1VersionClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: Endpoint::new(transport, V1_VERSION_PATH),
        }
    }
}

#[async_trait]
impl V1Version for V1VersionClient {
    async fn get_version(&self) -> Result<VersionInfo> {
        let (_, body) = self.endpoint.get().await?;
        body.json().await
    }
}
