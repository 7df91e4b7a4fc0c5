//! The HTTP seam. Everything above this module talks to the server through
//! [`Transport`] and never sees `reqwest` directly.

mod body;
mod http;

pub use body::ResponseBody;
pub use http::{HttpTransport, TransportSettings, ADMIN_SECRET_HEADER};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::Serialize;

use crate::error::{EngineError, Result};

/// Status line and headers of a successful response.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// A request body that has already been serialised.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPayload(Bytes);

impl RequestPayload {
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        serde_json::to_vec(value)
            .map(|bytes| Self(Bytes::from(bytes)))
            .map_err(EngineError::Encode)
    }

    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

/// Executes one HTTP call.
///
/// Implementations fail with [`EngineError::Status`] on any non-2xx answer,
/// carrying the raw body, and with a network or timeout error when the call
/// never completes. They never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Option<RequestPayload>,
    ) -> Result<(ResponseMeta, ResponseBody)>;
}
