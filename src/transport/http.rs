use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Url};
use tokio::time::{timeout, Duration};
use tracing::{debug, warn};

use super::{RequestPayload, ResponseBody, ResponseMeta, Transport};
use crate::error::{EngineError, Result};

pub const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

#[derive(Debug, Clone)]
pub struct TransportSettings {
    pub endpoint: String,
    pub admin_secret: Option<String>,
    /// Applies to connecting, to waiting for response headers and to each
    /// gap between body chunks. Never to the body as a whole.
    pub timeout: Option<Duration>,
    pub headers: Vec<(String, String)>,
}

impl TransportSettings {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            admin_secret: None,
            timeout: None,
            headers: Vec::new(),
        }
    }
}

/// [`Transport`] over `reqwest`, rooted at the server's base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new(settings: TransportSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(secret) = &settings.admin_secret {
            let mut value = HeaderValue::from_str(secret).map_err(|e| {
                EngineError::Config(format!("Invalid admin secret header: {}", e))
            })?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(ADMIN_SECRET_HEADER), value);
        }
        for (name, value) in &settings.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| EngineError::Config(format!("Invalid header name {}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| EngineError::Config(format!("Invalid header value for {}: {}", name, e)))?;
            headers.insert(name, value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(limit) = settings.timeout {
            builder = builder.connect_timeout(limit);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: parse_base_url(&settings.endpoint)?,
            timeout: settings.timeout,
        })
    }

    fn url_for(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| EngineError::Config(format!("Invalid request path {}: {}", path, e)))
    }
}

/// Parses the endpoint so that joining `v1/query` keeps any path prefix the
/// server is mounted under.
fn parse_base_url(endpoint: &str) -> Result<Url> {
    let mut normalized = endpoint.trim().trim_end_matches('/').to_string();
    normalized.push('/');
    Url::parse(&normalized)
        .map_err(|e| EngineError::Config(format!("Invalid endpoint {}: {}", endpoint, e)))
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Option<RequestPayload>,
    ) -> Result<(ResponseMeta, ResponseBody)> {
        let url = self.url_for(path)?;
        debug!(%method, %url, "sending request");

        let mut request = self.client.request(method, url);
        if let Some(payload) = payload {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(payload.into_bytes());
        }

        let response = match self.timeout {
            Some(limit) => timeout(limit, request.send())
                .await
                .map_err(|_| EngineError::Timeout)??,
            None => request.send().await?,
        };

        let status = response.status();
        let headers = response.headers().clone();
        if !status.is_success() {
            let body = match self.timeout {
                Some(limit) => timeout(limit, response.text())
                    .await
                    .map_err(|_| EngineError::Timeout)??,
                None => response.text().await?,
            };
            warn!(status = status.as_u16(), path, "server rejected request");
            return Err(EngineError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let mut body =
            ResponseBody::from_stream(response.bytes_stream().map(|chunk| chunk.map_err(EngineError::from)));
        if let Some(limit) = self.timeout {
            body = body.with_idle_timeout(limit);
        }
        Ok((ResponseMeta { status, headers }, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_keeps_path_prefix() {
        let base = parse_base_url("https://example.com/engine/").unwrap();
        assert_eq!(
            base.join("v1/query").unwrap().as_str(),
            "https://example.com/engine/v1/query"
        );

        let bare = parse_base_url("http://localhost:8080").unwrap();
        assert_eq!(
            bare.join("v1/version").unwrap().as_str(),
            "http://localhost:8080/v1/version"
        );
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        let err = HttpTransport::new(TransportSettings::new("not a url")).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
