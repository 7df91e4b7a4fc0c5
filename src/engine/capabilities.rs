//! Operation sets shared between API generations.
//!
//! Every trait here sits on top of [`GenericSend`]: a method builds one
//! `{type, version, args}` envelope and sends it to whatever endpoint the
//! implementing sub-client is bound to. Sub-clients opt into a set with an
//! empty `impl` block.

use async_trait::async_trait;
use serde_json::value::RawValue;
use tracing::debug;

use crate::error::Result;
use crate::models::{EmptyArgs, RequestBody, SetCatalogStateArgs, SourceKind, V2ReplaceMetadataArgs};
use crate::transport::{RequestPayload, ResponseBody, ResponseMeta};

/// The send primitive: one call, no decoding.
#[async_trait]
pub trait GenericSend: Send + Sync {
    async fn send(&self, payload: RequestPayload) -> Result<(ResponseMeta, ResponseBody)>;
}

/// Serialises `body`, sends it and hands back the undecoded response.
pub async fn dispatch<S>(sender: &S, body: RequestBody) -> Result<ResponseBody>
where
    S: GenericSend + ?Sized,
{
    debug!(
        request_type = %body.request_type,
        version = ?body.version,
        "dispatching request"
    );
    let payload = RequestPayload::json(&body)?;
    let (_, response) = sender.send(payload).await?;
    Ok(response)
}

/// Atomic batching. Only endpoints that understand the `bulk` type get it.
#[async_trait]
pub trait BulkSend: GenericSend {
    /// Sends `requests` as one transaction. The server runs them in order and
    /// rolls all of them back if any fails; the response is an array of
    /// results in input order. An empty list is sent as-is.
    async fn bulk(&self, requests: Vec<RequestBody>) -> Result<ResponseBody> {
        debug!(count = requests.len(), "sending bulk request");
        dispatch(self, RequestBody::bulk(requests)).await
    }
}

/// Metadata verbs understood identically by every generation.
#[async_trait]
pub trait CommonMetadataOperations: GenericSend {
    async fn export_metadata(&self) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("export_metadata", EmptyArgs {})?).await
    }

    async fn clear_metadata(&self) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("clear_metadata", EmptyArgs {})?).await
    }

    async fn reload_metadata(&self) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("reload_metadata", EmptyArgs {})?).await
    }

    async fn drop_inconsistent_metadata(&self) -> Result<ResponseBody> {
        dispatch(
            self,
            RequestBody::new("drop_inconsistent_metadata", EmptyArgs {})?,
        )
        .await
    }

    async fn replace_metadata(&self, metadata: Box<RawValue>) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("replace_metadata", metadata)?).await
    }

    async fn get_inconsistent_metadata(&self) -> Result<ResponseBody> {
        dispatch(
            self,
            RequestBody::new("get_inconsistent_metadata", EmptyArgs {})?,
        )
        .await
    }
}

/// Verbs that only exist in the v2 metadata generation.
#[async_trait]
pub trait V2CommonMetadataOperations: GenericSend {
    async fn v2_replace_metadata(&self, args: V2ReplaceMetadataArgs) -> Result<ResponseBody> {
        dispatch(
            self,
            RequestBody::new("replace_metadata", args)?.with_version(2),
        )
        .await
    }

    /// Metadata together with its `resource_version`.
    async fn v2_export_metadata(&self) -> Result<ResponseBody> {
        dispatch(
            self,
            RequestBody::new("export_metadata", EmptyArgs {})?.with_version(2),
        )
        .await
    }
}

/// Opaque state blob the server keeps on behalf of its tools.
#[async_trait]
pub trait CatalogStateOperations: GenericSend {
    /// Stores `state` under `key`. The state is forwarded byte-for-byte.
    async fn set(&self, key: &str, state: Box<RawValue>) -> Result<ResponseBody> {
        let args = SetCatalogStateArgs {
            key: key.to_string(),
            state,
        };
        dispatch(self, RequestBody::new("set_catalog_state", args)?).await
    }

    /// The whole catalog state.
    async fn get(&self) -> Result<ResponseBody> {
        dispatch(self, RequestBody::new("get_catalog_state", EmptyArgs {})?).await
    }
}

/// Which source kinds a query generation serves.
pub trait SourceCapabilities {
    fn supported_source_kinds(&self) -> &'static [SourceKind];

    fn supports(&self, kind: SourceKind) -> bool {
        self.supported_source_kinds().contains(&kind)
    }
}
