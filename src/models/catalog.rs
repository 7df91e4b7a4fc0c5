use serde::Serialize;
use serde_json::value::RawValue;

/// Arguments of `set_catalog_state`. `state` is forwarded as-is.
#[derive(Debug, Clone, Serialize)]
pub struct SetCatalogStateArgs {
    #[serde(rename = "type")]
    pub key: String,
    pub state: Box<RawValue>,
}
