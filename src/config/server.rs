use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub admin_secret: Option<String>,
    #[serde(default)]
    pub timeout: Option<u64>,
    /// Extra headers sent with every request, e.g. a role to act as.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LogConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}
