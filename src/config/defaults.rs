pub const ENV_ENDPOINT: &str = "ENGINECTL_ENDPOINT";
pub const ENV_ADMIN_SECRET: &str = "ENGINECTL_ADMIN_SECRET";
pub const ENV_TIMEOUT: &str = "ENGINECTL_TIMEOUT";
pub const ENV_VERBOSE: &str = "ENGINECTL_VERBOSE";

pub fn default_endpoint() -> String {
    "http://localhost:8080".to_string()
}

pub fn default_timeout_secs() -> u64 {
    30
}

pub fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}
