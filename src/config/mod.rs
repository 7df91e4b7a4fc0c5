mod defaults;
mod server;
mod validation;

use crate::cli::Args;
use crate::transport::TransportSettings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use defaults::{ENV_ADMIN_SECRET, ENV_ENDPOINT, ENV_TIMEOUT, ENV_VERBOSE};
pub use server::{LogConfig, ServerConfig};
pub use validation::{expand_env_map, expand_env_refs};

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub admin_secret: Option<String>,
    /// `None` waits forever.
    pub timeout: Option<Duration>,
    pub headers: Vec<(String, String)>,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        let file_config = match &args.config {
            Some(path) => FileConfig::load_from(path)?,
            None => FileConfig::load()?,
        };
        Self::resolve(args, |name| env::var(name).ok(), file_config)
    }

    /// Precedence for every setting: CLI args > environment > config file >
    /// default.
    pub fn resolve<F>(args: &Args, lookup: F, file_config: FileConfig) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server = file_config.server;

        let endpoint = args
            .endpoint
            .clone()
            .or_else(|| lookup(ENV_ENDPOINT))
            .or_else(|| server.endpoint.as_deref().map(|e| expand_env_refs(e, &lookup)))
            .unwrap_or_else(defaults::default_endpoint);
        let endpoint = endpoint.trim().trim_end_matches('/').to_string();
        if endpoint.is_empty() {
            anyhow::bail!("endpoint must not be empty");
        }

        let admin_secret = args
            .admin_secret
            .clone()
            .or_else(|| lookup(ENV_ADMIN_SECRET))
            .or_else(|| {
                server
                    .admin_secret
                    .as_deref()
                    .map(|s| expand_env_refs(s, &lookup))
            })
            .filter(|s| !s.is_empty());

        let timeout_secs = match args.timeout {
            Some(secs) => secs,
            None => match lookup(ENV_TIMEOUT) {
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("{} must be a number of seconds, got {:?}", ENV_TIMEOUT, raw))?,
                None => server.timeout.unwrap_or_else(defaults::default_timeout_secs),
            },
        };
        let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        let verbose = args.verbose
            || lookup(ENV_VERBOSE)
                .map(|v| defaults::is_truthy(&v))
                .or(file_config.log.verbose)
                .unwrap_or(false);

        let mut headers: Vec<(String, String)> =
            expand_env_map(&server.headers, &lookup).into_iter().collect();
        headers.sort();

        Ok(Config {
            endpoint,
            admin_secret,
            timeout,
            headers,
            verbose,
        })
    }

    pub fn transport_settings(&self) -> TransportSettings {
        TransportSettings {
            endpoint: self.endpoint.clone(),
            admin_secret: self.admin_secret.clone(),
            timeout: self.timeout,
            headers: self.headers.clone(),
        }
    }
}

impl FileConfig {
    /// First config file found wins. No file at all is not an error.
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(FileConfig::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );
        let config = if is_yaml {
            serde_yaml::from_str(&contents).with_context(|| {
                format!("Failed to parse YAML config file: {}", path.display())
            })?
        } else {
            serde_json::from_str(&contents).with_context(|| {
                format!("Failed to parse JSON config file: {}", path.display())
            })?
        };
        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".enginectl.yaml"),
            PathBuf::from(".enginectl.yml"),
            PathBuf::from(".enginectl.json"),
        ];

        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("enginectl");
            paths.push(config_dir.join("enginectl.yaml"));
            paths.push(config_dir.join("enginectl.yml"));
            paths.push(config_dir.join("enginectl.json"));
        }

        paths
    }
}
