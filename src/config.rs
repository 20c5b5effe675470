use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// How the acceptor schedules accepted connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcurrencyMode {
    /// One connection is read, handled and answered before the next accept.
    #[default]
    Sequential,
    /// Every accepted connection runs on its own task.
    PerConnection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub backlog: u32,
    /// Upper bound for the single read performed on each connection.
    pub read_buffer_size: usize,
    pub concurrency: ConcurrencyMode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Directory request URIs are resolved against.
    pub root: PathBuf,
    /// Document served when the URI names the root itself.
    pub index: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8888,
            backlog: 5,
            read_buffer_size: 1024,
            concurrency: ConcurrencyMode::Sequential,
        }
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            index: "index.html".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// See [`Config::load_with`] for the keys that are consulted.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` to read settings.
    ///
    /// `CRUDE_CONFIG` names an optional YAML file; `CRUDE_HOST`, `CRUDE_PORT`
    /// and `CRUDE_ROOT` then override individual fields.
    pub fn load_with<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match lookup("CRUDE_CONFIG") {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path))?;
                Self::from_yaml(&text)
                    .with_context(|| format!("invalid config file {}", path))?
            }
            None => Self::default(),
        };

        if let Some(host) = lookup("CRUDE_HOST") {
            cfg.server.host = host;
        }

        if let Some(port) = lookup("CRUDE_PORT") {
            cfg.server.port = port
                .parse()
                .with_context(|| format!("invalid CRUDE_PORT value {:?}", port))?;
        }

        if let Some(root) = lookup("CRUDE_ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(text)?)
    }
}
