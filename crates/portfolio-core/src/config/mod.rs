//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Portfolio configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body (multipart uploads included)
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory served under `/public`
    pub public_dir: PathBuf,
    /// Directory uploaded images are written to
    pub upload_dir: PathBuf,
    /// Start with the sample project in the list
    pub seed_demo_project: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8000,
            max_upload_bytes: 32 << 20,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            upload_dir: PathBuf::from("public/uploads"),
            seed_demo_project: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

/// Every key accepted by `get` and `set`
pub const KEYS: [&str; 6] = [
    "server.host",
    "server.port",
    "server.max_upload_bytes",
    "storage.public_dir",
    "storage.upload_dir",
    "storage.seed_demo_project",
];

impl ServerConfig {
    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("PORTFOLIO_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("portfolio")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, or use defaults if it doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(config)
        } else {
            // Return default config without creating file
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(anyhow!("server.host must not be empty"));
        }
        if self.server.max_upload_bytes == 0 {
            return Err(anyhow!("server.max_upload_bytes must be greater than 0"));
        }
        if self.storage.public_dir.as_os_str().is_empty() {
            return Err(anyhow!("storage.public_dir must not be empty"));
        }
        if self.storage.upload_dir.as_os_str().is_empty() {
            return Err(anyhow!("storage.upload_dir must not be empty"));
        }
        if !self.storage.upload_dir.starts_with(&self.storage.public_dir) {
            return Err(anyhow!(
                "storage.upload_dir ({}) must be inside storage.public_dir ({})",
                self.storage.upload_dir.display(),
                self.storage.public_dir.display()
            ));
        }
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            // Server settings
            "server.host" => Ok(self.server.host.clone()),
            "server.port" => Ok(self.server.port.to_string()),
            "server.max_upload_bytes" => Ok(self.server.max_upload_bytes.to_string()),

            // Storage settings
            "storage.public_dir" => Ok(self.storage.public_dir.display().to_string()),
            "storage.upload_dir" => Ok(self.storage.upload_dir.display().to_string()),
            "storage.seed_demo_project" => Ok(self.storage.seed_demo_project.to_string()),

            _ => Err(anyhow!(
                "Unknown configuration key: {}. Use `portfolio config list` to see available keys.",
                key
            )),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "server.host" => {
                if value.trim().is_empty() {
                    return Err(anyhow!("server.host must not be empty"));
                }
                self.server.host = value.trim().to_string();
            }
            "server.port" => {
                self.server.port = value
                    .parse()
                    .with_context(|| format!("Invalid port value: {}", value))?;
            }
            "server.max_upload_bytes" => {
                let limit: usize = value
                    .parse()
                    .with_context(|| format!("Invalid max_upload_bytes value: {}", value))?;
                if limit == 0 {
                    return Err(anyhow!("server.max_upload_bytes must be greater than 0"));
                }
                self.server.max_upload_bytes = limit;
            }
            "storage.public_dir" | "storage.upload_dir" => {
                if value.trim().is_empty() {
                    return Err(anyhow!("{} must not be empty", key));
                }
                let dir = PathBuf::from(value.trim());
                if key == "storage.public_dir" {
                    self.storage.public_dir = dir;
                } else {
                    self.storage.upload_dir = dir;
                }
            }
            "storage.seed_demo_project" => {
                self.storage.seed_demo_project = value
                    .parse()
                    .with_context(|| format!("Invalid seed_demo_project value: {} (use true or false)", value))?;
            }

            _ => {
                return Err(anyhow!(
                    "Unknown configuration key: {}. Use `portfolio config list` to see available keys.",
                    key
                ));
            }
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        KEYS.into_iter()
            .map(|key| {
                let value = self.get(key)?;
                Ok((key.to_string(), value))
            })
            .collect()
    }

    /// Reset configuration to defaults
    pub fn reset() -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
        }
        Ok(())
    }
}
