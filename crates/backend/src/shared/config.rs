use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::PathBuf;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// EnvFilter directives; RUST_LOG overrides
    pub filter: String,
    /// Log file path; relative paths resolve against the executable directory
    pub file: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

impl ListConfig {
    /// Requested page size, or the default, clamped to 1..=max
    pub fn page_size(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size.max(1))
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[logging]
filter = "info"
file = "target/logs/backend.log"

[list]
default_page_size = 10
max_page_size = 100
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return Ok(toml::from_str(&contents)?);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

/// Load once and keep for the lifetime of the process
pub fn init_config() -> anyhow::Result<&'static Config> {
    CONFIG.get_or_try_init(load_config)
}

/// List settings; defaults until `init_config` has run
pub fn list_config() -> ListConfig {
    CONFIG.get().map(|c| c.list).unwrap_or_default()
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
}

/// Resolve a config path relative to the executable directory
pub fn resolve_path(path: &str) -> PathBuf {
    let p = PathBuf::from(path);
    if p.is_absolute() {
        return p;
    }
    match exe_dir() {
        Some(dir) => dir.join(p),
        None => p,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.list, ListConfig::default());
    }

    #[test]
    fn test_list_section_is_optional() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [logging]
            filter = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.file, None);
        assert_eq!(config.list.max_page_size, 100);
    }

    #[test]
    fn test_page_size_clamped() {
        let list = ListConfig::default();
        assert_eq!(list.page_size(None), 10);
        assert_eq!(list.page_size(Some(0)), 1);
        assert_eq!(list.page_size(Some(500)), 100);
        assert_eq!(list.page_size(Some(25)), 25);
    }
}
