use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub remote_api: RemoteApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RemoteApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Переменная окружения, переопределяющая адрес удалённого API
pub const BASE_URL_ENV: &str = "DCARBON_API_BASE_URL";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[remote_api]
base_url = "https://services.dcarbon.solutions/api"
timeout_secs = 30
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `DCARBON_API_BASE_URL` overrides `remote_api.base_url` in both cases.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_file_or_default()?;
    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        apply_base_url_override(&mut config, &base_url);
    }
    Ok(config)
}

fn load_file_or_default() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

fn apply_base_url_override(config: &mut Config, base_url: &str) {
    let base_url = base_url.trim();
    if base_url.is_empty() {
        return;
    }
    tracing::info!("Remote API base URL overridden by {}: {}", BASE_URL_ENV, base_url);
    config.remote_api.base_url = base_url.to_string();
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
