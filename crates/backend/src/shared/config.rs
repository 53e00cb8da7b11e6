use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Where the sales spreadsheet lives and how to read it
#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    pub path: String,
    pub sheet: String,
    /// Rows above the header row that are ignored
    #[serde(default = "default_skip_rows")]
    pub skip_rows: usize,
    /// Header of the unique order key column
    #[serde(default = "default_key_column")]
    pub key_column: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_skip_rows() -> usize {
    1
}

fn default_key_column() -> String {
    "订单号".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[dataset]
path = "data/supermarket_sales.xlsx"
sheet = "销售数据"
skip_rows = 1
key_column = "订单号"

[server]
port = 3000
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve the dataset path
///
/// Absolute paths are used as is. Relative paths are tried next to the
/// executable first, then relative to the working directory.
pub fn get_dataset_path(config: &DatasetConfig) -> PathBuf {
    let dataset_path = Path::new(&config.path);

    if dataset_path.is_absolute() {
        return dataset_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(dataset_path);
            if resolved_path.exists() {
                return resolved_path;
            }
        }
    }

    PathBuf::from(&config.path)
}
