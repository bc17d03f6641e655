use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod paths;

pub use paths::DataPaths;

/// Environment tag that disables the randomized startup delay.
pub const DEV_ENV: &str = "dev";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub email_sender: String,
    #[serde(default)]
    pub email_password: String,
    #[serde(default)]
    pub email_receivers: Vec<String>,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// Exact "DD-MM-YYYY · HH:MM" labels, compared verbatim against the page.
    #[serde(default)]
    pub dates_to_track: Vec<String>,
    pub price_threshold: i64,

    pub url: String,
    pub host: String,

    #[serde(default = "default_env")]
    pub env: String,
    #[serde(default = "default_delay_min")]
    pub startup_delay_min_secs: u64,
    #[serde(default = "default_delay_max")]
    pub startup_delay_max_secs: u64,

    #[serde(default = "default_currency")]
    pub currency: String,

    /// Directory for history, logs and reports. Defaults to the config dir.
    #[serde(default)]
    pub data_dir: Option<String>,
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}
fn default_smtp_port() -> u16 {
    465
}
fn default_env() -> String {
    "prod".to_string()
}
fn default_delay_min() -> u64 {
    123
}
fn default_delay_max() -> u64 {
    1231
}
fn default_currency() -> String {
    "euros".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            email_sender: "sender@example.com".to_string(),
            email_password: String::new(),
            email_receivers: Vec::new(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            dates_to_track: Vec::new(),
            price_threshold: 100,
            url: "https://example.com/last-minute-flights".to_string(),
            host: "example.com".to_string(),
            env: default_env(),
            startup_delay_min_secs: default_delay_min(),
            startup_delay_max_secs: default_delay_max(),
            currency: default_currency(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rflightwatch")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rflightwatch")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rflightwatch.conf")
    }

    /// Load configuration from `path` (or the standard file), falling back
    /// to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        let cfg = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str::<Config>(&content)?
        } else {
            Config::default()
        };

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.startup_delay_min_secs > self.startup_delay_max_secs {
            return Err(AppError::Config(format!(
                "startup_delay_min_secs ({}) is greater than startup_delay_max_secs ({})",
                self.startup_delay_min_secs, self.startup_delay_max_secs
            )));
        }
        Ok(())
    }

    pub fn is_dev(&self) -> bool {
        self.env == DEV_ENV
    }

    /// Resolved data directory: explicit `data_dir`, else the config dir.
    pub fn data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(d) => crate::utils::path::expand_tilde(d),
            None => Self::config_dir(),
        }
    }

    pub fn paths(&self) -> DataPaths {
        DataPaths::new(self.data_dir())
    }

    /// Write a default configuration file to `path` and create the data dir.
    /// An existing file is left untouched unless `force` is set.
    /// Returns true when the file was written.
    pub fn init_all(path: &Path, data_dir: Option<String>, force: bool) -> AppResult<bool> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let written = if path.exists() && !force {
            false
        } else {
            let config = Config {
                data_dir: data_dir.clone(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(path)?;
            file.write_all(yaml.as_bytes())?;
            true
        };

        let mut cfg = Config::load(Some(path))?;
        if data_dir.is_some() {
            cfg.data_dir = data_dir;
        }
        fs::create_dir_all(cfg.data_dir())?;

        Ok(written)
    }
}
