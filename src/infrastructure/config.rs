use anyhow::Result;
use once_cell::sync::OnceCell;
use rand::{distr::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use std::{
    iter,
    path::{Path, PathBuf},
};

pub static GLOBAL_CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip)]
    path: PathBuf,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database_path")]
    pub database_path: String,
    #[serde(default = "default_secret")]
    pub secret: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub enable_playground: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: aozora_home().join("config.yml"),
            port: default_port(),
            database_path: default_database_path(),
            secret: default_secret(),
            log_level: default_log_level(),
            base_url: default_base_url(),
            enable_playground: false,
        }
    }
}

impl Config {
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Config> {
        let config_path = match path {
            Some(p) => PathBuf::new().join(p),
            None => aozora_home().join("config.yml"),
        };

        match std::fs::File::open(&config_path) {
            Ok(file) => {
                info!("Open config from {:?}", config_path);
                let mut cfg: Self = serde_yml::from_reader(file)?;
                cfg.path = config_path;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Config {
                    path: config_path,
                    ..Default::default()
                };
                cfg.save()?;
                info!("Write default config at {:?}", cfg.path);
                Ok(cfg)
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_yml::to_string(self)?)?;

        Ok(())
    }
}

fn aozora_home() -> PathBuf {
    match std::env::var("AOZORA_HOME") {
        Ok(path) => PathBuf::from(path),
        Err(_) => dirs::home_dir()
            .expect("should have home directory")
            .join(".aozora"),
    }
}

fn default_port() -> u16 {
    80
}

fn default_database_path() -> String {
    aozora_home().join("aozora.db").display().to_string()
}

fn default_secret() -> String {
    let mut rng = rand::rng();
    iter::repeat(())
        .map(|()| rng.sample(Alphanumeric))
        .map(char::from)
        .take(16)
        .collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}
