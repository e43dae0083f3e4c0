use crate::configs::partitioner::PartitionerConfig;
use crate::error::Error;
use crate::validatable::Validatable;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::env;
use std::path::Path;
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "configs/partitioner.toml";
const CONFIG_PATH_ENV: &str = "PARTITIONER_CONFIG_PATH";
const ENV_PREFIX: &str = "PARTITIONER_";

pub trait ConfigProvider {
    fn load_config(&self) -> Result<PartitionerConfig, Error>;
}

#[derive(Debug)]
pub struct FileConfigProvider {
    path: String,
}

impl FileConfigProvider {
    pub fn new(path: String) -> Self {
        Self { path }
    }

    /// Uses the path from `PARTITIONER_CONFIG_PATH` or the default one.
    pub fn from_env() -> Self {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::new(path)
    }
}

impl ConfigProvider for FileConfigProvider {
    fn load_config(&self) -> Result<PartitionerConfig, Error> {
        info!("Loading config from path: '{}'...", self.path);

        if !Path::new(&self.path).is_file() {
            return Err(Error::CannotLoadConfiguration(format!(
                "Cannot find configuration file at path: '{}'.",
                self.path,
            )));
        }

        let extension = self.path.split('.').next_back().unwrap_or("");
        if extension != "toml" {
            return Err(Error::CannotLoadConfiguration(format!(
                "Invalid file extension: {extension}, only .toml is supported."
            )));
        }

        let config: PartitionerConfig = Figment::from(Serialized::defaults(
            PartitionerConfig::default(),
        ))
        .merge(Toml::file(&self.path))
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["config_path"]).split("__"))
        .extract()
        .map_err(|error| {
            Error::CannotLoadConfiguration(format!("Failed to load configuration: {error}"))
        })?;

        config.validate()?;
        info!("Config loaded from path: '{}'", self.path);
        info!("Using Config: {}", config);
        Ok(config)
    }
}
