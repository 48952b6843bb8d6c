use std::env;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::configs::normalize_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub migration_path: Option<String>,
    pub clean_start: bool,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub database: Database,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_environment(Self::environment())
    }

    /// Variables look like `ROLLCALL_DATABASE__CLEAN_START=true`.
    pub fn environment() -> Environment {
        Environment::with_prefix("ROLLCALL")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        let mut settings: Settings = Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        if let Some(migrate) = &settings.database.migration_path {
            if Path::new(migrate).is_dir() {
                let migrate_path = normalize_path(migrate)
                    .map_err(|e| ConfigError::Message(e.to_string()))?
                    .to_string_lossy()
                    .to_string();

                settings.database.migration_path = Some(migrate_path);
            } else {
                tracing::warn!(path = %migrate, "migration path is not a directory, skipping migrations");
                settings.database.migration_path = None;
            }
        }

        Ok(settings)
    }
}
