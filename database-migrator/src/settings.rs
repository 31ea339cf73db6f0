use config::{Config, File};
use postgres::PsqlSettings;
use serde::Deserialize;
use travessia_core::{Environment, LogLevel};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub log_level: LogLevel,
    pub environment: Environment,
    pub postgres: PsqlSettings,
}

impl Settings {
    pub fn new() -> Result<Settings, config::ConfigError> {
        let environment = Environment::from_env();

        Config::builder()
            .add_source(File::with_name(&format!("config/{environment}")).required(true))
            .add_source(
                config::Environment::with_prefix("TRAVESSIA_DATABASE_MIGRATOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("environment", environment.as_ref())?
            .build()?
            .try_deserialize()
    }
}
