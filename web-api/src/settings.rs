use chrono_tz::Tz;
use config::{Config, ConfigError, File};
use postgres::PsqlSettings;
use serde::Deserialize;
use travessia_core::{Environment, LogLevel};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub log_level: LogLevel,
    pub environment: Environment,
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
    pub api: ApiSettings,
    pub postgres: PsqlSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub ip: String,
    pub port: u16,
    pub num_workers: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwks_url: String,
    pub audience: String,
    pub issuer: Option<String>,
    /// Users logging in for the first time with one of these emails become admins.
    #[serde(default)]
    pub admin_emails: Vec<String>,
}

fn default_timezone() -> Tz {
    chrono_tz::America::Sao_Paulo
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let environment = environment.as_ref();

        Config::builder()
            .add_source(File::with_name(&format!("config/{environment}")).required(true))
            .add_source(File::with_name(&format!("config/{environment}.secret")).required(false))
            .add_source(
                config::Environment::with_prefix("TRAVESSIA_API")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("auth.admin_emails"),
            )
            .set_override("environment", environment)?
            .build()?
            .try_deserialize()
    }
}

impl ApiSettings {
    pub fn listener_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
