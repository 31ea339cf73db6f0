use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

/// Deployment environment, selected through `APP_ENVIRONMENT`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, EnumString, AsRefStr, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    Local,
    Development,
    Production,
    #[default]
    Test,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Environment {
    /// Reads `APP_ENVIRONMENT`, falling back to [`Environment::Test`] when unset or unknown.
    pub fn from_env() -> Self {
        std::env::var("APP_ENVIRONMENT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

impl LogLevel {
    /// Default directive for a `tracing_subscriber::EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
