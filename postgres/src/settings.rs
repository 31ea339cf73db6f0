use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PsqlSettings {
    pub ip: String,
    pub port: u32,
    pub db_name: Option<String>,
    pub username: String,
    pub password: String,
    pub max_connections: u32,
    pub root_cert: Option<String>,
    #[serde(default)]
    pub log_statements: PsqlLogStatements,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PsqlLogStatements {
    Enable,
    #[default]
    Disable,
}
