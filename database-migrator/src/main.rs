#![deny(warnings)]
#![deny(rust_2018_idioms)]

use settings::Settings;
use snafu::{Location, ResultExt, Snafu};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod settings;

#[derive(Snafu)]
enum Error {
    #[snafu(display("Failed to read settings"))]
    Config {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: config::ConfigError,
    },
    #[snafu(display("Failed to migrate the database"))]
    Database {
        #[snafu(implicit)]
        location: Location,
        source: postgres::Error,
    },
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", snafu::Report::from_error(self))
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let settings = Settings::new().context(ConfigSnafu)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_directive()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(environment = %settings.environment, "running database migrations");

    postgres::PostgresAdapter::new(&settings.postgres)
        .await
        .context(DatabaseSnafu)?
        .do_migrations()
        .await
        .context(DatabaseSnafu)?;

    info!("database migrations completed");

    Ok(())
}
