#![deny(warnings)]
#![deny(rust_2018_idioms)]

use snafu::ResultExt;
use tracing::info;
use tracing_subscriber::EnvFilter;
use web_api::{
    error::{StartupError, startup_error::ConfigSnafu},
    settings::Settings,
    startup::App,
};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let settings = Settings::new().context(ConfigSnafu)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_directive())),
        )
        .init();

    let app = App::build(&settings).await?;

    info!(port = app.port(), environment = %settings.environment, "starting travessia api...");

    app.run().await
}
