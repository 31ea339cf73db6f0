use std::net::TcpListener;

use actix_web::{
    HttpServer,
    dev::Server,
    middleware::{Compress, Condition},
    web::{self, Data},
};
use postgres::PostgresAdapter;
use snafu::{IntoError, ResultExt};
use tracing_actix_web::TracingLogger;
use travessia_core::Environment;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    ApiDoc, Database,
    error::{
        StartupError,
        error::InvalidParametersSnafu,
        startup_error::{BindSnafu, DatabaseSnafu, ServerSnafu},
    },
    routes,
    settings::Settings,
    states::{AuthState, Clock},
};

pub struct App {
    server: Server,
    port: u16,
}

impl App {
    pub async fn build(settings: &Settings) -> Result<Self, StartupError> {
        let postgres = PostgresAdapter::new(&settings.postgres)
            .await
            .context(DatabaseSnafu)?;

        Self::with_database(settings, postgres).await
    }

    pub async fn with_database<T>(settings: &Settings, database: T) -> Result<Self, StartupError>
    where
        T: Database + Clone,
    {
        let address = settings.api.listener_address();
        let listener = TcpListener::bind(&address).context(BindSnafu { address: &address })?;
        let port = listener
            .local_addr()
            .context(BindSnafu { address: &address })?
            .port();

        let auth_state = AuthState::new(&settings.auth).await?;

        let server = create_server(database, auth_state, listener, settings)?;

        Ok(App { server, port })
    }

    pub async fn run(self) -> Result<(), StartupError> {
        self.server.await.context(ServerSnafu)
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

fn create_server<T>(
    database: T,
    auth_state: AuthState,
    listener: TcpListener,
    settings: &Settings,
) -> Result<Server, StartupError>
where
    T: Database + Clone,
{
    let environment = settings.environment;
    let not_prod = environment != Environment::Production;
    let clock = Clock::new(settings.timezone);

    let mut server = HttpServer::new(move || {
        let scope = web::scope("/v1.0")
            .route("/user", web::get().to(routes::v1::user::get_user::<T>))
            .route("/users", web::get().to(routes::v1::user::users::<T>))
            .route(
                "/users/{user_id}/profile",
                web::put().to(routes::v1::user::update_user_profile::<T>),
            )
            .route("/vessels", web::get().to(routes::v1::vessel::vessels::<T>))
            .route(
                "/vessels",
                web::post().to(routes::v1::vessel::create_vessel::<T>),
            )
            .route(
                "/vessels/{vessel_id}",
                web::put().to(routes::v1::vessel::update_vessel::<T>),
            )
            .route(
                "/vessels/{vessel_id}",
                web::delete().to(routes::v1::vessel::delete_vessel::<T>),
            )
            .route(
                "/vessel_records",
                web::get().to(routes::v1::vessel_record::vessel_records::<T>),
            )
            .route(
                "/vessel_records",
                web::post().to(routes::v1::vessel_record::create_vessel_record::<T>),
            )
            .route(
                "/vessel_records/{vessel_record_id}",
                web::put().to(routes::v1::vessel_record::update_vessel_record::<T>),
            )
            .route(
                "/vessel_records/{vessel_record_id}",
                web::delete().to(routes::v1::vessel_record::delete_vessel_record::<T>),
            )
            .route(
                "/passenger_summary",
                web::get().to(routes::v1::passenger_summary::passenger_summary::<T>),
            )
            .route(
                "/reports/excel",
                web::get().to(routes::v1::report::excel_report::<T>),
            )
            .route(
                "/reports/pdf",
                web::get().to(routes::v1::report::pdf_report::<T>),
            );

        let app = actix_web::App::new()
            .app_data(Data::new(database.clone()))
            .app_data(Data::new(auth_state.clone()))
            .app_data(Data::new(clock))
            .app_data(web::JsonConfig::default().error_handler(|e, _req| {
                InvalidParametersSnafu {
                    message: e.to_string(),
                }
                .build()
                .into()
            }))
            .app_data(
                serde_qs::actix::QsQueryConfig::default().error_handler(|e, _req| {
                    InvalidParametersSnafu {
                        message: e.to_string(),
                    }
                    .build()
                    .into()
                }),
            )
            .app_data(web::PathConfig::default().error_handler(|e, _req| {
                InvalidParametersSnafu {
                    message: e.to_string(),
                }
                .build()
                .into()
            }))
            .wrap(Compress::default())
            .wrap(Condition::new(not_prod, actix_cors::Cors::permissive()))
            .wrap(TracingLogger::default())
            .service(scope);

        match environment {
            Environment::Production => app,
            _ => {
                let mut doc = ApiDoc::openapi();

                doc.paths.paths = doc
                    .paths
                    .paths
                    .into_iter()
                    .map(|(path, item)| (format!("/v1.0{path}"), item))
                    .collect();

                let swagger = SwaggerUi::new("/swagger-ui/{_:.*}").config(
                    utoipa_swagger_ui::Config::default()
                        .try_it_out_enabled(true)
                        .persist_authorization(true),
                );

                app.service(swagger.url("/api-doc/openapi.json", doc))
            }
        }
    })
    .listen(listener)
    .map_err(|e| ServerSnafu.into_error(e))?;

    if let Some(workers) = settings.api.num_workers {
        server = server.workers(workers as usize);
    }

    Ok(server.run())
}
