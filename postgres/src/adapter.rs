use async_trait::async_trait;
use sqlx::{
    ConnectOptions, PgPool,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};
use tracing::info;
use travessia_core::{
    NewUser, NewVessel, NewVesselRecord, Profile, UpdateVessel, UpdateVesselRecord, User, UserId,
    Vessel, VesselId, VesselRecord, VesselRecordId, VesselRecordsQuery, WebApiInboundPort,
    WebApiOutboundPort,
};

use crate::{PsqlLogStatements, PsqlSettings, error::Result};

#[derive(Debug, Clone)]
pub struct PostgresAdapter {
    pub(crate) pool: PgPool,
}

impl PostgresAdapter {
    pub async fn new(settings: &PsqlSettings) -> Result<PostgresAdapter> {
        let mut opts = PgConnectOptions::new()
            .username(&settings.username)
            .password(&settings.password)
            .host(&settings.ip)
            .port(settings.port as u16);

        if let Some(db_name) = &settings.db_name {
            opts = opts.database(db_name);
        }

        if let Some(root_cert_path) = &settings.root_cert {
            opts = opts
                .ssl_root_cert(root_cert_path)
                .ssl_mode(PgSslMode::VerifyFull);
        }

        if settings.log_statements == PsqlLogStatements::Disable {
            opts = opts.disable_statement_logging();
        }

        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections.max(1))
            .connect_with(opts)
            .await?;

        Ok(PostgresAdapter { pool })
    }

    /// Wraps an already established pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn do_migrations(&self) -> Result<()> {
        sqlx::migrate!().run(&self.pool).await?;
        info!("database migrations completed");
        Ok(())
    }
}

#[async_trait]
impl WebApiOutboundPort for PostgresAdapter {
    async fn vessels(&self) -> travessia_core::Result<Vec<Vessel>> {
        Ok(self.vessels_impl().await?)
    }

    async fn vessel(&self, id: VesselId) -> travessia_core::Result<Option<Vessel>> {
        Ok(self.vessel_impl(id).await?)
    }

    async fn vessel_records(
        &self,
        query: VesselRecordsQuery,
    ) -> travessia_core::Result<Vec<VesselRecord>> {
        Ok(self.vessel_records_impl(query).await?)
    }

    async fn vessel_record(
        &self,
        id: VesselRecordId,
    ) -> travessia_core::Result<Option<VesselRecord>> {
        Ok(self.vessel_record_impl(id).await?)
    }

    async fn user(&self, id: &UserId) -> travessia_core::Result<Option<User>> {
        Ok(self.user_impl(id).await?)
    }

    async fn users(&self) -> travessia_core::Result<Vec<User>> {
        Ok(self.users_impl().await?)
    }
}

#[async_trait]
impl WebApiInboundPort for PostgresAdapter {
    async fn add_vessel(&self, vessel: NewVessel) -> travessia_core::Result<Vessel> {
        Ok(self.add_vessel_impl(vessel).await?)
    }

    async fn update_vessel(&self, vessel: UpdateVessel) -> travessia_core::Result<Vessel> {
        Ok(self.update_vessel_impl(vessel).await?)
    }

    async fn delete_vessel(&self, id: VesselId) -> travessia_core::Result<()> {
        Ok(self.delete_vessel_impl(id).await?)
    }

    async fn add_vessel_record(
        &self,
        record: NewVesselRecord,
    ) -> travessia_core::Result<VesselRecord> {
        Ok(self.add_vessel_record_impl(record).await?)
    }

    async fn update_vessel_record(
        &self,
        record: UpdateVesselRecord,
    ) -> travessia_core::Result<VesselRecord> {
        Ok(self.update_vessel_record_impl(record).await?)
    }

    async fn delete_vessel_record(&self, id: VesselRecordId) -> travessia_core::Result<()> {
        Ok(self.delete_vessel_record_impl(id).await?)
    }

    async fn login_user(&self, user: NewUser) -> travessia_core::Result<User> {
        Ok(self.login_user_impl(user).await?)
    }

    async fn update_user_profile(
        &self,
        id: &UserId,
        profile: Profile,
    ) -> travessia_core::Result<User> {
        Ok(self.update_user_profile_impl(id, profile).await?)
    }
}

pub(crate) fn convert_models<D, I, C>(input: D) -> Result<Vec<C>>
where
    D: IntoIterator<Item = I>,
    C: TryFrom<I, Error = crate::Error>,
{
    input.into_iter().map(C::try_from).collect()
}
