use async_trait::async_trait;

use crate::*;

#[async_trait]
pub trait WebApiOutboundPort {
    /// Vessels ordered by name.
    async fn vessels(&self) -> Result<Vec<Vessel>>;
    async fn vessel(&self, id: VesselId) -> Result<Option<Vessel>>;
    /// Records matching `query`, most recent first.
    async fn vessel_records(&self, query: VesselRecordsQuery) -> Result<Vec<VesselRecord>>;
    async fn vessel_record(&self, id: VesselRecordId) -> Result<Option<VesselRecord>>;
    async fn user(&self, id: &UserId) -> Result<Option<User>>;
    async fn users(&self) -> Result<Vec<User>>;
}
