use async_trait::async_trait;

use crate::*;

#[async_trait]
pub trait WebApiInboundPort {
    async fn add_vessel(&self, vessel: NewVessel) -> Result<Vessel>;
    async fn update_vessel(&self, vessel: UpdateVessel) -> Result<Vessel>;
    async fn delete_vessel(&self, id: VesselId) -> Result<()>;
    async fn add_vessel_record(&self, record: NewVesselRecord) -> Result<VesselRecord>;
    async fn update_vessel_record(&self, record: UpdateVesselRecord) -> Result<VesselRecord>;
    async fn delete_vessel_record(&self, id: VesselRecordId) -> Result<()>;
    /// Stores the user on first login, otherwise refreshes email and display name while
    /// keeping the stored profile.
    async fn login_user(&self, user: NewUser) -> Result<User>;
    async fn update_user_profile(&self, id: &UserId, profile: Profile) -> Result<User>;
}
