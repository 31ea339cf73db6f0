use chrono::{DateTime, Utc};
use sqlx::FromRow;
use travessia_core::{UserId, VesselId};

#[derive(Debug, Clone, FromRow)]
pub struct Vessel {
    pub vessel_id: VesselId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
}

impl From<Vessel> for travessia_core::Vessel {
    fn from(v: Vessel) -> Self {
        let Vessel {
            vessel_id,
            name,
            created_at,
            created_by,
        } = v;

        Self {
            id: vessel_id,
            name,
            created_at,
            created_by,
        }
    }
}
