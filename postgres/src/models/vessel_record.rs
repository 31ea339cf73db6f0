use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use travessia_core::{OperationType, UserId, VesselRecordId};

use crate::error::{Error, error::ConversionSnafu};

#[derive(Debug, Clone, FromRow)]
pub struct VesselRecord {
    pub vessel_record_id: VesselRecordId,
    pub vessel_name: String,
    pub operation_type: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub passengers: i32,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
}

impl TryFrom<VesselRecord> for travessia_core::VesselRecord {
    type Error = Error;

    fn try_from(v: VesselRecord) -> Result<Self, Self::Error> {
        let VesselRecord {
            vessel_record_id,
            vessel_name,
            operation_type,
            date,
            time,
            passengers,
            created_at,
            created_by,
        } = v;

        Ok(Self {
            id: vessel_record_id,
            vessel_name,
            operation_type: operation_type
                .parse::<OperationType>()
                .map_err(|_| ConversionSnafu { value: operation_type.clone() }.build())?,
            date,
            time,
            passengers: u32::try_from(passengers)
                .map_err(|_| ConversionSnafu { value: passengers.to_string() }.build())?,
            created_at,
            created_by,
        })
    }
}
