use std::fmt::{self, Display};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::{
    UserId, ValidationError, VesselName,
    validation_error::{NegativePassengersSnafu, PassengersOutOfRangeSnafu},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct VesselRecordId(i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    EnumString,
    EnumIter,
    AsRefStr,
    StrumDisplay,
)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OperationType {
    /// Boarding.
    Embarque,
    /// Disembarking.
    Desembarque,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VesselRecord {
    pub id: VesselRecordId,
    pub vessel_name: String,
    pub operation_type: OperationType,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    #[cfg_attr(feature = "utoipa", schema(value_type = String, example = "08:30"))]
    pub time: NaiveTime,
    pub passengers: u32,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
}

/// Unvalidated record fields as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VesselRecordInput {
    pub vessel_name: String,
    pub operation_type: OperationType,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    #[cfg_attr(feature = "utoipa", schema(value_type = String, example = "08:30"))]
    pub time: NaiveTime,
    pub passengers: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVesselRecord {
    pub vessel_name: VesselName,
    pub operation_type: OperationType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub passengers: u32,
    pub created_by: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateVesselRecord {
    pub id: VesselRecordId,
    pub vessel_name: VesselName,
    pub operation_type: OperationType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub passengers: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VesselRecordsQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub operation_type: Option<OperationType>,
}

impl VesselRecordId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl OperationType {
    pub fn label(&self) -> &'static str {
        match self {
            OperationType::Embarque => "Embarque",
            OperationType::Desembarque => "Desembarque",
        }
    }
}

impl VesselRecordInput {
    #[allow(clippy::type_complexity)]
    fn validated(
        self,
    ) -> Result<(VesselName, OperationType, NaiveDate, NaiveTime, u32), ValidationError> {
        let Self {
            vessel_name,
            operation_type,
            date,
            time,
            passengers,
        } = self;

        let vessel_name = VesselName::new(vessel_name)?;

        if passengers < 0 {
            return NegativePassengersSnafu { value: passengers }.fail();
        }
        if passengers > i64::from(i32::MAX) {
            return PassengersOutOfRangeSnafu { value: passengers }.fail();
        }

        Ok((vessel_name, operation_type, date, time, passengers as u32))
    }

    pub fn into_new_record(self, created_by: UserId) -> Result<NewVesselRecord, ValidationError> {
        let (vessel_name, operation_type, date, time, passengers) = self.validated()?;

        Ok(NewVesselRecord {
            vessel_name,
            operation_type,
            date,
            time,
            passengers,
            created_by,
        })
    }

    pub fn into_update(self, id: VesselRecordId) -> Result<UpdateVesselRecord, ValidationError> {
        let (vessel_name, operation_type, date, time, passengers) = self.validated()?;

        Ok(UpdateVesselRecord {
            id,
            vessel_name,
            operation_type,
            date,
            time,
            passengers,
        })
    }
}

impl VesselRecordsQuery {
    pub fn matches(&self, record: &VesselRecord) -> bool {
        self.start_date.is_none_or(|start| record.date >= start)
            && self.end_date.is_none_or(|end| record.date <= end)
            && self
                .operation_type
                .is_none_or(|op| record.operation_type == op)
    }
}

/// Orders records by date and then time, most recent first.
pub fn sort_records(records: &mut [VesselRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.time.cmp(&a.time)));
}

impl From<VesselRecordId> for i64 {
    fn from(value: VesselRecordId) -> Self {
        value.0
    }
}

impl Display for VesselRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Serializes times as `HH:MM`, accepts `HH:MM` and `HH:MM:SS`.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(&s), &"a time as HH:MM"))
    }
}
