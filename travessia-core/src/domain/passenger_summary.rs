use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::{OperationType, VesselRecord};

/// Time window used when summarizing passengers.
#[derive(
    Debug,
    Default,
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
)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimeFilter {
    #[default]
    All,
    Today,
    Week,
    Month,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PassengerSummary {
    pub filter: TimeFilter,
    pub embarque: u64,
    pub desembarque: u64,
    pub total: u64,
    pub records: u64,
}

impl TimeFilter {
    /// Whether `date` falls inside the window ending at `today` (inclusive).
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        let start = match self {
            TimeFilter::All => return true,
            TimeFilter::Today => Some(today),
            TimeFilter::Week => today.checked_sub_days(Days::new(7)),
            TimeFilter::Month => today.checked_sub_months(Months::new(1)),
        };

        start.is_none_or(|start| date >= start) && date <= today
    }
}

impl PassengerSummary {
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a VesselRecord>,
        filter: TimeFilter,
        today: NaiveDate,
    ) -> Self {
        let mut summary = Self {
            filter,
            ..Default::default()
        };

        for r in records
            .into_iter()
            .filter(|r| filter.contains(r.date, today))
        {
            let passengers = u64::from(r.passengers);
            match r.operation_type {
                OperationType::Embarque => summary.embarque += passengers,
                OperationType::Desembarque => summary.desembarque += passengers,
            }
            summary.records += 1;
        }

        summary.total = summary.embarque + summary.desembarque;
        summary
    }
}
