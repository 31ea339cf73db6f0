use actix_web::web;
use serde::{Deserialize, Serialize};
use serde_qs::actix::QsQuery as Query;
use travessia_core::{PassengerSummary, TimeFilter, VesselRecordsQuery};
use utoipa::IntoParams;

use crate::{
    Database, error::Result, extractors::AuthProfile, response::Response, states::Clock,
};

#[derive(Debug, Default, Clone, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PassengerSummaryParams {
    pub filter: Option<TimeFilter>,
}

/// Returns boarding and disembarking passenger totals for the selected time window.
#[utoipa::path(
    get,
    path = "/passenger_summary",
    params(PassengerSummaryParams),
    responses(
        (status = 200, description = "passenger totals", body = PassengerSummary),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    ),
    tag = "PassengerSummary",
)]
#[tracing::instrument(skip(db, clock))]
pub async fn passenger_summary<T: Database + 'static>(
    db: web::Data<T>,
    clock: web::Data<Clock>,
    profile: AuthProfile,
    params: Query<PassengerSummaryParams>,
) -> Result<Response<PassengerSummary>> {
    profile.login(db.get_ref()).await?;

    let records = db.vessel_records(VesselRecordsQuery::default()).await?;
    let filter = params.filter.unwrap_or_default();

    Ok(Response::new(PassengerSummary::from_records(
        &records,
        filter,
        clock.today(),
    )))
}
