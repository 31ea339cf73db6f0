use actix_web::web;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_qs::actix::QsQuery as Query;
use travessia_core::{
    OperationType, User, VesselRecord, VesselRecordId, VesselRecordInput, VesselRecordsQuery,
};
use utoipa::IntoParams;

use crate::{
    Database,
    error::{
        Result,
        error::{ForbiddenSnafu, StartAfterEndSnafu, VesselRecordNotFoundSnafu},
    },
    extractors::AuthProfile,
    response::Response,
};

#[derive(Debug, Default, Clone, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct VesselRecordsParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub operation_type: Option<OperationType>,
}

impl VesselRecordsParams {
    pub fn to_query(&self) -> Result<VesselRecordsQuery> {
        to_query(self.start_date, self.end_date, self.operation_type)
    }
}

pub(crate) fn to_query(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    operation_type: Option<OperationType>,
) -> Result<VesselRecordsQuery> {
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if start > end {
            return StartAfterEndSnafu { start, end }.fail();
        }
    }

    Ok(VesselRecordsQuery {
        start_date,
        end_date,
        operation_type,
    })
}

/// Returns the vessel records matching the filters, most recent first.
#[utoipa::path(
    get,
    path = "/vessel_records",
    params(VesselRecordsParams),
    responses(
        (status = 200, description = "the matching vessel records", body = [VesselRecord]),
        (status = 400, description = "invalid filters", body = ErrorResponse),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    ),
    tag = "VesselRecord",
)]
#[tracing::instrument(skip(db))]
pub async fn vessel_records<T: Database + 'static>(
    db: web::Data<T>,
    profile: AuthProfile,
    params: Query<VesselRecordsParams>,
) -> Result<Response<Vec<VesselRecord>>> {
    let query = params.to_query()?;
    profile.login(db.get_ref()).await?;

    Ok(Response::new(db.vessel_records(query).await?))
}

#[utoipa::path(
    post,
    path = "/vessel_records",
    request_body(content = VesselRecordInput, content_type = "application/json"),
    responses(
        (status = 201, description = "the created vessel record", body = VesselRecord),
        (status = 400, description = "invalid record", body = ErrorResponse),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    ),
    tag = "VesselRecord",
)]
#[tracing::instrument(skip(db))]
pub async fn create_vessel_record<T: Database + 'static>(
    db: web::Data<T>,
    profile: AuthProfile,
    input: web::Json<VesselRecordInput>,
) -> Result<Response<VesselRecord>> {
    let user = profile.login(db.get_ref()).await?;
    let record = input.into_inner().into_new_record(user.id)?;

    Ok(Response::created(db.add_vessel_record(record).await?))
}

#[utoipa::path(
    put,
    path = "/vessel_records/{vessel_record_id}",
    params(("vessel_record_id" = i64, Path, description = "id of the record to update")),
    request_body(content = VesselRecordInput, content_type = "application/json"),
    responses(
        (status = 200, description = "the updated vessel record", body = VesselRecord),
        (status = 400, description = "invalid record", body = ErrorResponse),
        (status = 403, description = "the caller is neither an admin nor the creator", body = ErrorResponse),
        (status = 404, description = "the record does not exist", body = ErrorResponse),
    ),
    tag = "VesselRecord",
)]
#[tracing::instrument(skip(db))]
pub async fn update_vessel_record<T: Database + 'static>(
    db: web::Data<T>,
    profile: AuthProfile,
    vessel_record_id: web::Path<VesselRecordId>,
    input: web::Json<VesselRecordInput>,
) -> Result<Response<VesselRecord>> {
    let id = vessel_record_id.into_inner();
    let user = profile.login(db.get_ref()).await?;

    ensure_can_modify(db.get_ref(), &user, id).await?;

    let update = input.into_inner().into_update(id)?;
    Ok(Response::new(db.update_vessel_record(update).await?))
}

#[utoipa::path(
    delete,
    path = "/vessel_records/{vessel_record_id}",
    params(("vessel_record_id" = i64, Path, description = "id of the record to delete")),
    responses(
        (status = 200, description = "the record was deleted"),
        (status = 403, description = "the caller is neither an admin nor the creator", body = ErrorResponse),
        (status = 404, description = "the record does not exist", body = ErrorResponse),
    ),
    tag = "VesselRecord",
)]
#[tracing::instrument(skip(db))]
pub async fn delete_vessel_record<T: Database + 'static>(
    db: web::Data<T>,
    profile: AuthProfile,
    vessel_record_id: web::Path<VesselRecordId>,
) -> Result<Response<()>> {
    let id = vessel_record_id.into_inner();
    let user = profile.login(db.get_ref()).await?;

    ensure_can_modify(db.get_ref(), &user, id).await?;

    db.delete_vessel_record(id).await?;
    Ok(Response::new(()))
}

/// Records may only be changed by admins and by the user who created them.
async fn ensure_can_modify<T: Database>(db: &T, user: &User, id: VesselRecordId) -> Result<()> {
    let record = db
        .vessel_record(id)
        .await?
        .ok_or_else(|| VesselRecordNotFoundSnafu { id }.build())?;

    if !user.is_admin() && record.created_by != user.id {
        return ForbiddenSnafu.fail();
    }

    Ok(())
}
