use actix_web::web;
use chrono::NaiveDate;
use reports::ReportFormat;
use serde::{Deserialize, Serialize};
use serde_qs::actix::QsQuery as Query;
use tracing::info;
use travessia_core::OperationType;
use utoipa::IntoParams;

use crate::{
    Database, error::Result, extractors::AuthProfile, response::FileResponse,
    routes::v1::vessel_record::to_query, states::Clock,
};

#[derive(Debug, Default, Clone, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ReportParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub operation_type: Option<OperationType>,
    /// Download name without extension, defaults to `relatorio_embarcacoes`.
    pub filename: Option<String>,
}

/// Exports the matching vessel records as an xlsx spreadsheet.
#[utoipa::path(
    get,
    path = "/reports/excel",
    params(ReportParams),
    responses(
        (status = 200, description = "the spreadsheet", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 400, description = "invalid filters", body = ErrorResponse),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    ),
    tag = "Report",
)]
#[tracing::instrument(skip(db, clock))]
pub async fn excel_report<T: Database + 'static>(
    db: web::Data<T>,
    clock: web::Data<Clock>,
    profile: AuthProfile,
    params: Query<ReportParams>,
) -> Result<FileResponse> {
    report(db.get_ref(), **clock, profile, params.into_inner(), ReportFormat::Excel).await
}

/// Exports the matching vessel records as a pdf table.
#[utoipa::path(
    get,
    path = "/reports/pdf",
    params(ReportParams),
    responses(
        (status = 200, description = "the pdf document", content_type = "application/pdf"),
        (status = 400, description = "invalid filters", body = ErrorResponse),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    ),
    tag = "Report",
)]
#[tracing::instrument(skip(db, clock))]
pub async fn pdf_report<T: Database + 'static>(
    db: web::Data<T>,
    clock: web::Data<Clock>,
    profile: AuthProfile,
    params: Query<ReportParams>,
) -> Result<FileResponse> {
    report(db.get_ref(), **clock, profile, params.into_inner(), ReportFormat::Pdf).await
}

async fn report<T: Database>(
    db: &T,
    clock: Clock,
    profile: AuthProfile,
    params: ReportParams,
    format: ReportFormat,
) -> Result<FileResponse> {
    let query = to_query(params.start_date, params.end_date, params.operation_type)?;
    profile.login(db).await?;

    let records = db.vessel_records(query).await?;
    let filename = format.filename(params.filename.as_deref());

    let bytes = match format {
        ReportFormat::Excel => web::block(move || reports::excel::render(&records)).await??,
        ReportFormat::Pdf => {
            let generated_at = clock.now();
            web::block(move || reports::pdf::render(&records, generated_at)).await??
        }
    };

    info!(%format, size = bytes.len(), "exported report");

    Ok(FileResponse {
        bytes,
        filename,
        format,
    })
}
