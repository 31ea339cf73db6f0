use actix_web::web;
use serde::{Deserialize, Serialize};
use travessia_core::{NewVessel, UpdateVessel, Vessel, VesselId, VesselName};
use utoipa::ToSchema;

use crate::{Database, error::Result, extractors::AuthProfile, response::Response};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VesselBody {
    pub name: String,
}

/// Returns all registered vessels ordered by name.
#[utoipa::path(
    get,
    path = "/vessels",
    responses(
        (status = 200, description = "all registered vessels", body = [Vessel]),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    ),
    tag = "Vessel",
)]
#[tracing::instrument(skip(db))]
pub async fn vessels<T: Database + 'static>(
    db: web::Data<T>,
    profile: AuthProfile,
) -> Result<Response<Vec<Vessel>>> {
    profile.login(db.get_ref()).await?;
    Ok(Response::new(db.vessels().await?))
}

#[utoipa::path(
    post,
    path = "/vessels",
    request_body(content = VesselBody, content_type = "application/json"),
    responses(
        (status = 201, description = "the registered vessel", body = Vessel),
        (status = 400, description = "the name is empty", body = ErrorResponse),
        (status = 403, description = "the caller is not an admin", body = ErrorResponse),
        (status = 409, description = "the name is already registered", body = ErrorResponse),
    ),
    tag = "Vessel",
)]
#[tracing::instrument(skip(db))]
pub async fn create_vessel<T: Database + 'static>(
    db: web::Data<T>,
    profile: AuthProfile,
    body: web::Json<VesselBody>,
) -> Result<Response<Vessel>> {
    let user = profile.login_admin(db.get_ref()).await?;

    let vessel = NewVessel {
        name: VesselName::new(body.into_inner().name)?,
        created_by: user.id,
    };

    Ok(Response::created(db.add_vessel(vessel).await?))
}

#[utoipa::path(
    put,
    path = "/vessels/{vessel_id}",
    params(("vessel_id" = i64, Path, description = "id of the vessel to rename")),
    request_body(content = VesselBody, content_type = "application/json"),
    responses(
        (status = 200, description = "the renamed vessel", body = Vessel),
        (status = 400, description = "the name is empty", body = ErrorResponse),
        (status = 403, description = "the caller is not an admin", body = ErrorResponse),
        (status = 404, description = "the vessel does not exist", body = ErrorResponse),
        (status = 409, description = "the name is already registered", body = ErrorResponse),
    ),
    tag = "Vessel",
)]
#[tracing::instrument(skip(db))]
pub async fn update_vessel<T: Database + 'static>(
    db: web::Data<T>,
    profile: AuthProfile,
    vessel_id: web::Path<VesselId>,
    body: web::Json<VesselBody>,
) -> Result<Response<Vessel>> {
    profile.login_admin(db.get_ref()).await?;

    let update = UpdateVessel {
        id: vessel_id.into_inner(),
        name: VesselName::new(body.into_inner().name)?,
    };

    Ok(Response::new(db.update_vessel(update).await?))
}

#[utoipa::path(
    delete,
    path = "/vessels/{vessel_id}",
    params(("vessel_id" = i64, Path, description = "id of the vessel to delete")),
    responses(
        (status = 200, description = "the vessel was deleted"),
        (status = 403, description = "the caller is not an admin", body = ErrorResponse),
        (status = 404, description = "the vessel does not exist", body = ErrorResponse),
    ),
    tag = "Vessel",
)]
#[tracing::instrument(skip(db))]
pub async fn delete_vessel<T: Database + 'static>(
    db: web::Data<T>,
    profile: AuthProfile,
    vessel_id: web::Path<VesselId>,
) -> Result<Response<()>> {
    profile.login_admin(db.get_ref()).await?;

    db.delete_vessel(vessel_id.into_inner()).await?;
    Ok(Response::new(()))
}
