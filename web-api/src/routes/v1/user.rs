use actix_web::web;
use serde::{Deserialize, Serialize};
use travessia_core::{Profile, User, UserId};
use utoipa::ToSchema;

use crate::{Database, error::Result, extractors::AuthProfile, response::Response};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    pub profile: Profile,
}

/// Returns the authenticated user, creating it with the default profile on first login.
#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "the authenticated user", body = User),
        (status = 401, description = "missing or invalid token", body = ErrorResponse),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    ),
    tag = "User",
)]
#[tracing::instrument(skip(db))]
pub async fn get_user<T: Database + 'static>(
    db: web::Data<T>,
    profile: AuthProfile,
) -> Result<Response<User>> {
    Ok(Response::new(profile.login(db.get_ref()).await?))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "all registered users", body = [User]),
        (status = 403, description = "the caller is not an admin", body = ErrorResponse),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    ),
    tag = "User",
)]
#[tracing::instrument(skip(db))]
pub async fn users<T: Database + 'static>(
    db: web::Data<T>,
    profile: AuthProfile,
) -> Result<Response<Vec<User>>> {
    profile.login_admin(db.get_ref()).await?;
    Ok(Response::new(db.users().await?))
}

#[utoipa::path(
    put,
    path = "/users/{user_id}/profile",
    params(("user_id" = String, Path, description = "id of the user to update")),
    request_body(content = UpdateProfile, content_type = "application/json"),
    responses(
        (status = 200, description = "the updated user", body = User),
        (status = 403, description = "the caller is not an admin", body = ErrorResponse),
        (status = 404, description = "the user does not exist", body = ErrorResponse),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    ),
    tag = "User",
)]
#[tracing::instrument(skip(db))]
pub async fn update_user_profile<T: Database + 'static>(
    db: web::Data<T>,
    profile: AuthProfile,
    user_id: web::Path<String>,
    body: web::Json<UpdateProfile>,
) -> Result<Response<User>> {
    profile.login_admin(db.get_ref()).await?;

    let user_id = UserId::new(user_id.into_inner());
    Ok(Response::new(
        db.update_user_profile(&user_id, body.profile).await?,
    ))
}
