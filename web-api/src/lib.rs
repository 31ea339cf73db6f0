#![deny(warnings)]
#![deny(rust_2018_idioms)]

use routes::v1;
use travessia_core::{
    OperationType, PassengerSummary, Profile, Storage, TimeFilter, User, UserId, Vessel,
    VesselId, VesselRecord, VesselRecordId, VesselRecordInput,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod settings;
pub mod startup;
pub mod states;

pub trait Database: Storage {}

impl<T: Storage> Database for T {}

#[derive(OpenApi)]
#[openapi(
    paths(
        v1::user::get_user,
        v1::user::users,
        v1::user::update_user_profile,
        v1::vessel::vessels,
        v1::vessel::create_vessel,
        v1::vessel::update_vessel,
        v1::vessel::delete_vessel,
        v1::vessel_record::vessel_records,
        v1::vessel_record::create_vessel_record,
        v1::vessel_record::update_vessel_record,
        v1::vessel_record::delete_vessel_record,
        v1::passenger_summary::passenger_summary,
        v1::report::excel_report,
        v1::report::pdf_report,
    ),
    components(
        schemas(
            User,
            UserId,
            Profile,
            Vessel,
            VesselId,
            VesselRecord,
            VesselRecordId,
            VesselRecordInput,
            OperationType,
            PassengerSummary,
            TimeFilter,
            error::ErrorResponse,
            error::ErrorDiscriminants,
            v1::user::UpdateProfile,
            v1::vessel::VesselBody,
        )
    ),
    modifiers(&BearerAuth),
    security(("bearer" = [])),
    tags(
        (name = "travessia-api", description = "vessel boarding and disembarking records")
    ),
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
