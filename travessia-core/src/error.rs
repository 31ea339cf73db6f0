use snafu::{Location, Snafu};

use crate::{UserId, VesselId, VesselRecordId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("A vessel named '{name}' is already registered"))]
    VesselNameTaken {
        #[snafu(implicit)]
        location: Location,
        name: String,
    },
    #[snafu(display("Vessel '{id}' does not exist"))]
    VesselNotFound {
        #[snafu(implicit)]
        location: Location,
        id: VesselId,
    },
    #[snafu(display("Vessel record '{id}' does not exist"))]
    VesselRecordNotFound {
        #[snafu(implicit)]
        location: Location,
        id: VesselRecordId,
    },
    #[snafu(display("User '{id}' does not exist"))]
    UserNotFound {
        #[snafu(implicit)]
        location: Location,
        id: UserId,
    },
    #[snafu(display("An unexpected storage error occurred"))]
    Unexpected {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum ValidationError {
    #[snafu(display("The vessel name cannot be empty"))]
    EmptyVesselName {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("The passenger count cannot be negative, got '{value}'"))]
    NegativePassengers {
        #[snafu(implicit)]
        location: Location,
        value: i64,
    },
    #[snafu(display("The passenger count '{value}' is too large"))]
    PassengersOutOfRange {
        #[snafu(implicit)]
        location: Location,
        value: i64,
    },
}

