use actix_web::{
    HttpResponse, ResponseError,
    body::BoxBody,
    http::{StatusCode, header::ToStrError},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use snafu::{Location, Snafu};
use strum::EnumDiscriminants;
use tracing::{error, warn};
use travessia_core::{UserId, ValidationError, VesselId, VesselRecordId};
use utoipa::ToSchema;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Snafu, EnumDiscriminants)]
#[snafu(module, visibility(pub))]
#[strum_discriminants(derive(Deserialize, Serialize, ToSchema))]
pub enum Error {
    #[snafu(display("A bearer token must be provided"))]
    MissingJWT {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("The authorization header is not valid text"))]
    ParseJWT {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: ToStrError,
    },
    #[snafu(display("An invalid bearer token was provided"))]
    InvalidJWT {
        #[snafu(implicit)]
        location: Location,
        source: JWTDecodeError,
    },
    #[snafu(display("The current user is not allowed to perform this action"))]
    Forbidden {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Invalid request parameters: {message}"))]
    InvalidParameters {
        #[snafu(implicit)]
        location: Location,
        message: String,
    },
    #[snafu(display("Start date '{start}' cannot be after end date '{end}'"))]
    StartAfterEnd {
        #[snafu(implicit)]
        location: Location,
        start: NaiveDate,
        end: NaiveDate,
    },
    #[snafu(display("{source}"))]
    Validation {
        #[snafu(implicit)]
        location: Location,
        source: ValidationError,
    },
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
    #[snafu(display("Failed to render report"))]
    Report {
        #[snafu(implicit)]
        location: Location,
        source: reports::Error,
    },
    #[snafu(display("An unexpected error occurred"))]
    Unexpected {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Snafu)]
#[snafu(module, visibility(pub))]
pub enum JWTDecodeError {
    #[snafu(display("The token header is missing the key id"))]
    MissingKeyId {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("No key matches the key id '{kid}'"))]
    UnknownKeyId {
        #[snafu(implicit)]
        location: Location,
        kid: String,
    },
    #[snafu(display("The key does not specify an algorithm"))]
    MissingAlgorithm {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Failed to decode token"))]
    Decode {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: jsonwebtoken::errors::Error,
    },
}

/// Failures that prevent the server from starting.
#[derive(Snafu)]
#[snafu(module, visibility(pub))]
pub enum StartupError {
    #[snafu(display("Failed to read settings"))]
    Config {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: config::ConfigError,
    },
    #[snafu(display("Failed to bind '{address}'"))]
    Bind {
        #[snafu(implicit)]
        location: Location,
        address: String,
        #[snafu(source)]
        error: std::io::Error,
    },
    #[snafu(display("Failed to connect to the database"))]
    Database {
        #[snafu(implicit)]
        location: Location,
        source: postgres::Error,
    },
    #[snafu(display("Failed to fetch the JWK set from '{url}'"))]
    FetchJwks {
        #[snafu(implicit)]
        location: Location,
        url: String,
        #[snafu(source)]
        error: reqwest::Error,
    },
    #[snafu(display("Server error"))]
    Server {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: std::io::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDiscriminants,
    pub description: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingJWT { .. } | Error::ParseJWT { .. } | Error::InvalidJWT { .. } => {
                StatusCode::UNAUTHORIZED
            }
            Error::Forbidden { .. } => StatusCode::FORBIDDEN,
            Error::InvalidParameters { .. }
            | Error::StartAfterEnd { .. }
            | Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::VesselNameTaken { .. } => StatusCode::CONFLICT,
            Error::VesselNotFound { .. }
            | Error::VesselRecordNotFound { .. }
            | Error::UserNotFound { .. } => StatusCode::NOT_FOUND,
            Error::Report { .. } | Error::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let status = self.status_code();

        let description = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("{self:?}");
            "an internal server error occured".to_string()
        } else {
            warn!("{self:?}");
            self.to_string()
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.into(),
            description,
        })
    }
}

impl From<travessia_core::Error> for Error {
    fn from(value: travessia_core::Error) -> Self {
        use travessia_core::Error as E;

        match value {
            E::VesselNameTaken { location, name } => Error::VesselNameTaken { location, name },
            E::VesselNotFound { location, id } => Error::VesselNotFound { location, id },
            E::VesselRecordNotFound { location, id } => {
                Error::VesselRecordNotFound { location, id }
            }
            E::UserNotFound { location, id } => Error::UserNotFound { location, id },
            E::Unexpected { location, error } => Error::Unexpected { location, error },
        }
    }
}

impl From<ValidationError> for Error {
    #[track_caller]
    fn from(value: ValidationError) -> Self {
        let location = std::panic::Location::caller();
        Error::Validation {
            location: Location::new(location.file(), location.line(), location.column()),
            source: value,
        }
    }
}

impl From<reports::Error> for Error {
    #[track_caller]
    fn from(value: reports::Error) -> Self {
        let location = std::panic::Location::caller();
        Error::Report {
            location: Location::new(location.file(), location.line(), location.column()),
            source: value,
        }
    }
}

impl From<JWTDecodeError> for Error {
    #[track_caller]
    fn from(value: JWTDecodeError) -> Self {
        let location = std::panic::Location::caller();
        Error::InvalidJWT {
            location: Location::new(location.file(), location.line(), location.column()),
            source: value,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for JWTDecodeError {
    #[track_caller]
    fn from(value: jsonwebtoken::errors::Error) -> Self {
        let location = std::panic::Location::caller();
        JWTDecodeError::Decode {
            location: Location::new(location.file(), location.line(), location.column()),
            error: value,
        }
    }
}

impl From<actix_web::error::BlockingError> for Error {
    #[track_caller]
    fn from(value: actix_web::error::BlockingError) -> Self {
        let location = std::panic::Location::caller();
        Error::Unexpected {
            location: Location::new(location.file(), location.line(), location.column()),
            error: Box::new(value),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", snafu::Report::from_error(self))
    }
}

impl std::fmt::Debug for JWTDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")?;
        if let JWTDecodeError::Decode { error, .. } = self {
            write!(f, ": {error}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", snafu::Report::from_error(self))
    }
}
