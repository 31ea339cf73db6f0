use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Sqlx error"))]
    Sqlx {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: sqlx::Error,
    },
    #[snafu(display("Failed to run database migrations"))]
    Migrate {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: sqlx::migrate::MigrateError,
    },
    #[snafu(display("Failed to convert stored value '{value}'"))]
    Conversion {
        #[snafu(implicit)]
        location: Location,
        value: String,
    },
    #[snafu(display("Domain error"))]
    Core {
        #[snafu(implicit)]
        location: Location,
        source: travessia_core::Error,
    },
}

impl From<sqlx::Error> for Error {
    #[track_caller]
    fn from(value: sqlx::Error) -> Self {
        let location = std::panic::Location::caller();
        Error::Sqlx {
            location: Location::new(location.file(), location.line(), location.column()),
            error: value,
        }
    }
}

impl From<sqlx::migrate::MigrateError> for Error {
    #[track_caller]
    fn from(value: sqlx::migrate::MigrateError) -> Self {
        let location = std::panic::Location::caller();
        Error::Migrate {
            location: Location::new(location.file(), location.line(), location.column()),
            error: value,
        }
    }
}

impl From<travessia_core::Error> for Error {
    #[track_caller]
    fn from(value: travessia_core::Error) -> Self {
        let location = std::panic::Location::caller();
        Error::Core {
            location: Location::new(location.file(), location.line(), location.column()),
            source: value,
        }
    }
}

impl From<Error> for travessia_core::Error {
    #[track_caller]
    fn from(value: Error) -> Self {
        let location = std::panic::Location::caller();
        let location = Location::new(location.file(), location.line(), location.column());
        match value {
            Error::Core { source, .. } => source,
            _ => travessia_core::Error::Unexpected {
                location,
                error: Box::new(value),
            },
        }
    }
}

pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(e) if e.is_unique_violation())
}
