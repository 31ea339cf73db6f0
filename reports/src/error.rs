use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to write spreadsheet"))]
    Xlsx {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: rust_xlsxwriter::XlsxError,
    },
    #[snafu(display("Failed to write pdf document"))]
    Pdf {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: printpdf::Error,
    },
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    #[track_caller]
    fn from(value: rust_xlsxwriter::XlsxError) -> Self {
        let location = std::panic::Location::caller();
        Error::Xlsx {
            location: Location::new(location.file(), location.line(), location.column()),
            error: value,
        }
    }
}

impl From<printpdf::Error> for Error {
    #[track_caller]
    fn from(value: printpdf::Error) -> Self {
        let location = std::panic::Location::caller();
        Error::Pdf {
            location: Location::new(location.file(), location.line(), location.column()),
            error: value,
        }
    }
}
