#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod adapter;
pub mod error;
mod models;
mod queries;
mod settings;

pub use adapter::PostgresAdapter;
pub use error::{Error, Result};
pub use settings::{PsqlLogStatements, PsqlSettings};
