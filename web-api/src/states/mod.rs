mod auth;
mod clock;

pub use auth::*;
pub use clock::*;
