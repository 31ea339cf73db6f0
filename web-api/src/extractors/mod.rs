mod auth;
mod bearer_token;

pub use auth::*;
pub use bearer_token::*;
