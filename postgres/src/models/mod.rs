mod user;
mod vessel;
mod vessel_record;

pub use user::*;
pub use vessel::*;
pub use vessel_record::*;
