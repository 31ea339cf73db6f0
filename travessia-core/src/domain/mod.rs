mod passenger_summary;
mod user;
mod vessel;
mod vessel_record;

pub use passenger_summary::*;
pub use user::*;
pub use vessel::*;
pub use vessel_record::*;
