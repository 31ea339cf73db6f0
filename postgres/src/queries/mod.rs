pub mod user;
pub mod vessel;
pub mod vessel_record;
