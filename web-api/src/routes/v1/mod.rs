pub mod passenger_summary;
pub mod report;
pub mod user;
pub mod vessel;
pub mod vessel_record;
