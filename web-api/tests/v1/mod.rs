pub mod test_client;

mod openapi;
mod vessel;
mod vessel_record;
