pub mod book_store_client;
pub mod book_store_data;
pub mod configuration;
pub mod domain;
pub mod recorded_response;
pub mod scenario;
pub mod steps;
pub mod telemetry;
