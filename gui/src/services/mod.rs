pub mod engine_client;
pub mod suggestion_client;
