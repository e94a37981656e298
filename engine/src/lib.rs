// Engine library root: synthetic market/prediction generation, series metrics
// and the gRPC service that serves them.

pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod services;

pub use error::EngineError;
