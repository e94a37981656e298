// gRPC surface of the engine plus the simulated generation call behind it.
pub mod failure_hook;
pub mod prediction_service;
pub mod simulator;

// Generated by build.rs: `prediction_engine_server` and `prediction_engine_client`.
include!(concat!(env!("OUT_DIR"), "/predictor.PredictionEngine.rs"));

pub use prediction_engine_client::PredictionEngineClient;
pub use prediction_engine_server::{PredictionEngine, PredictionEngineServer};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PredictionRequest {
    /// 3, 5 or 15.
    #[prost(uint32, tag = "1")]
    pub interval_minutes: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PredictionPoint {
    /// Milliseconds since the Unix epoch.
    #[prost(int64, tag = "1")]
    pub timestamp: i64,
    #[prost(double, tag = "2")]
    pub actual_open: f64,
    #[prost(double, tag = "3")]
    pub actual_high: f64,
    #[prost(double, tag = "4")]
    pub actual_low: f64,
    #[prost(double, tag = "5")]
    pub actual_close: f64,
    #[prost(double, tag = "6")]
    pub predicted_close: f64,
    #[prost(double, tag = "7")]
    pub prediction_error: f64,
    #[prost(bool, tag = "8")]
    pub actual_trend_up: bool,
    #[prost(bool, tag = "9")]
    pub predicted_trend_up: bool,
    #[prost(bool, tag = "10")]
    pub trend_match: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PredictionResponse {
    #[prost(string, tag = "1")]
    pub coin: String,
    #[prost(string, tag = "2")]
    pub request_id: String,
    #[prost(uint32, tag = "3")]
    pub interval_minutes: u32,
    #[prost(message, repeated, tag = "4")]
    pub points: Vec<PredictionPoint>,
}
