use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Configuration file parse error: {source}")]
    ConfigParseError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Unsupported interval: {0} minutes. Use 3, 5 or 15.")]
    InvalidInterval(u32),

    #[error("{0}")]
    GenerationFailure(String),

    #[error("Internal processing error: {0}")]
    ProcessingError(String),
}

impl From<EngineError> for tonic::Status {
    fn from(err: EngineError) -> Self {
        tracing::error!("Mapping EngineError to tonic::Status: {:?}", err);
        match err {
            EngineError::ConfigError(msg) => tonic::Status::failed_precondition(format!("Configuration error: {}", msg)),
            EngineError::IoError { source } => tonic::Status::internal(format!("I/O error: {}", source)),
            EngineError::ConfigParseError { source } => tonic::Status::internal(format!("Configuration file parse error: {}", source)),
            EngineError::InvalidInterval(minutes) => {
                tonic::Status::invalid_argument(format!("Unsupported interval: {} minutes. Use 3, 5 or 15.", minutes))
            }
            // The message is what the dashboard shows, so it passes through untouched.
            EngineError::GenerationFailure(msg) => tonic::Status::unavailable(msg),
            EngineError::ProcessingError(msg) => tonic::Status::internal(format!("Processing error: {}", msg)),
        }
    }
}
