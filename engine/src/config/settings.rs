// Engine settings, loaded from an optional JSON file and environment variables
use crate::error::EngineError;
use serde::Deserialize;
use std::env;
use std::path::Path;

pub const DEFAULT_COIN_TICKER: &str = "BTC-USD";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub host: String,
    pub port: u16,
    pub coin_ticker: String,
    /// Simulated network latency bounds for each generation call.
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
    /// Probability in [0, 1] that a generation call is rejected.
    pub failure_rate: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            host: "127.0.0.1".to_string(),
            port: 50051,
            coin_ticker: DEFAULT_COIN_TICKER.to_string(),
            min_latency_ms: 500,
            max_latency_ms: 1500,
            failure_rate: 0.0,
        }
    }
}

impl EngineSettings {
    /// Settings with no simulated latency, used by tests.
    pub fn instant() -> Self {
        EngineSettings {
            min_latency_ms: 0,
            max_latency_ms: 0,
            ..Self::default()
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let settings: EngineSettings = serde_json::from_str(&raw)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads `ENGINE_CONFIG` (optional JSON file), then applies `ENGINE_HOST`,
    /// `ENGINE_PORT` and `ENGINE_FAILURE_RATE` overrides.
    pub fn load() -> Result<Self, EngineError> {
        let mut settings = match env::var("ENGINE_CONFIG") {
            Ok(path) if !path.trim().is_empty() => {
                tracing::info!(path = %path, "Loading engine settings from file");
                Self::from_file(path.trim())?
            }
            _ => Self::default(),
        };

        if let Some(host) = env_non_empty("ENGINE_HOST") {
            settings.host = host;
        }
        if let Some(port) = env_non_empty("ENGINE_PORT") {
            settings.port = port
                .parse()
                .map_err(|e| EngineError::ConfigError(format!("Invalid ENGINE_PORT '{}': {}", port, e)))?;
        }
        if let Some(rate) = env_non_empty("ENGINE_FAILURE_RATE") {
            settings.failure_rate = rate
                .parse()
                .map_err(|e| EngineError::ConfigError(format!("Invalid ENGINE_FAILURE_RATE '{}': {}", rate, e)))?;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.min_latency_ms > self.max_latency_ms {
            return Err(EngineError::ConfigError(format!(
                "min_latency_ms ({}) must not exceed max_latency_ms ({})",
                self.min_latency_ms, self.max_latency_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(EngineError::ConfigError(format!(
                "failure_rate must be within [0, 1], got {}",
                self.failure_rate
            )));
        }
        if self.coin_ticker.trim().is_empty() {
            return Err(EngineError::ConfigError("coin_ticker must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Exchange API credentials. Nothing in the generator reads them yet; a real
/// market-data backend would.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeCredentials {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
}

impl ExchangeCredentials {
    pub fn from_env() -> Self {
        let credentials = ExchangeCredentials {
            api_key: env_non_empty("BINANCE_API_KEY"),
            api_secret: env_non_empty("BINANCE_API_SECRET"),
        };
        if !credentials.is_configured() {
            tracing::info!("Exchange credentials not set; serving simulated market data only.");
        }
        credentials
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.api_secret.is_some()
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
