// GUI configuration module
pub mod theme;

use serde::Deserialize;
use shared::models::TimeInterval;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub engine: EngineConnSettings,
    pub chart: ChartConfig,
    pub assistant: AssistantSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub subtitle: String,
    pub model_label: String,
    pub window_width: u32,
    pub window_height: u32,
    pub default_interval: TimeInterval,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EngineMode {
    /// Generation runs in-process.
    Embedded,
    /// Generation is requested from a running engine over gRPC.
    Remote,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EngineConnSettings {
    pub mode: EngineMode,
    pub host: String,
    pub port: u16,
}

impl EngineConnSettings {
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartConfig {
    pub height: u32,
    pub background: String,
    pub grid_color: String,
    pub text_color: String,
    pub up_color: String,
    pub down_color: String,
    pub prediction_color: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AssistantSettings {
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl AppConfig {
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        let config: AppConfig = serde_json::from_str(config_str)?;
        Ok(config)
    }
}

/// Credential for the generative-text endpoint. `GEMINI_API_KEY` wins over `API_KEY`.
pub fn assistant_api_key_from_env() -> Option<String> {
    ["GEMINI_API_KEY", "API_KEY"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_config_parses() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.app.default_interval, TimeInterval::Minutes3);
        assert_eq!(config.engine.mode, EngineMode::Embedded);
        assert_eq!(config.engine.endpoint(), "http://127.0.0.1:50051");
        assert_eq!(config.chart.up_color, "#10b981");
        assert_eq!(config.assistant.model, "gemini-2.5-flash");
    }
}
