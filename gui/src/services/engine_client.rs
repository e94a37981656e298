// Source of prediction series for the dashboard: either the generator running
// in-process or a remote engine reached over gRPC.

use anyhow::{anyhow, Result};
use engine::config::settings::EngineSettings;
use engine::services::prediction_service::helpers::from_grpc_response;
use engine::services::simulator::PredictionService;
use engine::services::{PredictionEngineClient, PredictionRequest};
use shared::models::{PredictionSeries, TimeInterval};
use tonic::transport::{Channel, Endpoint};

use crate::config::{EngineConnSettings, EngineMode};

#[derive(Clone)]
pub enum EngineClient {
    Embedded(PredictionService),
    Remote(PredictionEngineClient<Channel>),
}

impl EngineClient {
    /// In-process generator with the engine's default latency and failure settings.
    pub fn embedded(settings: EngineSettings) -> Self {
        EngineClient::Embedded(PredictionService::new(settings))
    }

    /// The channel connects on first use, so an engine that is not up yet
    /// surfaces as a fetch error rather than a start-up failure.
    pub fn remote(endpoint: String) -> Result<Self> {
        let channel = Endpoint::from_shared(endpoint.clone())
            .map_err(|e| anyhow!("Invalid engine endpoint '{}': {}", endpoint, e))?
            .connect_lazy();
        Ok(EngineClient::Remote(PredictionEngineClient::new(channel)))
    }

    pub fn from_config(conn: &EngineConnSettings) -> Result<Self> {
        match conn.mode {
            EngineMode::Embedded => {
                tracing::info!("Using embedded prediction engine");
                Ok(Self::embedded(EngineSettings::default()))
            }
            EngineMode::Remote => {
                let endpoint = conn.endpoint();
                tracing::info!(%endpoint, "Using remote prediction engine");
                Self::remote(endpoint)
            }
        }
    }

    pub async fn fetch_predictions(&self, interval: TimeInterval) -> Result<PredictionSeries> {
        match self {
            EngineClient::Embedded(service) => {
                let series = service.generate(interval).await?;
                Ok(series)
            }
            EngineClient::Remote(client) => {
                let mut client = client.clone();
                let request = tonic::Request::new(PredictionRequest { interval_minutes: interval.minutes() });
                let response = client
                    .get_predictions(request)
                    .await
                    .map_err(|status| anyhow!(status.message().to_string()))?
                    .into_inner();
                tracing::debug!(request_id = %response.request_id, points = response.points.len(), "Received prediction series");
                Ok(from_grpc_response(&response)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::services::failure_hook::AlwaysFail;

    #[tokio::test]
    async fn test_embedded_fetch_returns_series() {
        let client = EngineClient::embedded(EngineSettings::instant());
        let series = client.fetch_predictions(TimeInterval::Minutes3).await.unwrap();
        assert_eq!(series.records.len(), 100);
        assert_eq!(series.coin, "BTC-USD");
    }

    #[tokio::test]
    async fn test_embedded_failure_keeps_message() {
        let service = PredictionService::new(EngineSettings::instant()).with_failure_hook(AlwaysFail::default());
        let client = EngineClient::Embedded(service);
        let err = client.fetch_predictions(TimeInterval::Minutes5).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to connect to the simulated API.");
    }

    #[tokio::test]
    async fn test_remote_rejects_malformed_endpoint() {
        assert!(EngineClient::remote("not a uri".to_string()).is_err());
    }
}
