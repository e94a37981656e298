// The asynchronous generation call: simulated latency, then synthesis, then resolve or reject.
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use shared::models::{PredictionSeries, TimeInterval};
use uuid::Uuid;

use super::failure_hook::{FailureHook, RandomFailure};
use crate::config::settings::EngineSettings;
use crate::data::synthetic::SyntheticMarketGenerator;
use crate::error::EngineError;

/// Owns no shared mutable state: every call builds its own sequence generator,
/// so concurrent calls for different intervals cannot interfere.
#[derive(Debug, Clone)]
pub struct PredictionService {
    settings: Arc<EngineSettings>,
    failure_hook: Arc<dyn FailureHook>,
}

impl PredictionService {
    pub fn new(settings: EngineSettings) -> Self {
        let failure_hook = Arc::new(RandomFailure::new(settings.failure_rate));
        Self { settings: Arc::new(settings), failure_hook }
    }

    pub fn with_failure_hook(mut self, hook: impl FailureHook + 'static) -> Self {
        self.failure_hook = Arc::new(hook);
        self
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Bounds are taken in either order; settings built in code skip `validate()`.
    fn sample_latency(&self) -> Duration {
        let (a, b) = (self.settings.min_latency_ms, self.settings.max_latency_ms);
        let (min, max) = (a.min(b), a.max(b));
        if max == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }

    pub async fn generate(&self, interval: TimeInterval) -> Result<PredictionSeries, EngineError> {
        self.generate_tagged(interval, Uuid::new_v4()).await
    }

    /// Same as [`generate`](Self::generate) with a caller-supplied correlation id.
    pub async fn generate_tagged(&self, interval: TimeInterval, request_id: Uuid) -> Result<PredictionSeries, EngineError> {
        let latency = self.sample_latency();
        tracing::info!(%request_id, %interval, latency_ms = latency.as_millis() as u64, "Generating prediction series");

        tokio::time::sleep(latency).await;

        let series = SyntheticMarketGenerator::new(interval).generate(&self.settings.coin_ticker, Utc::now());

        if let Some(message) = self.failure_hook.check(interval) {
            tracing::warn!(%request_id, %interval, reason = %message, "Generation call rejected");
            return Err(EngineError::GenerationFailure(message));
        }

        tracing::debug!(%request_id, count = series.len(), "Generation call resolved");
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::synthetic::POINT_COUNT;
    use crate::services::failure_hook::AlwaysFail;
    use chrono::Duration as ChronoDuration;

    #[tokio::test]
    async fn test_generate_returns_full_series_with_ticker() {
        let service = PredictionService::new(EngineSettings::instant());
        let series = service.generate(TimeInterval::Minutes3).await.unwrap();
        assert_eq!(series.len(), POINT_COUNT);
        assert_eq!(series.coin, "BTC-USD");
        for pair in series.records.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, ChronoDuration::minutes(3));
        }
    }

    #[tokio::test]
    async fn test_generate_uses_configured_ticker() {
        let settings = EngineSettings { coin_ticker: "ETH-USD".to_string(), ..EngineSettings::instant() };
        let series = PredictionService::new(settings).generate(TimeInterval::Minutes15).await.unwrap();
        assert_eq!(series.coin, "ETH-USD");
    }

    #[tokio::test]
    async fn test_failure_hook_rejects_call() {
        let service = PredictionService::new(EngineSettings::instant()).with_failure_hook(AlwaysFail::default());
        let err = service.generate(TimeInterval::Minutes5).await.unwrap_err();
        assert!(matches!(err, EngineError::GenerationFailure(ref m) if m == "Failed to connect to the simulated API."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_stays_within_bounds() {
        let settings = EngineSettings { min_latency_ms: 500, max_latency_ms: 1500, ..EngineSettings::default() };
        let service = PredictionService::new(settings);
        let started = tokio::time::Instant::now();
        service.generate(TimeInterval::Minutes3).await.unwrap();
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(500), "elapsed {:?}", elapsed);
        assert!(elapsed <= Duration::from_millis(1600), "elapsed {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_inverted_latency_bounds_do_not_panic() {
        let settings = EngineSettings { min_latency_ms: 2000, max_latency_ms: 1500, ..EngineSettings::default() };
        let service = PredictionService::new(settings);
        let started = tokio::time::Instant::now();
        let series = service.generate(TimeInterval::Minutes3).await.unwrap();
        assert_eq!(series.len(), POINT_COUNT);
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1500), "elapsed {:?}", elapsed);
        assert!(elapsed <= Duration::from_millis(2100), "elapsed {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_concurrent_calls_do_not_interfere() {
        let service = PredictionService::new(EngineSettings::instant());
        let (a, b) = tokio::join!(service.generate(TimeInterval::Minutes3), service.generate(TimeInterval::Minutes15));
        let (a, b) = (a.unwrap(), b.unwrap());
        let solo = service.generate(TimeInterval::Minutes3).await.unwrap();
        let closes = |s: &PredictionSeries| s.records.iter().map(|r| r.actual_close.to_bits()).collect::<Vec<_>>();
        assert_eq!(closes(&a), closes(&solo));
        assert_eq!(b.interval, TimeInterval::Minutes15);
    }
}
