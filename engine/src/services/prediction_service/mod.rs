// engine/src/services/prediction_service/mod.rs
// gRPC implementation of PredictionEngine; handlers live in sibling modules.
use super::simulator::PredictionService;
use super::{PredictionEngine, PredictionRequest, PredictionResponse};
use tonic::{Request, Response, Status};

pub mod get_predictions;
pub mod helpers;

pub struct MyPredictionEngine {
    service: PredictionService,
}

impl MyPredictionEngine {
    pub fn new(service: PredictionService) -> Self {
        MyPredictionEngine { service }
    }
}

#[tonic::async_trait]
impl PredictionEngine for MyPredictionEngine {
    async fn get_predictions(&self, request: Request<PredictionRequest>) -> Result<Response<PredictionResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            interval_minutes = req_payload.interval_minutes,
            "Received GetPredictionsRequest in main service, dispatching to handler."
        );
        get_predictions::handle_get_predictions(req_payload, &self.service).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::EngineSettings;
    use crate::services::failure_hook::AlwaysFail;

    fn create_test_engine() -> MyPredictionEngine {
        MyPredictionEngine::new(PredictionService::new(EngineSettings::instant()))
    }

    #[tokio::test]
    async fn test_get_predictions_success() {
        let engine = create_test_engine();
        let response = engine
            .get_predictions(Request::new(PredictionRequest { interval_minutes: 5 }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.coin, "BTC-USD");
        assert_eq!(response.interval_minutes, 5);
        assert_eq!(response.points.len(), 100);
        assert!(!response.request_id.is_empty());
        for pair in response.points.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, 5 * 60 * 1000);
        }
    }

    #[tokio::test]
    async fn test_get_predictions_unknown_interval() {
        let engine = create_test_engine();
        let status = engine
            .get_predictions(Request::new(PredictionRequest { interval_minutes: 60 }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_get_predictions_rejected_generation() {
        let service = PredictionService::new(EngineSettings::instant()).with_failure_hook(AlwaysFail::default());
        let engine = MyPredictionEngine::new(service);
        let status = engine
            .get_predictions(Request::new(PredictionRequest { interval_minutes: 3 }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::Unavailable);
        assert_eq!(status.message(), "Failed to connect to the simulated API.");
    }
}
