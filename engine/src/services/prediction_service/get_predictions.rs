// Handler for the GetPredictions RPC
use tonic::{Response, Status};
use uuid::Uuid;

use super::helpers::{interval_from_minutes, to_grpc_response};
use crate::services::simulator::PredictionService;
use crate::services::{PredictionRequest, PredictionResponse};

pub async fn handle_get_predictions(
    req_payload: PredictionRequest,
    service: &PredictionService,
) -> Result<Response<PredictionResponse>, Status> {
    let interval = match interval_from_minutes(req_payload.interval_minutes) {
        Ok(interval) => interval,
        Err(e) => {
            tracing::warn!(interval_minutes = req_payload.interval_minutes, error_detail = ?e, "Rejecting GetPredictionsRequest (handler)");
            return Err(e.into());
        }
    };

    let request_id = Uuid::new_v4();
    tracing::debug!(%request_id, %interval, "Handling GetPredictionsRequest in dedicated handler");

    let series = service.generate_tagged(interval, request_id).await?;

    tracing::info!(%request_id, coin = %series.coin, count = series.len(), "Prediction series served (handler)");
    Ok(Response::new(to_grpc_response(&series, &request_id.to_string())))
}
