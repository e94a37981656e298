// Conversions between domain records and the gRPC wire messages
use crate::error::EngineError;
use crate::services::{PredictionPoint, PredictionResponse};
use shared::models::{PredictionRecord, PredictionSeries, TimeInterval, Trend};

pub fn to_grpc_point(record: &PredictionRecord) -> PredictionPoint {
    PredictionPoint {
        timestamp: record.timestamp.timestamp_millis(),
        actual_open: record.actual_open,
        actual_high: record.actual_high,
        actual_low: record.actual_low,
        actual_close: record.actual_close,
        predicted_close: record.predicted_close,
        prediction_error: record.prediction_error,
        actual_trend_up: record.actual_trend == Trend::Up,
        predicted_trend_up: record.predicted_trend == Trend::Up,
        trend_match: record.trend_match,
    }
}

pub fn from_grpc_point(point: &PredictionPoint) -> Result<PredictionRecord, EngineError> {
    let timestamp = from_grpc_timestamp(point.timestamp)?;
    let trend = |up: bool| if up { Trend::Up } else { Trend::Down };
    Ok(PredictionRecord {
        timestamp,
        actual_open: point.actual_open,
        actual_high: point.actual_high,
        actual_low: point.actual_low,
        actual_close: point.actual_close,
        predicted_close: point.predicted_close,
        prediction_error: point.prediction_error,
        actual_trend: trend(point.actual_trend_up),
        predicted_trend: trend(point.predicted_trend_up),
        trend_match: point.trend_match,
    })
}

pub fn to_grpc_response(series: &PredictionSeries, request_id: &str) -> PredictionResponse {
    PredictionResponse {
        coin: series.coin.clone(),
        request_id: request_id.to_string(),
        interval_minutes: series.interval.minutes(),
        points: series.records.iter().map(to_grpc_point).collect(),
    }
}

pub fn from_grpc_response(response: &PredictionResponse) -> Result<PredictionSeries, EngineError> {
    let interval = interval_from_minutes(response.interval_minutes)?;
    let records = response
        .points
        .iter()
        .map(from_grpc_point)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PredictionSeries { coin: response.coin.clone(), interval, records })
}

pub fn interval_from_minutes(minutes: u32) -> Result<TimeInterval, EngineError> {
    TimeInterval::from_minutes(minutes).ok_or(EngineError::InvalidInterval(minutes))
}

pub fn from_grpc_timestamp(ts_millis: i64) -> Result<chrono::DateTime<chrono::Utc>, EngineError> {
    chrono::DateTime::from_timestamp_millis(ts_millis)
        .ok_or_else(|| EngineError::ProcessingError(format!("Invalid gRPC timestamp: {}", ts_millis)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_point_preserves_trends_and_millis() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 1, 9, 15, 0).unwrap();
        let record = PredictionRecord::new(ts, 100.0, 104.0, 97.0, 98.0, 101.0);
        let point = to_grpc_point(&record);
        assert_eq!(point.timestamp, ts.timestamp_millis());
        assert!(!point.actual_trend_up);
        assert!(point.predicted_trend_up);
        assert!(!point.trend_match);
        assert_eq!(from_grpc_point(&point).unwrap(), record);
    }

    #[test]
    fn test_response_with_unknown_interval_is_rejected() {
        let response = PredictionResponse { coin: "BTC-USD".to_string(), request_id: String::new(), interval_minutes: 60, points: vec![] };
        assert!(matches!(from_grpc_response(&response), Err(EngineError::InvalidInterval(60))));
    }

    #[test]
    fn test_out_of_range_timestamp() {
        assert!(from_grpc_timestamp(i64::MAX).is_err());
    }
}
