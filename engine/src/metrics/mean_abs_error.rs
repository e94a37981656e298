// Average absolute gap between predicted and actual close
use super::SeriesMetric;
use shared::models::PredictionRecord;

pub struct MeanAbsoluteError;

impl SeriesMetric for MeanAbsoluteError {
    fn name(&self) -> &str {
        "Average Price Prediction Error"
    }

    fn compute(&self, records: &[PredictionRecord]) -> f64 {
        if records.is_empty() {
            return 0.0;
        }
        let total: f64 = records.iter().map(|r| r.prediction_error.abs()).sum();
        total / records.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(close: f64, predicted_close: f64) -> PredictionRecord {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        PredictionRecord::new(ts, 100.0, 200.0, 50.0, close, predicted_close)
    }

    #[test]
    fn test_signed_errors_do_not_cancel() {
        let records = vec![record(100.0, 110.0), record(100.0, 90.0)];
        assert!((MeanAbsoluteError.compute(&records) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_predictions_are_zero() {
        let records = vec![record(120.0, 120.0), record(80.0, 80.0)];
        assert_eq!(MeanAbsoluteError.compute(&records), 0.0);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(MeanAbsoluteError.compute(&[]), 0.0);
    }
}
