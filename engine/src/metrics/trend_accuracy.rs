// Share of records whose predicted direction matched the actual one
use super::SeriesMetric;
use shared::models::PredictionRecord;

pub struct TrendAccuracy;

impl SeriesMetric for TrendAccuracy {
    fn name(&self) -> &str {
        "Trend Prediction Accuracy"
    }

    fn compute(&self, records: &[PredictionRecord]) -> f64 {
        if records.is_empty() {
            return 0.0;
        }
        let matches = records.iter().filter(|r| r.trend_match).count();
        100.0 * matches as f64 / records.len() as f64
    }
}
