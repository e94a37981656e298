// Summary metrics over a prediction series
pub mod mean_abs_error;
pub mod trend_accuracy;

pub use mean_abs_error::MeanAbsoluteError;
pub use trend_accuracy::TrendAccuracy;

use shared::models::{AggregateMetrics, PredictionRecord};

// Common trait for all series metrics
pub trait SeriesMetric: Send + Sync {
    fn name(&self) -> &str;
    /// Must return 0.0 for an empty series.
    fn compute(&self, records: &[PredictionRecord]) -> f64;
}

/// Computes the dashboard's two summary metrics. Never mutates the series.
pub fn aggregate(records: &[PredictionRecord]) -> AggregateMetrics {
    AggregateMetrics {
        trend_accuracy_pct: TrendAccuracy.compute(records),
        mean_abs_price_error: MeanAbsoluteError.compute(records),
    }
}
