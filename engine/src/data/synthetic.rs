// Synthetic OHLC candles paired with a noisy "predicted close".
use chrono::{DateTime, Utc};
use shared::models::{PredictionRecord, PredictionSeries, TimeInterval};

use super::sequence::DeterministicSequence;

/// Number of records produced per generation call.
pub const POINT_COUNT: usize = 100;

const BASE_PRICE: f64 = 60_000.0;
const BASE_PRICE_SPREAD: f64 = 5_000.0;
/// Open drifts from the previous close by up to ±0.25%, centre slightly biased upward.
const OPEN_DRIFT: f64 = 0.005;
const OPEN_DRIFT_CENTRE: f64 = 0.495;
/// High/low extend beyond the open/previous-close body by up to 0.5%.
const WICK_EXTENSION: f64 = 0.005;
/// Predicted close lands within ±150 of the actual close.
const PREDICTION_NOISE: f64 = 300.0;

pub struct SyntheticMarketGenerator {
    interval: TimeInterval,
    point_count: usize,
}

impl SyntheticMarketGenerator {
    pub fn new(interval: TimeInterval) -> Self {
        Self { interval, point_count: POINT_COUNT }
    }

    /// The sequence seed is the interval's minute value, so each interval has its own stable shape.
    pub fn seed(&self) -> f64 {
        f64::from(self.interval.minutes())
    }

    /// Generates the series ending at `now`: the first record sits
    /// `point_count` intervals before it and each subsequent record one
    /// interval later.
    pub fn generate(&self, coin: &str, now: DateTime<Utc>) -> PredictionSeries {
        let mut rand = DeterministicSequence::new(self.seed());
        let step = self.interval.duration();

        let mut last_close = BASE_PRICE + rand.next_value() * BASE_PRICE_SPREAD;
        let start = now - step * self.point_count as i32;

        let mut records = Vec::with_capacity(self.point_count);
        for i in 0..self.point_count {
            let timestamp = start + step * i as i32;

            let open = last_close * (1.0 + (rand.next_value() - OPEN_DRIFT_CENTRE) * OPEN_DRIFT);
            let high = open.max(last_close) * (1.0 + rand.next_value() * WICK_EXTENSION);
            let low = open.min(last_close) * (1.0 - rand.next_value() * WICK_EXTENSION);
            let close = low + (high - low) * rand.next_value();

            let predicted_close = close + (rand.next_value() - 0.5) * PREDICTION_NOISE;

            records.push(PredictionRecord::new(timestamp, open, high, low, close, predicted_close));
            last_close = close;
        }

        tracing::debug!(interval = %self.interval, count = records.len(), "Generated synthetic prediction series");

        PredictionSeries {
            coin: coin.to_string(),
            interval: self.interval,
            records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use shared::models::Trend;

    const EPS: f64 = 1e-9;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_series_has_point_count_records_and_ticker() {
        let series = SyntheticMarketGenerator::new(TimeInterval::Minutes3).generate("BTC-USD", fixed_now());
        assert_eq!(series.len(), POINT_COUNT);
        assert_eq!(series.coin, "BTC-USD");
        assert_eq!(series.interval, TimeInterval::Minutes3);
    }

    #[test]
    fn test_timestamps_step_by_interval_and_end_before_now() {
        for interval in TimeInterval::ALL {
            let now = fixed_now();
            let series = SyntheticMarketGenerator::new(interval).generate("BTC-USD", now);
            let first = series.records[0].timestamp;
            assert_eq!(first, now - interval.duration() * POINT_COUNT as i32);
            for pair in series.records.windows(2) {
                assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::minutes(i64::from(interval.minutes())));
            }
            assert!(series.records.last().unwrap().timestamp < now);
        }
    }

    #[test]
    fn test_candles_keep_ohlc_ordering() {
        for interval in TimeInterval::ALL {
            let series = SyntheticMarketGenerator::new(interval).generate("BTC-USD", fixed_now());
            for (i, r) in series.records.iter().enumerate() {
                assert!(r.actual_low <= r.actual_open.min(r.actual_close) + EPS, "low violated at {}", i);
                assert!(r.actual_open.max(r.actual_close) <= r.actual_high + EPS, "high violated at {}", i);
                assert!(r.actual_low > 0.0 && r.predicted_close > 0.0);
            }
        }
    }

    #[test]
    fn test_trend_fields_are_consistent() {
        let series = SyntheticMarketGenerator::new(TimeInterval::Minutes5).generate("BTC-USD", fixed_now());
        for r in &series.records {
            assert_eq!(r.actual_trend, Trend::between(r.actual_open, r.actual_close));
            assert_eq!(r.predicted_trend, Trend::between(r.actual_open, r.predicted_close));
            assert_eq!(r.trend_match, r.actual_trend == r.predicted_trend);
            assert!((r.prediction_error - (r.predicted_close - r.actual_close)).abs() < EPS);
            assert!(r.prediction_error.abs() <= PREDICTION_NOISE / 2.0 + EPS);
        }
    }

    #[test]
    fn test_close_chains_into_next_candle() {
        let series = SyntheticMarketGenerator::new(TimeInterval::Minutes15).generate("BTC-USD", fixed_now());
        for pair in series.records.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            // Open stays within the drift band around the previous close.
            let drift = (next.actual_open / prev.actual_close - 1.0).abs();
            assert!(drift <= OPEN_DRIFT * 0.505 + EPS, "drift {} too large", drift);
            assert!(next.actual_high >= prev.actual_close - EPS);
            assert!(next.actual_low <= prev.actual_close + EPS);
        }
    }

    #[test]
    fn test_generation_is_reproducible_for_an_interval() {
        let a = SyntheticMarketGenerator::new(TimeInterval::Minutes3).generate("BTC-USD", fixed_now());
        let b = SyntheticMarketGenerator::new(TimeInterval::Minutes3).generate("BTC-USD", fixed_now());
        assert_eq!(a, b);

        let c = SyntheticMarketGenerator::new(TimeInterval::Minutes5).generate("BTC-USD", fixed_now());
        assert_ne!(a.records[0].actual_close, c.records[0].actual_close);
    }

    #[test]
    fn test_first_open_derives_from_seeded_base_price() {
        let mut rand = DeterministicSequence::new(3.0);
        let base = BASE_PRICE + rand.next_value() * BASE_PRICE_SPREAD;
        let expected_open = base * (1.0 + (rand.next_value() - OPEN_DRIFT_CENTRE) * OPEN_DRIFT);

        let series = SyntheticMarketGenerator::new(TimeInterval::Minutes3).generate("BTC-USD", fixed_now());
        assert_eq!(series.records[0].actual_open.to_bits(), expected_open.to_bits());
        assert!((BASE_PRICE..BASE_PRICE + BASE_PRICE_SPREAD).contains(&base));
    }
}
