use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Time granularity between consecutive records of a series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TimeInterval {
    #[default]
    #[serde(rename = "3min")]
    Minutes3,
    #[serde(rename = "5min")]
    Minutes5,
    #[serde(rename = "15min")]
    Minutes15,
}

impl TimeInterval {
    /// Order in which the intervals are offered to the user.
    pub const ALL: [TimeInterval; 3] = [TimeInterval::Minutes3, TimeInterval::Minutes5, TimeInterval::Minutes15];

    pub fn minutes(self) -> u32 {
        match self {
            TimeInterval::Minutes3 => 3,
            TimeInterval::Minutes5 => 5,
            TimeInterval::Minutes15 => 15,
        }
    }

    pub fn from_minutes(minutes: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.minutes() == minutes)
    }

    pub fn duration(self) -> Duration {
        Duration::minutes(i64::from(self.minutes()))
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeInterval::Minutes3 => "3min",
            TimeInterval::Minutes5 => "5min",
            TimeInterval::Minutes15 => "15min",
        }
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time interval '{0}', expected 3min, 5min or 15min")]
pub struct ParseIntervalError(pub String);

impl FromStr for TimeInterval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .strip_suffix("min")
            .and_then(|m| m.parse::<u32>().ok())
            .and_then(Self::from_minutes)
            .ok_or_else(|| ParseIntervalError(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// UP when `close` is at or above `open`.
    pub fn between(open: f64, close: f64) -> Self {
        if close >= open {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Up => "UP",
            Trend::Down => "DOWN",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthetic observation: an OHLC candle plus the model's predicted close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "Actual_Open")]
    pub actual_open: f64,
    #[serde(rename = "Actual_High")]
    pub actual_high: f64,
    #[serde(rename = "Actual_Low")]
    pub actual_low: f64,
    #[serde(rename = "Actual_Close")]
    pub actual_close: f64,
    #[serde(rename = "Predicted_Close")]
    pub predicted_close: f64,
    #[serde(rename = "Prediction_Error (Close)")]
    pub prediction_error: f64,
    #[serde(rename = "Actual_Trend")]
    pub actual_trend: Trend,
    #[serde(rename = "Predicted_Trend")]
    pub predicted_trend: Trend,
    #[serde(rename = "Trend_Match")]
    pub trend_match: bool,
}

impl PredictionRecord {
    /// Builds a record from the candle and predicted close, deriving the error and trend fields.
    pub fn new(timestamp: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64, predicted_close: f64) -> Self {
        let actual_trend = Trend::between(open, close);
        let predicted_trend = Trend::between(open, predicted_close);
        Self {
            timestamp,
            actual_open: open,
            actual_high: high,
            actual_low: low,
            actual_close: close,
            predicted_close,
            prediction_error: predicted_close - close,
            actual_trend,
            predicted_trend,
            trend_match: actual_trend == predicted_trend,
        }
    }
}

/// The ordered output of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PredictionSeries {
    pub coin: String,
    pub interval: TimeInterval,
    #[serde(rename = "predictions")]
    pub records: Vec<PredictionRecord>,
}

impl PredictionSeries {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AggregateMetrics {
    pub trend_accuracy_pct: f64,
    pub mean_abs_price_error: f64,
}
