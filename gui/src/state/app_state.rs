// Dashboard state: the selected interval, the current series, its metrics,
// and the loading/error flags that gate user actions. Components hold these
// inside Dioxus signals; the transitions themselves are plain Rust.

use engine::metrics::aggregate;
use shared::models::{AggregateMetrics, PredictionRecord, PredictionSeries, TimeInterval};
use shared::utils::{format_percent, format_usd};

pub const LOADING_PLACEHOLDER: &str = "...";
pub const DEFAULT_FETCH_ERROR: &str = "Failed to fetch prediction data.";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub interval: TimeInterval,
    pub coin: String,
    pub records: Vec<PredictionRecord>,
    pub metrics: AggregateMetrics,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl DashboardState {
    pub fn new(interval: TimeInterval, coin: impl Into<String>) -> Self {
        Self {
            interval,
            coin: coin.into(),
            records: Vec::new(),
            metrics: AggregateMetrics::default(),
            is_loading: false,
            error_message: None,
        }
    }

    /// Initial state for a dashboard whose first fetch starts on mount, so the
    /// first frame already shows placeholders and disabled controls.
    pub fn loading(interval: TimeInterval, coin: impl Into<String>) -> Self {
        let mut state = Self::new(interval, coin);
        state.begin_fetch();
        state
    }

    /// Starts a fetch for the current interval, e.g. on mount.
    /// Returns `false` while another fetch is still in flight.
    pub fn begin_fetch(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        self.error_message = None;
        true
    }

    /// Switches interval and starts its fetch. Ignored while loading, and a
    /// no-op when the interval is already selected.
    pub fn select_interval(&mut self, interval: TimeInterval) -> bool {
        if self.is_loading || interval == self.interval {
            return false;
        }
        self.interval = interval;
        self.begin_fetch()
    }

    pub fn apply_success(&mut self, series: PredictionSeries) {
        self.metrics = aggregate(&series.records);
        self.coin = series.coin;
        self.records = series.records;
        self.error_message = None;
        self.is_loading = false;
    }

    /// Clears the series so a stale chart never sits next to the error.
    pub fn apply_failure(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.error_message = Some(if message.trim().is_empty() { DEFAULT_FETCH_ERROR.to_string() } else { message });
        self.records.clear();
        self.metrics = AggregateMetrics::default();
        self.is_loading = false;
    }

    pub fn apply_result(&mut self, result: anyhow::Result<PredictionSeries>) {
        match result {
            Ok(series) => self.apply_success(series),
            Err(e) => self.apply_failure(e.to_string()),
        }
    }

    /// Table order: most recent first.
    pub fn rows_most_recent_first(&self) -> impl Iterator<Item = &PredictionRecord> {
        self.records.iter().rev()
    }

    pub fn accuracy_label(&self) -> String {
        if self.is_loading {
            LOADING_PLACEHOLDER.to_string()
        } else {
            format_percent(self.metrics.trend_accuracy_pct)
        }
    }

    pub fn mean_error_label(&self) -> String {
        if self.is_loading {
            LOADING_PLACEHOLDER.to_string()
        } else {
            format_usd(self.metrics.mean_abs_price_error, 4)
        }
    }
}

/// State of the upgrade assistant panel, independent from the dashboard's.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssistantState {
    pub suggestions: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl AssistantState {
    pub fn begin(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        self.error_message = None;
        self.suggestions.clear();
        true
    }

    pub fn apply_success(&mut self, suggestions: String) {
        self.suggestions = suggestions;
        self.is_loading = false;
    }

    pub fn apply_failure(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
        self.is_loading = false;
    }
}
