// Candlestick chart with the predicted-close overlay, drawn as SVG.
#![allow(non_snake_case)]
pub mod candlestick;
pub mod prediction_line;

use dioxus::prelude::*;
use shared::models::PredictionRecord;
use shared::utils::format_usd;

use crate::config::ChartConfig;
use candlestick::CandlestickLayer;
use prediction_line::PredictionLine;

pub const CHART_WIDTH: f64 = 1000.0;
const MARGIN_LEFT: f64 = 12.0;
const MARGIN_RIGHT: f64 = 90.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 28.0;
const GRID_LINES: usize = 5;

/// Maps record index and price to SVG coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub count: usize,
}

impl ChartGeometry {
    /// Fits the price axis to every low, high and predicted close. `None` for an empty series.
    pub fn fit(records: &[PredictionRecord], width: f64, height: f64) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let (min_price, max_price) = records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
            (lo.min(r.actual_low).min(r.predicted_close), hi.max(r.actual_high).max(r.predicted_close))
        });
        Some(Self { width, height, min_price, max_price, count: records.len() })
    }

    pub fn plot_width(&self) -> f64 {
        self.width - MARGIN_LEFT - MARGIN_RIGHT
    }

    pub fn plot_height(&self) -> f64 {
        self.height - MARGIN_TOP - MARGIN_BOTTOM
    }

    pub fn slot_width(&self) -> f64 {
        self.plot_width() / self.count.max(1) as f64
    }

    pub fn x_center(&self, index: usize) -> f64 {
        MARGIN_LEFT + index as f64 * self.slot_width() + self.slot_width() / 2.0
    }

    pub fn price_to_y(&self, price: f64) -> f64 {
        let price_range = if (self.max_price - self.min_price) > 0.0 { self.max_price - self.min_price } else { 1.0 };
        MARGIN_TOP + (self.max_price - price) * (self.plot_height() / price_range)
    }

    /// Evenly spaced price levels from top to bottom for grid lines and labels.
    pub fn grid_levels(&self) -> Vec<f64> {
        (0..GRID_LINES)
            .map(|i| self.max_price - (self.max_price - self.min_price) * i as f64 / (GRID_LINES - 1) as f64)
            .collect()
    }
}

#[component]
pub fn PredictionChart(records: Vec<PredictionRecord>, config: ChartConfig) -> Element {
    let height = f64::from(config.height);
    let Some(geometry) = ChartGeometry::fit(&records, CHART_WIDTH, height) else {
        return rsx! {
            div {
                style: "height: {height}px; display: flex; align-items: center; justify-content: center; background: {config.background};",
                class: "muted",
                "No data to display."
            }
        };
    };

    let label_x = CHART_WIDTH - MARGIN_RIGHT + 8.0;
    let grid_right = CHART_WIDTH - MARGIN_RIGHT;
    let grid = geometry.grid_levels().into_iter().map(|level| {
        let y = geometry.price_to_y(level);
        let label_y = y + 4.0;
        let label = format_usd(level, 2);
        rsx! {
            line { x1: "{MARGIN_LEFT}", y1: "{y:.2}", x2: "{grid_right}", y2: "{y:.2}", stroke: "{config.grid_color}", stroke_width: "1" }
            text { x: "{label_x}", y: "{label_y:.2}", fill: "{config.text_color}", font_size: "11", "{label}" }
        }
    });

    let first_label = records.first().map(|r| r.timestamp.format("%H:%M").to_string()).unwrap_or_default();
    let last_label = records.last().map(|r| r.timestamp.format("%H:%M").to_string()).unwrap_or_default();
    let axis_y = height - 8.0;
    let last_x = geometry.x_center(geometry.count - 1);

    rsx! {
        svg {
            width: "{CHART_WIDTH}",
            height: "{height}",
            style: "background: {config.background}; width: 100%;",
            g { class: "grid", {grid} }
            CandlestickLayer {
                records: records.clone(),
                geometry: geometry,
                up_color: config.up_color.clone(),
                down_color: config.down_color.clone(),
            }
            PredictionLine { records: records.clone(), geometry: geometry, color: config.prediction_color.clone() }
            text { x: "{MARGIN_LEFT}", y: "{axis_y}", fill: "{config.text_color}", font_size: "11", "{first_label}" }
            text { x: "{last_x:.2}", y: "{axis_y}", fill: "{config.text_color}", font_size: "11", text_anchor: "end", "{last_label}" }
        }
    }
}
