// Candle bodies and wicks
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::{PredictionRecord, Trend};

use super::ChartGeometry;

/// Body width as a share of the slot each candle occupies.
const BODY_RATIO: f64 = 0.6;

#[component]
pub fn CandlestickLayer(records: Vec<PredictionRecord>, geometry: ChartGeometry, up_color: String, down_color: String) -> Element {
    let body_width = (geometry.slot_width() * BODY_RATIO).max(1.0);

    let candles = records.iter().enumerate().map(|(i, r)| {
        let x = geometry.x_center(i);
        let color = if r.actual_trend == Trend::Up { up_color.clone() } else { down_color.clone() };
        let body_top = geometry.price_to_y(r.actual_open.max(r.actual_close));
        let body_height = (geometry.price_to_y(r.actual_open.min(r.actual_close)) - body_top).max(1.0);
        let wick_top = geometry.price_to_y(r.actual_high);
        let wick_bottom = geometry.price_to_y(r.actual_low);
        let body_x = x - body_width / 2.0;

        rsx! {
            line { x1: "{x:.2}", y1: "{wick_top:.2}", x2: "{x:.2}", y2: "{wick_bottom:.2}", stroke: "{color}", stroke_width: "1" }
            rect { x: "{body_x:.2}", y: "{body_top:.2}", width: "{body_width:.2}", height: "{body_height:.2}", fill: "{color}" }
        }
    });

    rsx! {
        g { class: "candles", {candles} }
    }
}
