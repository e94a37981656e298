// Per-point prediction results, most recent first
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::PredictionRecord;
use shared::utils::{format_signed, format_usd};

pub const SKELETON_ROWS: usize = 5;
const COLUMNS: [&str; 7] = ["Timestamp", "Actual Close", "Predicted Close", "Error", "Actual Trend", "Predicted Trend", "Trend Match"];

/// Display strings for one table row, in column order.
pub fn row_cells(record: &PredictionRecord) -> [String; 7] {
    [
        record.timestamp.format("%H:%M:%S").to_string(),
        format_usd(record.actual_close, 2),
        format_usd(record.predicted_close, 2),
        format_signed(record.prediction_error),
        record.actual_trend.to_string(),
        record.predicted_trend.to_string(),
        if record.trend_match { "✅ Correct" } else { "❌ Incorrect" }.to_string(),
    ]
}

#[component]
pub fn ResultsTable(records: Vec<PredictionRecord>, is_loading: bool) -> Element {
    let column_count = COLUMNS.len();
    let header = COLUMNS.iter().map(|name| rsx! { th { class: "muted", "{name}" } });

    let body = if is_loading {
        let skeleton = (0..SKELETON_ROWS).map(|i| {
            rsx! {
                tr {
                    key: "{i}",
                    td { colspan: "{column_count}",
                        div { style: "height: 16px; background: #374151; border-radius: 4px; opacity: 0.6;" }
                    }
                }
            }
        });
        rsx! { {skeleton} }
    } else if records.is_empty() {
        rsx! {
            tr { td { colspan: "{column_count}", class: "muted", style: "text-align: center;", "No data to display." } }
        }
    } else {
        let rows = records.iter().rev().map(|record| {
            let [time, actual, predicted, error, actual_trend, predicted_trend, matched] = row_cells(record);
            let error_class = if record.prediction_error >= 0.0 { "up" } else { "down" };
            let match_class = if record.trend_match { "up" } else { "down" };
            let row_key = record.timestamp.timestamp();
            rsx! {
                tr {
                    key: "{row_key}",
                    td { "{time}" }
                    td { "{actual}" }
                    td { "{predicted}" }
                    td { class: "{error_class}", "{error}" }
                    td { "{actual_trend}" }
                    td { "{predicted_trend}" }
                    td { class: "{match_class}", "{matched}" }
                }
            }
        });
        rsx! { {rows} }
    };

    rsx! {
        div {
            class: "panel",
            h2 { style: "font-size: 20px; margin: 0 0 16px;", "Detailed Prediction Results" }
            div {
                style: "max-height: 480px; overflow-y: auto;",
                table {
                    thead { tr { {header} } }
                    tbody { {body} }
                }
            }
        }
    }
}
