// Dotted predicted-close line drawn over the candles
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::PredictionRecord;

use super::ChartGeometry;

pub fn polyline_points(records: &[PredictionRecord], geometry: &ChartGeometry) -> String {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{:.2},{:.2}", geometry.x_center(i), geometry.price_to_y(r.predicted_close)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn PredictionLine(records: Vec<PredictionRecord>, geometry: ChartGeometry, color: String) -> Element {
    let points = polyline_points(&records, &geometry);
    if points.is_empty() {
        return None;
    }

    rsx! {
        polyline {
            points: "{points}",
            fill: "none",
            stroke: "{color}",
            stroke_width: "2",
            stroke_dasharray: "2 4"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_one_point_per_record() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let records = vec![
            PredictionRecord::new(ts, 100.0, 110.0, 90.0, 105.0, 104.0),
            PredictionRecord::new(ts, 105.0, 112.0, 100.0, 101.0, 108.0),
            PredictionRecord::new(ts, 101.0, 103.0, 96.0, 97.0, 99.0),
        ];
        let geometry = ChartGeometry::fit(&records, 1000.0, 300.0).unwrap();
        let points = polyline_points(&records, &geometry);
        assert_eq!(points.split(' ').count(), 3);
        assert!(points.split(' ').all(|p| p.contains(',')));
    }

    #[test]
    fn test_no_records_no_points() {
        let geometry = ChartGeometry { width: 1000.0, height: 300.0, min_price: 0.0, max_price: 1.0, count: 0 };
        assert!(polyline_points(&[], &geometry).is_empty());
    }
}
