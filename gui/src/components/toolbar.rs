// Interval selector shown above the chart
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::TimeInterval;

#[component]
pub fn IntervalSelector(selected: TimeInterval, disabled: bool, on_select: EventHandler<TimeInterval>) -> Element {
    let buttons = TimeInterval::ALL.into_iter().map(move |interval| {
        let style = if interval == selected {
            "background: #06b6d4; color: #ffffff;"
        } else {
            "background: #374151; color: #d1d5db;"
        };
        let label = interval.label();
        rsx! {
            button {
                key: "{interval}",
                style: "{style} border: none; border-radius: 6px; padding: 6px 12px; font-size: 14px; cursor: pointer;",
                disabled: disabled,
                onclick: move |_| on_select.call(interval),
                "{label}"
            }
        }
    });

    rsx! {
        div {
            style: "display: flex; gap: 6px; background: #111827; padding: 4px; border-radius: 8px;",
            {buttons}
        }
    }
}
