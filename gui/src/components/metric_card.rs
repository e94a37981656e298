#![allow(non_snake_case)]
use dioxus::prelude::*;

/// A headline figure with a short description underneath.
#[component]
pub fn MetricCard(#[props(into)] title: String, #[props(into)] value: String, #[props(into)] description: String) -> Element {
    rsx! {
        div {
            class: "panel",
            style: "margin: 0;",
            h3 { class: "muted", style: "font-size: 14px; font-weight: 500; margin: 0;", "{title}" }
            p { class: "accent", style: "font-size: 36px; font-weight: bold; margin: 8px 0;", "{value}" }
            p { class: "muted", style: "font-size: 12px; margin: 0;", "{description}" }
        }
    }
}
