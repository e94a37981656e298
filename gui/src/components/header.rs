#![allow(non_snake_case)]
use dioxus::prelude::*;

#[component]
pub fn Header(
    #[props(into)] title: String,
    #[props(into)] subtitle: String,
    #[props(into)] coin: String,
    #[props(into)] model_label: String,
) -> Element {
    rsx! {
        header {
            style: "display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 16px;",
            div {
                h1 { style: "font-size: 32px; font-weight: bold; margin: 0;", "{title}" }
                p { class: "muted", style: "margin: 4px 0 0;", "{subtitle}" }
            }
            div {
                style: "display: flex; gap: 12px;",
                span { class: "panel", style: "margin: 0; padding: 8px 16px; font-weight: 600;", "{coin}" }
                span { class: "panel accent", style: "margin: 0; padding: 8px 16px;", "{model_label}" }
            }
        }
    }
}
