// On-demand model-improvement suggestions from the generative-text endpoint
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::markdown::Markdown;
use crate::services::suggestion_client::{SuggestionClient, SUGGESTION_FAILURE_MESSAGE};
use crate::state::app_state::AssistantState;

#[component]
pub fn UpgradeAssistant() -> Element {
    let client = use_context::<Option<SuggestionClient>>();
    let mut assistant = use_signal(AssistantState::default);

    let on_request = move |_| {
        if !assistant.write().begin() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            let result = match client {
                Some(client) => client.fetch_suggestions().await,
                None => {
                    tracing::warn!("Suggestion client unavailable");
                    assistant.write().apply_failure(SUGGESTION_FAILURE_MESSAGE);
                    return;
                }
            };
            match result {
                Ok(text) => assistant.write().apply_success(text),
                Err(e) => {
                    tracing::error!("Suggestion request failed: {}", e);
                    assistant.write().apply_failure(SUGGESTION_FAILURE_MESSAGE);
                }
            }
        });
    };

    let state = assistant.read().clone();
    let button_label = if state.is_loading { "Analyzing..." } else { "✨ Get Upgrade Suggestions" };
    let error_message = state.error_message.clone().unwrap_or_default();

    rsx! {
        div {
            class: "panel",
            h2 { style: "font-size: 20px; margin: 0 0 8px;", "Model Upgrade Assistant" }
            p { class: "muted", style: "margin: 0 0 16px;",
                "Ask for concrete ideas on feature engineering, tuning, alternative models and external data."
            }
            button {
                style: "background: #0891b2; color: #ffffff; border: none; border-radius: 6px; padding: 10px 20px; font-weight: 600; cursor: pointer;",
                disabled: state.is_loading,
                onclick: on_request,
                "{button_label}"
            }
            if !error_message.is_empty() {
                div {
                    class: "down",
                    style: "margin-top: 16px; padding: 12px; border: 1px solid #ef4444; border-radius: 6px;",
                    "{error_message}"
                }
            }
            if !state.suggestions.is_empty() {
                div { style: "margin-top: 16px;", Markdown { source: state.suggestions.clone() } }
            }
        }
    }
}
