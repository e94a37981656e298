// Root dashboard component: owns the dashboard state and wires the engine
// client to the interval selector.
#![allow(non_snake_case)]
use anyhow::anyhow;
use dioxus::prelude::*;
use engine::config::settings::DEFAULT_COIN_TICKER;
use shared::models::TimeInterval;

use crate::components::{Header, IntervalSelector, MetricCard, PredictionChart, ResultsTable, UpgradeAssistant};
use crate::config::theme::ThemePalette;
use crate::config::{assistant_api_key_from_env, AppConfig};
use crate::services::engine_client::EngineClient;
use crate::services::suggestion_client::SuggestionClient;
use crate::state::app_state::DashboardState;

async fn run_fetch(mut dashboard: Signal<DashboardState>, client: Option<EngineClient>) {
    let interval = dashboard.peek().interval;
    tracing::info!(%interval, "Fetching prediction series");
    let result = match client {
        Some(client) => client.fetch_predictions(interval).await,
        None => Err(anyhow!("Prediction engine is not available.")),
    };
    if let Err(e) = &result {
        tracing::error!(%interval, "Prediction fetch failed: {}", e);
    }
    dashboard.write().apply_result(result);
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let stylesheet = use_hook(|| ThemePalette::default_dark().stylesheet());

    let engine_client = use_hook(|| match EngineClient::from_config(&config.engine) {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::error!("Failed to set up engine client: {}", e);
            None
        }
    });

    use_context_provider(|| {
        let api_key = assistant_api_key_from_env();
        if api_key.is_none() {
            tracing::warn!("No GEMINI_API_KEY or API_KEY set; upgrade suggestions will fail.");
        }
        SuggestionClient::new(&config.assistant, api_key)
            .map_err(|e| tracing::error!("Failed to build suggestion client: {}", e))
            .ok()
    });

    let mut dashboard = use_signal(|| DashboardState::loading(config.app.default_interval, DEFAULT_COIN_TICKER));

    let mount_client = engine_client.clone();
    use_hook(move || spawn(run_fetch(dashboard, mount_client)));

    let on_select = move |interval: TimeInterval| {
        if dashboard.write().select_interval(interval) {
            spawn(run_fetch(dashboard, engine_client.clone()));
        } else {
            tracing::debug!(%interval, "Interval change ignored");
        }
    };

    let state = dashboard.read().clone();
    let error_message = state.error_message.clone().unwrap_or_default();
    let rows = state.records.clone();

    rsx! {
        style { "{stylesheet}" }
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 32px;",
            Header {
                title: config.app.title.clone(),
                subtitle: config.app.subtitle.clone(),
                coin: state.coin.clone(),
                model_label: config.app.model_label.clone(),
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 24px; margin-top: 32px;",
                MetricCard {
                    title: "Trend Prediction Accuracy",
                    value: state.accuracy_label(),
                    description: "Share of points where the predicted direction matched the actual one.",
                }
                MetricCard {
                    title: "Mean Absolute Price Error",
                    value: state.mean_error_label(),
                    description: "Average absolute gap between predicted and actual close.",
                }
            }
            div {
                class: "panel",
                style: "position: relative;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                    h2 { style: "font-size: 20px; margin: 0;", "Prediction vs. Actual Price" }
                    IntervalSelector { selected: state.interval, disabled: state.is_loading, on_select: on_select }
                }
                if state.is_loading {
                    div {
                        class: "muted",
                        style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(17, 24, 39, 0.6); border-radius: 8px;",
                        "Loading..."
                    }
                }
                PredictionChart { records: state.records.clone(), config: config.chart.clone() }
                if !error_message.is_empty() {
                    p { class: "down", style: "text-align: center; margin: 16px 0 0;", "{error_message}" }
                }
            }
            ResultsTable { records: rows, is_loading: state.is_loading }
            UpgradeAssistant {}
        }
    }
}
