//! Dashboard Page
//!
//! Model evaluation metrics and the actual-vs-predicted chart.

use leptos::*;
use serde_json::Value;

use crate::api;
use crate::components::{CardSkeleton, MetricCard, PredictionChart};
use crate::state::global::{FetchStatus, GlobalState, MetricKey, MetricsReport};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let loading = state.loading;

    // Fetch initial data on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        load_overview(state_for_effect.clone());
    });

    let state_for_refresh = state.clone();

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Brent Oil Price Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Forecast model performance at a glance"</p>
                </div>

                <button
                    on:click=move |_| load_overview(state_for_refresh.clone())
                    disabled=move || loading.get()
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            <DashboardView
                metrics=state.metrics
                status=state.metrics_status
                predictions=state.predictions
            />
        </div>
    }
}

/// Fetch metrics and predictions in one background task.
///
/// Each failure is caught and surfaced as a per-section state plus a toast.
fn load_overview(state: GlobalState) {
    spawn_local(async move {
        state.loading.set(true);
        state.metrics_status.set(FetchStatus::Loading);

        match api::fetch_metrics().await {
            Ok(report) => {
                state.metrics.set(report);
                state.metrics_status.set(FetchStatus::Ready);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch metrics: {}", e).into());
                state.metrics_status.set(FetchStatus::Errored(e.to_string()));
                state.show_error(&format!("Metrics unavailable: {}", e));
            }
        }

        match api::fetch_predictions().await {
            Ok(value) => {
                state.predictions.set(value);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch predictions: {}", e).into());
                state.show_error(&format!("Predictions unavailable: {}", e));
            }
        }

        state.last_updated.set(Some(chrono::Utc::now().timestamp_millis()));
        state.loading.set(false);
    });
}

/// Metric card grid plus the embedded prediction chart.
///
/// Pure layout over its inputs. The predictions payload is carried through
/// even though nothing renders it by default; `predictions_slot` is the
/// hook for a caller that wants to show it.
#[component]
pub fn DashboardView(
    #[prop(into)] metrics: Signal<MetricsReport>,
    #[prop(into)] status: Signal<FetchStatus>,
    #[prop(into)] predictions: Signal<Value>,
    #[prop(optional)] predictions_slot: Option<Callback<Value, View>>,
) -> impl IntoView {
    view! {
        <div class="space-y-8">
            // One card per metric, fixed order
            <section>
                <h2 class="text-lg font-semibold mb-4">"Model Metrics"</h2>
                {move || match status.get() {
                    FetchStatus::Idle | FetchStatus::Loading => view! {
                        <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                            {MetricKey::ALL.iter().map(|_| view! { <CardSkeleton /> }).collect_view()}
                        </div>
                    }.into_view(),
                    FetchStatus::Errored(_) => view! {
                        <div class="bg-gray-800 rounded-xl p-6 text-center">
                            <p class="text-gray-400">"Metrics unavailable"</p>
                            <p class="text-sm text-gray-500 mt-1">
                                "Check the backend address under Settings, then refresh."
                            </p>
                        </div>
                    }.into_view(),
                    FetchStatus::Ready => view! {
                        <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                            {MetricKey::ALL.iter().map(|key| {
                                let key = *key;
                                let value = Signal::derive(move || metrics.get().value(key));
                                view! {
                                    <MetricCard label=key.label() abbr=key.short_label() value=value />
                                }
                            }).collect_view()}
                        </div>
                    }.into_view(),
                }}
            </section>

            // Main chart
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"LSTM Model Brent Oil Price Prediction"</h2>
                <PredictionChart />
            </section>

            // Optional predictions rendering slot; nothing shows without one
            {predictions_slot.map(|slot| view! {
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Predictions"</h2>
                    {move || slot.call(predictions.get())}
                </section>
            })}
        </div>
    }
}
