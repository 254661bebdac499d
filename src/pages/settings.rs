//! Settings Page
//!
//! Backend connection configuration.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure the dashboard"</p>
            </div>

            <BackendSettings />
            <AboutSection />
        </div>
    }
}

/// Backend connection settings
#[component]
fn BackendSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (backend_url, set_backend_url) = create_signal(api::get_backend_root());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    let state_for_test = state.clone();
    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        let url = backend_url.get();
        api::set_backend_root(&url);

        let state_clone = state_for_test.clone();
        spawn_local(async move {
            match api::fetch_metrics().await {
                Ok(_) => {
                    set_test_result.set(Some(true));
                    state_clone.show_success("Connection successful!");
                }
                Err(e) => {
                    set_test_result.set(Some(false));
                    state_clone.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let state_for_save = state.clone();
    let save_url = move |_| {
        let url = backend_url.get();
        api::set_backend_root(&url);
        state_for_save.show_success("Backend URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Backend Connection"</h2>

            <div class="space-y-4">
                // Backend root URL
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Backend root URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || backend_url.get()
                            on:input=move |ev| set_backend_url.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                    <p class="text-xs text-gray-500 mt-2">
                        {format!(
                            "Metrics, predictions and model data are all served from this root (default {}).",
                            api::DEFAULT_BACKEND_ROOT
                        )}
                    </p>
                </div>

                // Connection status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Connected"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Failed"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"About"</h2>
            <div class="space-y-2 text-sm text-gray-400">
                <p>{format!("Brent Dashboard v{}", env!("CARGO_PKG_VERSION"))}</p>
                <p>
                    "Displays pre-computed forecast metrics and the actual-vs-predicted \
                     price series produced by the model backend."
                </p>
            </div>
        </section>
    }
}
