//! Brent Dashboard
//!
//! Oil price forecast dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Evaluation metric cards (MAE, MSE, RMSE, R2 Score, MAPE)
//! - Actual-vs-predicted price chart
//! - Configurable backend address
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the forecast backend via HTTP; all
//! model training and inference happen server-side.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
