//! Loading Component
//!
//! Skeleton states shown while a fetch is in flight.

use leptos::*;

/// Skeleton loader for metric cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 animate-pulse">
            <div class="h-4 bg-gray-700 rounded w-2/3 mb-4" />
            <div class="h-8 bg-gray-700 rounded w-1/2" />
        </div>
    }
}

/// Skeleton loader for the chart area
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="animate-pulse">
            <div class="h-64 md:h-96 bg-gray-700 rounded-lg" />
        </div>
    }
}
