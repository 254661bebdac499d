//! Metric Card Component
//!
//! Displays a single evaluation statistic.

use leptos::*;

/// Metric card component
#[component]
pub fn MetricCard(
    /// Full metric title, e.g. "Mean Absolute Error (MAE)"
    label: &'static str,
    /// Short badge text, e.g. "MAE"
    abbr: &'static str,
    /// Current value; a missing value renders as a placeholder
    #[prop(into)]
    value: Signal<Option<f64>>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            // Header with metric name
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                <span class="text-gray-500 text-xs font-mono">{abbr}</span>
            </div>

            // Current value
            <div class="text-3xl font-bold mt-2">
                {move || format_metric(value.get())}
            </div>
        </div>
    }
}

/// Format a metric value for display; absent values become an em-dash
fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.3}", v),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_metric_present() {
        assert_eq!(format_metric(Some(2.007)), "2.007");
        assert_eq!(format_metric(Some(0.035)), "0.035");
    }

    #[test]
    fn test_format_metric_absent() {
        assert_eq!(format_metric(None), "—");
    }
}
