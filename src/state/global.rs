//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the domain types
//! shared by the dashboard views.

use leptos::*;
use serde_json::Value;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Latest evaluation metrics from the API
    pub metrics: RwSignal<MetricsReport>,
    /// Raw predictions payload, passed through to the dashboard layout
    pub predictions: RwSignal<Value>,
    /// Lifecycle of the metrics/predictions fetch
    pub metrics_status: RwSignal<FetchStatus>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Timestamp of the last successful refresh (ms since epoch)
    pub last_updated: RwSignal<Option<i64>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        metrics: create_rw_signal(MetricsReport::default()),
        predictions: create_rw_signal(Value::Object(Default::default())),
        metrics_status: create_rw_signal(FetchStatus::Idle),
        loading: create_rw_signal(false),
        last_updated: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// Lifecycle of a single fetch-and-render flow
#[derive(Clone, Debug, PartialEq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Ready,
    Errored(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Idle | FetchStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchStatus::Errored(message) => Some(message),
            _ => None,
        }
    }
}

/// The five regression statistics reported by the backend.
///
/// Every field is optional: the backend may omit any of them and the
/// dashboard still renders a placeholder card.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct MetricsReport {
    #[serde(default, rename = "MAE")]
    pub mae: Option<f64>,
    #[serde(default, rename = "MSE")]
    pub mse: Option<f64>,
    #[serde(default, rename = "RMSE")]
    pub rmse: Option<f64>,
    #[serde(default, rename = "R2 Score")]
    pub r2_score: Option<f64>,
    #[serde(default, rename = "MAPE")]
    pub mape: Option<f64>,
}

impl MetricsReport {
    /// Value for a metric, if the backend reported one
    pub fn value(&self, key: MetricKey) -> Option<f64> {
        match key {
            MetricKey::Mae => self.mae,
            MetricKey::Mse => self.mse,
            MetricKey::Rmse => self.rmse,
            MetricKey::R2Score => self.r2_score,
            MetricKey::Mape => self.mape,
        }
    }
}

/// Display identity of a metric card.
///
/// `ALL` fixes the card order independent of JSON key order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricKey {
    Mae,
    Mse,
    Rmse,
    R2Score,
    Mape,
}

impl MetricKey {
    pub const ALL: [MetricKey; 5] = [
        MetricKey::Mae,
        MetricKey::Mse,
        MetricKey::Rmse,
        MetricKey::R2Score,
        MetricKey::Mape,
    ];

    /// Long card title
    pub fn label(self) -> &'static str {
        match self {
            MetricKey::Mae => "Mean Absolute Error (MAE)",
            MetricKey::Mse => "Mean Squared Error (MSE)",
            MetricKey::Rmse => "Root Mean Squared Error (RMSE)",
            MetricKey::R2Score => "R2 Score",
            MetricKey::Mape => "Mean Absolute Percentage Error (MAPE)",
        }
    }

    /// Short badge text
    pub fn short_label(self) -> &'static str {
        match self {
            MetricKey::Mae => "MAE",
            MetricKey::Mse => "MSE",
            MetricKey::Rmse => "RMSE",
            MetricKey::R2Score => "R2",
            MetricKey::Mape => "MAPE",
        }
    }
}

/// Aligned actual/predicted value sequences for charting.
///
/// Derived from the model-data endpoint's column-vector rows: element 0 of
/// each row is the value, and the two row lists are truncated to the shorter
/// one so the series always stay the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelSeries {
    pub actual: Vec<f64>,
    pub predicted: Vec<f64>,
}

impl ModelSeries {
    /// Flatten two parallel row lists into aligned series.
    ///
    /// Rows past the shorter list are dropped, as is any index where either
    /// row is empty; both guards keep `actual` and `predicted` aligned.
    pub fn from_rows(y_test: &[Vec<f64>], test_predict: &[Vec<f64>]) -> Self {
        let mut series = ModelSeries::default();

        for (actual_row, predicted_row) in y_test.iter().zip(test_predict.iter()) {
            let (Some(actual), Some(predicted)) = (actual_row.first(), predicted_row.first())
            else {
                continue;
            };
            series.actual.push(*actual);
            series.predicted.push(*predicted);
        }

        series
    }

    /// Number of points per series
    pub fn len(&self) -> usize {
        self.actual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actual.is_empty()
    }

    /// Integer x-axis labels `0..n`
    pub fn labels(&self) -> Vec<usize> {
        (0..self.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_card_order_is_fixed() {
        let labels: Vec<_> = MetricKey::ALL.iter().map(|k| k.short_label()).collect();
        assert_eq!(labels, vec!["MAE", "MSE", "RMSE", "R2", "MAPE"]);
    }

    #[test]
    fn test_metrics_report_parses_wire_names() {
        // Key order in the payload does not matter
        let report: MetricsReport = serde_json::from_str(
            r#"{"MAPE": 0.035, "R2 Score": 0.979, "MAE": 2.007, "RMSE": 2.911, "MSE": 8.475}"#,
        )
        .unwrap();

        assert_eq!(report.value(MetricKey::Mae), Some(2.007));
        assert_eq!(report.value(MetricKey::Mse), Some(8.475));
        assert_eq!(report.value(MetricKey::Rmse), Some(2.911));
        assert_eq!(report.value(MetricKey::R2Score), Some(0.979));
        assert_eq!(report.value(MetricKey::Mape), Some(0.035));
    }

    #[test]
    fn test_metrics_report_tolerates_missing_keys() {
        let report: MetricsReport = serde_json::from_str(r#"{"MAE": 1.5}"#).unwrap();

        assert_eq!(report.value(MetricKey::Mae), Some(1.5));
        for key in [MetricKey::Mse, MetricKey::Rmse, MetricKey::R2Score, MetricKey::Mape] {
            assert_eq!(report.value(key), None);
        }
    }

    #[test]
    fn test_model_series_flattens_rows() {
        let y_test = vec![vec![10.0], vec![20.0], vec![30.0]];
        let test_predict = vec![vec![11.0], vec![19.0], vec![31.0]];

        let series = ModelSeries::from_rows(&y_test, &test_predict);

        assert_eq!(series.actual, vec![10.0, 20.0, 30.0]);
        assert_eq!(series.predicted, vec![11.0, 19.0, 31.0]);
        assert_eq!(series.labels(), vec![0, 1, 2]);
    }

    #[test]
    fn test_model_series_truncates_to_shorter_list() {
        let y_test = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0], vec![5.0]];
        let test_predict = vec![vec![1.1], vec![2.1], vec![3.1]];

        let series = ModelSeries::from_rows(&y_test, &test_predict);

        assert_eq!(series.len(), 3);
        assert_eq!(series.actual, vec![1.0, 2.0, 3.0]);
        assert_eq!(series.predicted, vec![1.1, 2.1, 3.1]);
    }

    #[test]
    fn test_model_series_skips_empty_rows_pairwise() {
        let y_test = vec![vec![1.0], vec![], vec![3.0, 99.0]];
        let test_predict = vec![vec![1.1], vec![2.1], vec![3.1]];

        let series = ModelSeries::from_rows(&y_test, &test_predict);

        // The empty row drops the pair on both sides; extra elements past
        // index 0 are ignored.
        assert_eq!(series.actual, vec![1.0, 3.0]);
        assert_eq!(series.predicted, vec![1.1, 3.1]);
    }

    #[test]
    fn test_model_series_empty_input() {
        let series = ModelSeries::from_rows(&[], &[]);
        assert!(series.is_empty());
        assert!(series.labels().is_empty());
    }

    #[test]
    fn test_fetch_status_helpers() {
        assert!(FetchStatus::Idle.is_loading());
        assert!(FetchStatus::Loading.is_loading());
        assert!(!FetchStatus::Ready.is_loading());

        let errored = FetchStatus::Errored("boom".to_string());
        assert!(!errored.is_loading());
        assert_eq!(errored.error_message(), Some("boom"));
        assert_eq!(FetchStatus::Ready.error_message(), None);
    }
}
