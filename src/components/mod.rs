//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod chart;
pub mod metric_card;
pub mod loading;
pub mod toast;

pub use nav::Nav;
pub use chart::PredictionChart;
pub use metric_card::MetricCard;
pub use loading::{CardSkeleton, ChartSkeleton};
pub use toast::Toast;
