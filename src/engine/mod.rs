mod analytics_engine;
mod dashboard;

pub use analytics_engine::{default_report_name, AnalyticsEngine};
pub use dashboard::{normalize_reference_date, DashboardResponse};
