use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{error, info, warn};

use crate::analytics::{
    card_summaries, filter_month_to_date, format_day, greeting, simple_search, spending_by_category,
    top_transactions, AnalyticsError, CardSummary, Greeting, Outcome, RankedTransaction, SearchResponse,
    SpendingReport, DEFAULT_TOP_QUANT
};
use crate::engine::dashboard::{normalize_reference_date, DashboardResponse};
use crate::models::Dataset;
use crate::storage::ReportSink;
use crate::types::{Clock, SystemClock};

/// Runs the query operations against a clock and persists category reports to a sink.
pub struct AnalyticsEngine<S: ReportSink, C: Clock = SystemClock> {
    sink: Arc<S>,
    clock: C,
    report_name: Option<String>,
    top_quant: usize
}

impl<S: ReportSink> AnalyticsEngine<S, SystemClock> {
    /// Creates an engine on the system clock that writes reports to `sink`.
    pub fn new(sink: Arc<S>) -> Self {
        Self {
            sink,
            clock: SystemClock,
            report_name: None,
            top_quant: DEFAULT_TOP_QUANT
        }
    }
}

impl<S: ReportSink, C: Clock> AnalyticsEngine<S, C> {
    pub fn with_clock<K: Clock>(self, clock: K) -> AnalyticsEngine<S, K> {
        AnalyticsEngine {
            sink: self.sink,
            clock,
            report_name: self.report_name,
            top_quant: self.top_quant
        }
    }

    /// Stores every category report under `name` instead of the dated default.
    pub fn with_report_name(mut self, name: impl Into<String>) -> Self {
        self.report_name = Some(name.into());
        self
    }

    /// Number of transactions the dashboard ranks.
    pub fn with_top_quant(mut self, quant: usize) -> Self {
        self.top_quant = quant;
        self
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Category spend over the 90 days ending at `date`, see [`spending_by_category`].
    ///
    /// A report that matched at least one row is also written to the sink.
    /// Sink failures are logged and never change the returned report.
    ///
    /// # Errors
    /// Returns `AnalyticsError::Schema` if the dataset lacks a required column.
    pub fn spending_by_category(
        &self,
        dataset: &Dataset,
        category: &str,
        date: Option<&str>
    ) -> Result<SpendingReport, AnalyticsError> {
        let now = self.now();
        let report = spending_by_category(dataset, category, date, now)?;

        if !report.is_empty() {
            self.persist(&report, now);
        }

        Ok(report)
    }

    pub fn search(&self, dataset: &Dataset, query: &str) -> SearchResponse {
        simple_search(dataset, query)
    }

    pub fn card_summaries<'a>(&self, dataset: &'a Dataset) -> Outcome<'a, Vec<CardSummary>> {
        card_summaries(dataset)
    }

    pub fn top_transactions(&self, dataset: &Dataset, quant: usize) -> Vec<RankedTransaction> {
        top_transactions(dataset, quant)
    }

    pub fn filter_month_to_date<'a>(&self, dataset: &'a Dataset, date: &str) -> Outcome<'a, Dataset> {
        filter_month_to_date(dataset, date, self.now())
    }

    pub fn greeting(&self, date: &str) -> Greeting {
        greeting(date, self.now())
    }

    /// Builds the dashboard for an ISO reference date (`YYYY-MM-DD HH:MM:SS`).
    ///
    /// Cards and top transactions are computed over the month-to-date view. If
    /// the month filter falls back, they are computed over the whole dataset.
    pub fn dashboard(&self, dataset: &Dataset, date: &str) -> DashboardResponse {
        info!("Building dashboard for '{date}'");

        let now = self.now();
        let reference = normalize_reference_date(date);

        let outcome = filter_month_to_date(dataset, &reference, now);
        if outcome.is_fallback() {
            warn!("Month filter fell back, the dashboard covers the whole dataset");
        }
        let view = outcome.into_dataset();

        let cards = card_summaries(&view).computed();
        if cards.is_none() {
            warn!("Card summaries are unavailable for the dashboard");
        }

        DashboardResponse {
            greeting: greeting(&reference, now),
            cards,
            top_transactions: top_transactions(&view, self.top_quant)
        }
    }

    fn persist(&self, report: &SpendingReport, now: NaiveDateTime) {
        let key = match &self.report_name {
            Some(name) => name.clone(),
            None => {
                warn!("No report name configured, using the dated default");
                default_report_name(now)
            }
        };

        let record = match serde_json::to_value(report) {
            Ok(record) => record,
            Err(error) => {
                error!("Could not serialize the report for '{}': {error}", report.category);
                return;
            }
        };

        match self.sink.write(&key, &record) {
            Ok(()) => info!("Report for '{}' saved as [{key}]", report.category),
            Err(error) => error!("Could not save the report for '{}': {error}", report.category)
        }
    }
}

/// `<DD.MM.YYYY>-report_file.json` for the given day.
pub fn default_report_name(now: NaiveDateTime) -> String {
    format!("{}-report_file.json", format_day(now))
}
