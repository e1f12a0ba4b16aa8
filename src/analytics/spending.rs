use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::analytics::window::{format_day, DateFormat, DateWindow};
use crate::analytics::AnalyticsError;
use crate::models::{Column, Dataset, Transaction};
use crate::types::{checked_sum, round_money};

pub const SPENDING_COLUMNS: [Column; 4] = [
    Column::OperationDate,
    Column::CardId,
    Column::Amount,
    Column::Category
];

/// Total spend for one category over a rolling 90-day window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingReport {
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expenses: Decimal,
    pub date_from: String,
    pub date_to: String,
    /// Number of rows that fell into the window. Not part of the serialized report.
    #[serde(skip)]
    pub matched_rows: usize
}

impl SpendingReport {
    pub fn is_empty(&self) -> bool {
        self.matched_rows == 0
    }
}

/// Sums the spend of `category` over the 90 days ending at `date`.
///
/// `date` is read as `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`; when it is `None`
/// or unparseable the window ends at `now`. Rows with a blank amount cell do
/// not count as matches. No matching rows is not an error, it yields a report
/// with a zero total.
///
/// # Errors
/// Returns `AnalyticsError::Schema` if the dataset lacks any of `SPENDING_COLUMNS`.
pub fn spending_by_category(
    dataset: &Dataset,
    category: &str,
    date: Option<&str>,
    now: NaiveDateTime
) -> Result<SpendingReport, AnalyticsError> {
    info!("Computing spending for category '{category}'");

    dataset.require(&SPENDING_COLUMNS)?;

    let window = match date {
        Some(value) => DateWindow::rolling(value, DateFormat::Iso, now),
        None => DateWindow::rolling_ending_at(now)
    };

    let matched: Vec<&Transaction> = dataset.transactions().iter()
        .filter(|transaction| transaction.category.as_deref() == Some(category))
        .filter(|transaction| transaction.operation_date.is_some_and(|moment| window.contains(moment)))
        .filter(|transaction| transaction.amount.is_some())
        .collect();

    let mut report = SpendingReport {
        category: category.to_string(),
        total_expenses: Decimal::ZERO,
        date_from: format_day(window.start),
        date_to: format_day(window.reference),
        matched_rows: matched.len()
    };

    if matched.is_empty() {
        warn!("No spending for category '{category}' between {} and {}", report.date_from, report.date_to);
        return Ok(report);
    }

    let total = checked_sum(matched.iter().filter_map(|transaction| transaction.amount))
        .ok_or_else(|| AnalyticsError::overflow(category))?;

    debug!("Category '{category}' matched {} rows totalling {total}", matched.len());

    report.total_expenses = round_money(total);

    Ok(report)
}
