use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::analytics::window::{DateFormat, DateWindow};
use crate::analytics::{AnalyticsError, Outcome};
use crate::models::{Column, Dataset};

/// Keeps the rows between the first of the reference month and the reference itself.
///
/// `date` is read as `DD.MM.YYYY HH:MM:SS`; an unparseable value resolves to
/// `now`. When the dataset has no usable dates the result is
/// `Outcome::Fallback` holding the unfiltered input.
pub fn filter_month_to_date<'a>(dataset: &'a Dataset, date: &str, now: NaiveDateTime) -> Outcome<'a, Dataset> {
    match month_view(dataset, date, now) {
        Ok(view) => Outcome::Computed(view),
        Err(error) => {
            warn!("Could not filter by month, returning the input dataset: {error}");
            Outcome::Fallback(dataset)
        }
    }
}

fn month_view(dataset: &Dataset, date: &str, now: NaiveDateTime) -> Result<Dataset, AnalyticsError> {
    dataset.require(&[Column::OperationDate])?;

    if let Some((row, _)) = dataset.rows().find(|(_, transaction)| transaction.operation_date.is_none()) {
        return Err(AnalyticsError::missing_value(row, Column::OperationDate));
    }

    let window = DateWindow::month_to_date(date, DateFormat::Dotted, now);
    let view = dataset.retain_view(|transaction| {
        transaction.operation_date.is_some_and(|moment| window.contains(moment))
    });

    debug!("Month filter [{} - {}] kept {} of {} rows", window.start, window.reference, view.len(), dataset.len());

    Ok(view)
}
