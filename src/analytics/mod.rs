//! The six query operations over a transaction dataset.
//!
//! Every operation is a pure function of the dataset, its scalar parameters and
//! the current time. Failures are recovered per operation: the category report
//! surfaces schema errors, search turns any failure into an error payload, card
//! summaries and the month filter fall back to their input, and the ranker
//! returns nothing.

mod cards;
mod errors;
mod greeting;
mod month;
mod search;
mod spending;
mod top;
mod window;

use crate::models::Dataset;

pub use cards::{card_summaries, CardSummary, CARD_COLUMNS};
pub use errors::AnalyticsError;
pub use greeting::{greeting, Greeting};
pub use month::filter_month_to_date;
pub use search::{simple_search, FoundOperation, SearchResponse, SearchResult, NO_CARD_DATA, SEARCH_COLUMNS};
pub use spending::{spending_by_category, SpendingReport, SPENDING_COLUMNS};
pub use top::{top_transactions, RankedTransaction, DEFAULT_TOP_QUANT, TOP_COLUMNS};
pub use window::{format_day, resolve_reference, DateFormat, DateWindow, DAY_FORMAT, ROLLING_WINDOW_DAYS};

/// Result of an operation that degrades to handing back its input instead of failing.
///
/// `Fallback` means the computation could not run and the caller is holding
/// the untouched input dataset, not an aggregate or a filtered view.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'a, T> {
    Computed(T),
    Fallback(&'a Dataset)
}

impl<'a, T> Outcome<'a, T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }

    pub fn as_computed(&self) -> Option<&T> {
        match self {
            Outcome::Computed(value) => Some(value),
            Outcome::Fallback(_) => None
        }
    }

    pub fn computed(self) -> Option<T> {
        match self {
            Outcome::Computed(value) => Some(value),
            Outcome::Fallback(_) => None
        }
    }
}

impl Outcome<'_, Dataset> {
    /// The filtered view, or a copy of the untouched input after a fallback.
    pub fn into_dataset(self) -> Dataset {
        match self {
            Outcome::Computed(dataset) => dataset,
            Outcome::Fallback(dataset) => dataset.clone()
        }
    }
}
