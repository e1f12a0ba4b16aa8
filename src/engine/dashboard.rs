use serde::Serialize;

use crate::analytics::{CardSummary, DateFormat, Greeting, RankedTransaction};

/// Composite response for the main dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardResponse {
    pub greeting: Greeting,
    /// `None` when the card summary fell back to its input.
    pub cards: Option<Vec<CardSummary>>,
    pub top_transactions: Vec<RankedTransaction>
}

/// Rewrites an ISO timestamp into the dotted form read by the month filter and
/// the greeting. Anything else is passed through, trimmed.
pub fn normalize_reference_date(value: &str) -> String {
    match DateFormat::Iso.parse(value) {
        Some(moment) => DateFormat::Dotted.format(moment),
        None => value.trim().to_string()
    }
}
