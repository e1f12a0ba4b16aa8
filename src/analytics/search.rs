use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{error, info};

use crate::analytics::window::format_day;
use crate::analytics::AnalyticsError;
use crate::models::{Column, Dataset, Transaction};
use crate::types::RowIndex;

pub const SEARCH_COLUMNS: [Column; 5] = Column::ALL;

/// Shown in place of a card number for operations without a card.
pub const NO_CARD_DATA: &str = "Нет данных";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub count: usize,
    pub operations: Vec<FoundOperation>
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoundOperation {
    pub date: String,
    pub cards: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: Option<String>,
    pub description: Option<String>
}

/// Either the matches or an error payload; search never fails past its boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Found(SearchResult),
    Failed {
        #[serde(rename = "ERROR")]
        error: String
    }
}

impl SearchResponse {
    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            SearchResponse::Found(result) => Some(result),
            SearchResponse::Failed { .. } => None
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Finds operations whose description or category contains `query`, ignoring case.
///
/// Matches keep the dataset's row order. Rows with a blank description and
/// category never match.
pub fn simple_search(dataset: &Dataset, query: &str) -> SearchResponse {
    info!("Searching operations for '{query}'");

    match search_operations(dataset, query) {
        Ok(result) => {
            info!("Search for '{query}' found {} operations", result.count);
            SearchResponse::Found(result)
        }
        Err(error) => {
            error!("Search for '{query}' failed: {error}");
            SearchResponse::Failed { error: format!("An error occurred: {error}") }
        }
    }
}

fn search_operations(dataset: &Dataset, query: &str) -> Result<SearchResult, AnalyticsError> {
    dataset.require(&SEARCH_COLUMNS)?;

    let needle = query.to_lowercase();

    let operations = dataset.rows()
        .filter(|(_, transaction)| {
            contains_ignoring_case(transaction.description.as_deref(), &needle)
                || contains_ignoring_case(transaction.category.as_deref(), &needle)
        })
        .map(|(row, transaction)| found_operation(row, transaction))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SearchResult {
        count: operations.len(),
        operations
    })
}

fn found_operation(row: RowIndex, transaction: &Transaction) -> Result<FoundOperation, AnalyticsError> {
    let date = transaction.operation_date
        .ok_or_else(|| AnalyticsError::missing_value(row, Column::OperationDate))?;
    let amount = transaction.amount
        .ok_or_else(|| AnalyticsError::missing_value(row, Column::Amount))?;

    Ok(FoundOperation {
        date: format_day(date),
        cards: transaction.masked_card().unwrap_or_else(|| NO_CARD_DATA.to_string()),
        amount,
        category: transaction.category.clone(),
        description: transaction.description.clone()
    })
}

fn contains_ignoring_case(text: Option<&str>, needle: &str) -> bool {
    text.is_some_and(|text| text.to_lowercase().contains(needle))
}
