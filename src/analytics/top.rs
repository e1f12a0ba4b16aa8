use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use crate::analytics::window::format_day;
use crate::analytics::AnalyticsError;
use crate::models::{Column, Dataset, Transaction};
use crate::types::{round_money, RowIndex};

pub const DEFAULT_TOP_QUANT: usize = 5;

pub const TOP_COLUMNS: [Column; 4] = [
    Column::OperationDate,
    Column::Amount,
    Column::Category,
    Column::Description
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTransaction {
    pub date: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: Option<String>,
    pub description: Option<String>
}

/// The `quant` rows with the largest signed amount, largest first.
///
/// Equal amounts keep their dataset order. Any failure yields an empty list.
pub fn top_transactions(dataset: &Dataset, quant: usize) -> Vec<RankedTransaction> {
    info!("Ranking the top {quant} of {} transactions", dataset.len());

    rank_transactions(dataset, quant).unwrap_or_else(|error| {
        warn!("Could not rank transactions: {error}");
        Vec::new()
    })
}

fn rank_transactions(dataset: &Dataset, quant: usize) -> Result<Vec<RankedTransaction>, AnalyticsError> {
    dataset.require(&TOP_COLUMNS)?;

    let mut candidates: Vec<(RowIndex, Decimal, &Transaction)> = dataset.rows()
        .map(|(row, transaction)| {
            transaction.amount
                .map(|amount| (row, amount, transaction))
                .ok_or_else(|| AnalyticsError::missing_value(row, Column::Amount))
        })
        .collect::<Result<_, _>>()?;

    //NOTE: sort_by is stable, so equal amounts stay in row order
    candidates.sort_by(|left, right| right.1.cmp(&left.1));

    candidates.into_iter()
        .take(quant)
        .map(|(row, amount, transaction)| -> Result<RankedTransaction, AnalyticsError> {
            let date = transaction.operation_date
                .ok_or_else(|| AnalyticsError::missing_value(row, Column::OperationDate))?;

            Ok(RankedTransaction {
                date: format_day(date),
                amount: round_money(amount),
                category: transaction.category.clone(),
                description: transaction.description.clone()
            })
        })
        .collect()
}
