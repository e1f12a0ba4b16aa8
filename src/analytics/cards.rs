use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::analytics::{AnalyticsError, Outcome};
use crate::models::{mask_card_id, Column, Dataset};
use crate::types::{cashback, round_money};

pub const CARD_COLUMNS: [Column; 2] = [Column::CardId, Column::Amount];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSummary {
    pub last_digits: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cashback: Decimal
}

/// Totals spend and cashback per card, in the order cards first appear.
///
/// Rows without a card are ignored. If the dataset cannot be grouped (missing
/// columns, a carded row without an amount) the result is `Outcome::Fallback`
/// holding the input dataset.
pub fn card_summaries(dataset: &Dataset) -> Outcome<'_, Vec<CardSummary>> {
    match summarize_cards(dataset) {
        Ok(summaries) => Outcome::Computed(summaries),
        Err(error) => {
            warn!("Could not summarize cards, returning the input dataset: {error}");
            Outcome::Fallback(dataset)
        }
    }
}

fn summarize_cards(dataset: &Dataset) -> Result<Vec<CardSummary>, AnalyticsError> {
    dataset.require(&CARD_COLUMNS)?;

    let mut groups: Vec<(&str, Decimal)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (row, transaction) in dataset.rows() {
        let Some(card_id) = transaction.card_id.as_deref() else {
            continue
        };

        let amount = transaction.amount
            .ok_or_else(|| AnalyticsError::missing_value(row, Column::Amount))?;

        let position = *positions.entry(card_id).or_insert_with(|| {
            groups.push((card_id, Decimal::ZERO));
            groups.len() - 1
        });

        let total = &mut groups[position].1;
        *total = total.checked_add(amount)
            .ok_or_else(|| AnalyticsError::overflow(card_id))?;
    }

    debug!("Grouped {} rows into {} cards", dataset.len(), groups.len());

    Ok(groups.into_iter()
        .map(|(card_id, total)| CardSummary {
            last_digits: mask_card_id(card_id),
            total_spent: round_money(total),
            cashback: round_money(cashback(total))
        })
        .collect())
}
