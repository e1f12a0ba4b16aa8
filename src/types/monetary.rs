use rust_decimal::{Decimal, RoundingStrategy};

pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary value to two decimal places, half to even.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}

/// Cashback is the floored quotient of the spend by 100, so a spend of
/// `-79.37` earns `-1` rather than `0`.
pub fn cashback(total_spent: Decimal) -> Decimal {
    (total_spent / Decimal::ONE_HUNDRED).floor()
}

/// Sums amounts, returning `None` when the total would overflow.
pub fn checked_sum<I>(amounts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
}
