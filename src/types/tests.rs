use super::{cashback, checked_sum, round_money, Clock, FixedClock};
use anyhow::Result;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_round_money_uses_half_even_at_the_second_place() -> Result<()> {
    let test_cases = vec![
        ("0.125", "0.12"),
        ("0.135", "0.14"),
        ("-1446.4", "-1446.4"),
        ("-0.015", "-0.02"),
        ("10.999", "11.00"),
        ("-79.37", "-79.37"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(round_money(Decimal::from_str(input)?).to_string(), expected);
    }

    Ok(())
}

#[test]
fn test_cashback_floors_rather_than_truncates() -> Result<()> {
    let test_cases = vec![
        ("-79.37", "-1"),
        ("-21511.6", "-216"),
        ("-670", "-7"),
        ("2150.5", "21"),
        ("99.99", "0"),
        ("0", "0"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(cashback(Decimal::from_str(input)?), Decimal::from_str(expected)?);
    }

    Ok(())
}

#[test]
fn test_checked_sum_adds_and_detects_overflow() -> Result<()> {
    let amounts = vec![Decimal::from_str("-1411.4")?, Decimal::from_str("-35.0")?];

    assert_eq!(checked_sum(amounts), Some(Decimal::from_str("-1446.4")?));
    assert_eq!(checked_sum(Vec::new()), Some(Decimal::ZERO));
    assert_eq!(checked_sum(vec![Decimal::MAX, Decimal::ONE]), None);

    Ok(())
}

#[test]
fn test_fixed_clock_always_reports_the_same_instant() -> Result<()> {
    let instant = NaiveDateTime::parse_from_str("2021-12-31 12:12:12", "%Y-%m-%d %H:%M:%S")?;
    let clock = FixedClock(instant);

    assert_eq!(clock.now(), instant);
    assert_eq!(clock.now(), instant);

    Ok(())
}
