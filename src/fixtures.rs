use anyhow::Result;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Dataset, Transaction};

pub fn moment(value: &str) -> Result<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(value, "%d.%m.%Y %H:%M:%S")?)
}

pub fn create_transaction(
    date: &str,
    card_id: Option<&str>,
    amount: &str,
    category: &str,
    description: &str
) -> Result<Transaction> {
    Ok(Transaction {
        operation_date: Some(moment(date)?),
        card_id: card_id.map(str::to_string),
        amount: Some(Decimal::from_str(amount)?),
        category: Some(category.to_string()),
        description: Some(description.to_string())
    })
}

/// Late-December operations across three cards plus one cash withdrawal, in export order.
pub fn sample_dataset() -> Result<Dataset> {
    Ok(Dataset::with_all_columns(vec![
        create_transaction("31.12.2021 16:44:00", Some("*7197"), "-78.05", "Супермаркеты", "Ситидрайв")?,
        create_transaction("30.12.2021 22:22:03", Some("*7197"), "-1.32", "Переводы", "Магнит")?,
        create_transaction("30.12.2021 17:50:17", Some("*5091"), "-1411.40", "Фастфуд", "Пополнение через Газпромбанк")?,
        create_transaction("31.12.2021 01:23:42", None, "-500.00", "Наличные", "Снятие в банкомате")?,
        create_transaction("29.12.2021 16:21:47", Some("*4556"), "-35.00", "Фастфуд", "РЖД")?,
        create_transaction("29.12.2021 14:48:04", Some("*4556"), "-35.00", "Каршеринг", "РЖД")?,
        create_transaction("26.12.2021 12:30:00", Some("*5091"), "-100.20", "Маркетплейсы", "Ozon.ru")?,
        create_transaction("20.12.2021 10:05:11", Some("*4556"), "-600.00", "Аптеки", "Аптека Ригла")?,
        create_transaction("15.11.2021 09:00:00", Some("*5091"), "-20000.00", "Переводы", "Перевод на вклад")?,
    ]))
}
