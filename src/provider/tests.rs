use super::{CsvDatasetProvider, DatasetProvider, ProviderError, SignConvention};
use anyhow::Result;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;
use tempfile::NamedTempFile;

use crate::models::Column;

const EXPORT: &str = "\u{feff}Дата операции,Номер карты,Статус,Сумма операции,Категория,Описание
31.12.2021 16:44:00,*7197,OK,-78.05,Супермаркеты,Ситидрайв
31.12.2021 01:23:42,,OK,\"-500,00\",Наличные,Снятие в банкомате
30.12.2021 17:50:17,*5091,OK,\"-1 411,40\",Фастфуд,Пополнение через Газпромбанк
вчера,*4556,OK,сорок,Фастфуд,
";

#[test]
fn test_reader_maps_headers_and_cells() -> Result<()> {
    let dataset = CsvDatasetProvider::read(EXPORT.as_bytes(), SignConvention::AsGiven)?;

    assert_eq!(dataset.len(), 4);
    assert!(dataset.require(&Column::ALL).is_ok());

    let first = &dataset.transactions()[0];

    assert_eq!(first.operation_date, Some(NaiveDateTime::parse_from_str("31.12.2021 16:44:00", "%d.%m.%Y %H:%M:%S")?));
    assert_eq!(first.card_id.as_deref(), Some("*7197"));
    assert_eq!(first.amount, Some(Decimal::from_str("-78.05")?));
    assert_eq!(first.category.as_deref(), Some("Супермаркеты"));
    assert_eq!(first.description.as_deref(), Some("Ситидрайв"));

    Ok(())
}

#[test]
fn test_reader_leaves_blank_and_unreadable_cells_empty() -> Result<()> {
    let dataset = CsvDatasetProvider::read(EXPORT.as_bytes(), SignConvention::AsGiven)?;
    let rows = dataset.transactions();

    assert_eq!(rows[1].card_id, None);
    assert_eq!(rows[1].amount, Some(Decimal::from_str("-500.00")?));
    assert_eq!(rows[2].amount, Some(Decimal::from_str("-1411.40")?));

    assert_eq!(rows[3].operation_date, None);
    assert_eq!(rows[3].amount, None);
    assert_eq!(rows[3].description, None);
    assert_eq!(rows[3].category.as_deref(), Some("Фастфуд"));

    Ok(())
}

#[test]
fn test_reader_applies_the_magnitude_convention() -> Result<()> {
    let dataset = CsvDatasetProvider::read(EXPORT.as_bytes(), SignConvention::Magnitude)?;

    let amounts: Vec<_> = dataset.transactions().iter().map(|row| row.amount).collect();

    assert_eq!(amounts, vec![
        Some(Decimal::from_str("78.05")?),
        Some(Decimal::from_str("500.00")?),
        Some(Decimal::from_str("1411.40")?),
        None
    ]);

    Ok(())
}

#[test]
fn test_reader_only_declares_columns_present_in_the_header() -> Result<()> {
    let source = "Дата,Сумма операции,Категория\n01.01.2023,100.0,Такси\n";
    let dataset = CsvDatasetProvider::read(source.as_bytes(), SignConvention::AsGiven)?;

    assert!(dataset.has_column(Column::Amount));
    assert!(!dataset.has_column(Column::OperationDate));

    let error = dataset.require(&Column::ALL).err();
    let missing = error.as_ref().map(|error| error.columns().to_vec());

    assert_eq!(missing, Some(vec![Column::OperationDate, Column::CardId, Column::Description]));

    Ok(())
}

#[test]
fn test_provider_loads_from_disk() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(EXPORT.as_bytes())?;

    let dataset = CsvDatasetProvider::new(file.path())
        .with_sign_convention(SignConvention::Magnitude)
        .load()?;

    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.transactions()[0].amount, Some(Decimal::from_str("78.05")?));

    Ok(())
}

#[test]
fn test_provider_reports_a_missing_file() {
    let result = CsvDatasetProvider::new("missing-operations.csv").load();

    assert!(matches!(result, Err(ProviderError::Open { .. })));
}

#[test]
fn test_sign_convention_defaults_to_as_given() -> Result<()> {
    let amount = Decimal::from_str("-35.0")?;

    assert_eq!(SignConvention::default(), SignConvention::AsGiven);
    assert_eq!(SignConvention::AsGiven.apply(amount), amount);
    assert_eq!(SignConvention::Magnitude.apply(amount), Decimal::from_str("35.0")?);

    Ok(())
}
