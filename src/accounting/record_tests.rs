use anyhow::Result;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::config::LedgerColumns;

fn row(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[test]
fn test_parse_amount_decimal_point() -> Result<()> {
    assert_eq!(parse_amount("1234.56")?, dec!(1234.56));
    assert_eq!(parse_amount("20")?, dec!(20));
    assert_eq!(parse_amount("-3.5")?, dec!(-3.5));

    Ok(())
}

#[test]
fn test_parse_amount_decimal_comma() -> Result<()> {
    assert_eq!(parse_amount("10,50")?, dec!(10.50));
    assert_eq!(parse_amount("1234,56")?, parse_amount("1234.56")?);

    Ok(())
}

#[test]
fn test_parse_amount_trims_whitespace() -> Result<()> {
    assert_eq!(parse_amount("  5,50 \t")?, dec!(5.5));

    Ok(())
}

#[test]
fn test_parse_amount_scientific() -> Result<()> {
    assert_eq!(parse_amount("1e3")?, dec!(1000));

    Ok(())
}

#[test]
fn test_parse_amount_rejects_garbage() {
    assert_eq!(parse_amount(""), Err(AmountParseError::Empty));
    assert_eq!(parse_amount("   "), Err(AmountParseError::Empty));
    assert_eq!(parse_amount("abc"), Err(AmountParseError::Invalid("abc".to_string())));
    assert_eq!(
        parse_amount("1.234,56"),
        Err(AmountParseError::Invalid("1.234.56".to_string()))
    );
}

#[test]
fn test_normalize_record() {
    let columns = LedgerColumns::default();
    let (record, warning) = Record::normalize(
        2,
        row(&[("fecha", "2024-01-02"), ("categoría", "Comida"), ("monto", "10,50")]),
        &columns,
    );

    assert_eq!(warning, None);
    assert_eq!(record.line(), 2);
    assert_eq!(record.category(), "Comida");
    assert_eq!(record.amount(), dec!(10.50));
    assert_eq!(record.field("fecha"), "2024-01-02");
    assert_eq!(record.field("monto"), "10,50");
}

#[test]
fn test_normalize_bad_amount_defaults_to_zero() {
    let columns = LedgerColumns::default();
    let (record, warning) =
        Record::normalize(7, row(&[("categoría", "Comida"), ("monto", " abc ")]), &columns);

    assert_eq!(record.amount(), Decimal::ZERO);

    let warning = warning.expect("a bad amount should raise a warning");
    assert_eq!(warning.line, 7);
    assert_eq!(warning.value, "abc");
    assert!(warning.row.contains("categoría: 'Comida'"));
    assert!(warning.to_string().contains("'abc'"));
    assert!(warning.to_string().contains("line 7"));
}

#[test]
fn test_normalize_missing_columns_default_to_empty() {
    let columns = LedgerColumns::default();
    let (record, warning) = Record::normalize(3, row(&[("nota", "x")]), &columns);

    assert_eq!(record.category(), "");
    assert_eq!(record.field("categoría"), "");
    assert_eq!(record.amount(), Decimal::ZERO);
    assert_eq!(warning.map(|w| w.reason), Some(AmountParseError::Empty));
}

#[test]
fn test_normalize_custom_columns() {
    let columns = LedgerColumns::new("category", "amount");
    let (record, warning) = Record::normalize(2, row(&[("category", "Rent"), ("amount", "800")]), &columns);

    assert_eq!(warning, None);
    assert_eq!(record.category(), "Rent");
    assert_eq!(record.amount(), dec!(800));
}

#[test]
fn test_parse_amount_out_of_range() -> Result<()> {
    assert_eq!(parse_amount("1000000000000000")?, MAX_AMOUNT);
    assert_eq!(parse_amount("-1000000000000000")?, -MAX_AMOUNT);
    assert_eq!(
        parse_amount("1000000000000000,01"),
        Err(AmountParseError::OutOfRange("1000000000000000.01".to_string()))
    );
    assert_eq!(
        parse_amount("50000000000000000000000000000"),
        Err(AmountParseError::OutOfRange("50000000000000000000000000000".to_string()))
    );
    assert_eq!(parse_amount("1e30"), Err(AmountParseError::OutOfRange("1e30".to_string())));
    assert_eq!(
        parse_amount("123456789012345678901234567890"),
        Err(AmountParseError::OutOfRange("123456789012345678901234567890".to_string()))
    );
    assert_eq!(parse_amount("inf"), Err(AmountParseError::Invalid("inf".to_string())));

    Ok(())
}
