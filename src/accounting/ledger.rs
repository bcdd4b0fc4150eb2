use std::slice::Iter;

use rust_decimal::Decimal;

use super::record::{Record, ValueParseWarning};

/// The ordered records produced by one load, plus the warnings raised while
/// reading them. Never mutated once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: Vec<Record>,
    warnings: Vec<ValueParseWarning>,
}

impl Ledger {
    pub fn new(records: Vec<Record>, warnings: Vec<ValueParseWarning>) -> Ledger {
        Ledger { records, warnings }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn warnings(&self) -> &[ValueParseWarning] {
        &self.warnings
    }

    pub fn iter(&self) -> Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_amount(&self) -> Decimal {
        self.records.iter().map(Record::amount).sum()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Record;
    type IntoIter = Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
