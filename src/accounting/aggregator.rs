use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::ledger::Ledger;

/// A category-keyed mapping that remembers the order categories were first
/// seen in. The empty string is a valid key.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

pub type CategoryTotals = CategoryMap<Decimal>;
pub type CategoryPercentages = CategoryMap<f64>;

impl<V> Default for CategoryMap<V> {
    fn default() -> Self {
        CategoryMap {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> CategoryMap<V> {
    pub fn new() -> CategoryMap<V> {
        CategoryMap::default()
    }

    pub fn get(&self, category: &str) -> Option<&V> {
        self.index.get(category).map(|&position| &self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(category, value)| (category.as_str(), value))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(category, _)| category.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_or_insert(&mut self, category: &str, default: V) -> &mut V {
        let position = match self.index.get(category) {
            Some(&position) => position,
            None => {
                self.entries.push((category.to_string(), default));
                self.index.insert(category.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            },
        };

        &mut self.entries[position].1
    }
}

impl CategoryMap<Decimal> {
    pub fn grand_total(&self) -> Decimal {
        self.entries.iter().map(|(_, total)| *total).sum()
    }
}

impl CategoryMap<f64> {
    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, percentage)| *percentage).sum()
    }
}

/// Sums record amounts per category. Calling it again on the same ledger
/// yields the same totals.
pub fn totals_by_category(ledger: &Ledger) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for record in ledger {
        *totals.entry_or_insert(record.category(), Decimal::ZERO) += record.amount();
    }

    totals
}

pub fn percentages_by_category(ledger: &Ledger) -> CategoryPercentages {
    percentages_from_totals(&totals_by_category(ledger))
}

/// Share of the grand total held by each category, from 0 to 100. When the
/// grand total is zero every category gets 0 instead of dividing by zero.
pub fn percentages_from_totals(totals: &CategoryTotals) -> CategoryPercentages {
    let grand_total = totals.grand_total();
    let mut percentages = CategoryPercentages::new();

    for (category, total) in totals.iter() {
        let percentage = if grand_total.is_zero() {
            0.0
        } else {
            share_of(*total, grand_total)
        };
        *percentages.entry_or_insert(category, 0.0) = percentage;
    }

    percentages
}

fn share_of(total: Decimal, grand_total: Decimal) -> f64 {
    match total.checked_div(grand_total).and_then(|ratio| ratio.checked_mul(dec!(100))) {
        Some(percentage) => percentage.to_f64().unwrap_or(0.0),
        // Ratios outside Decimal's range still have a meaningful float value.
        None => match (total.to_f64(), grand_total.to_f64()) {
            (Some(total), Some(grand_total)) => 100.0 * total / grand_total,
            _ => 0.0,
        },
    }
}
