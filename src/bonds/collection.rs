// src/bonds/collection.rs
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::bonds::record::BondRecord;
use crate::utils::error::AggregateError;

/// Note the site puts on a bond that has stopped earning interest.
pub const MATURED_NOTE: &str = "MA";

const CURRENCY_SYMBOL: &str = "$";

// Amounts of $1,000 and up are rendered with thousands separators
static GROUPED_AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\d{1,3}(,\d{3})+(\.\d+)?$").expect("Failed to compile GROUPED_AMOUNT_RE")
});

/// Dollar-valued columns that can be totalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyField {
    IssuePrice,
    Interest,
    Value,
}

impl CurrencyField {
    pub fn name(self) -> &'static str {
        match self {
            CurrencyField::IssuePrice => "issuePrice",
            CurrencyField::Interest => "interest",
            CurrencyField::Value => "value",
        }
    }

    fn select(self, record: &BondRecord) -> &str {
        match self {
            CurrencyField::IssuePrice => record.issue_price.as_str(),
            CurrencyField::Interest => record.interest.as_str(),
            CurrencyField::Value => record.value.as_str(),
        }
    }
}

/// Bond records in the order they were requested. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BondCollection {
    bonds: Vec<BondRecord>,
}

impl BondCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: BondRecord) {
        self.bonds.push(record);
    }

    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BondRecord> {
        self.bonds.iter()
    }

    pub fn records(&self) -> &[BondRecord] {
        &self.bonds
    }

    /// Bonds whose note is anything but the matured marker, in original order.
    pub fn unmatured(&self) -> BondCollection {
        self.iter()
            .filter(|bond| bond.note != MATURED_NOTE)
            .cloned()
            .collect()
    }

    /// Sums one dollar column across all bonds.
    ///
    /// The first unparseable value aborts the sum; other columns are
    /// unaffected and can still be totalled.
    pub fn sum_field(&self, field: CurrencyField) -> Result<f64, AggregateError> {
        self.iter().try_fold(0.0_f64, |sum, bond| {
            let raw = field.select(bond);
            let amount = parse_currency(raw).map_err(|source| AggregateError::NumericParse {
                field: field.name(),
                serial: bond.serial.clone(),
                value: raw.to_string(),
                source,
            })?;
            Ok(sum + f64::from(amount))
        })
    }

    pub fn total_value(&self) -> Result<f64, AggregateError> {
        self.sum_field(CurrencyField::Value)
    }

    pub fn total_interest(&self) -> Result<f64, AggregateError> {
        self.sum_field(CurrencyField::Interest)
    }

    pub fn total_purchase_price(&self) -> Result<f64, AggregateError> {
        self.sum_field(CurrencyField::IssuePrice)
    }
}

/// Parses text like `"$103.68"` or `"$1,103.68"` at single precision.
///
/// One leading `$` is removed. Commas are only accepted as thousands
/// separators; anything else must parse as a plain number.
fn parse_currency(raw: &str) -> Result<f32, std::num::ParseFloatError> {
    let trimmed = raw.trim();
    let amount = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed);

    if GROUPED_AMOUNT_RE.is_match(amount) {
        return amount.replace(',', "").parse::<f32>();
    }
    amount.parse::<f32>()
}

impl FromIterator<BondRecord> for BondCollection {
    fn from_iter<I: IntoIterator<Item = BondRecord>>(iter: I) -> Self {
        Self {
            bonds: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for BondCollection {
    type Item = BondRecord;
    type IntoIter = std::vec::IntoIter<BondRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.bonds.into_iter()
    }
}

impl<'a> IntoIterator for &'a BondCollection {
    type Item = &'a BondRecord;
    type IntoIter = std::slice::Iter<'a, BondRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.bonds.iter()
    }
}
