// src/bonds/record.rs
use serde::{Deserialize, Serialize};

use crate::extractors::{extract_row_values, DomNode};
use crate::utils::error::ExtractError;

/// One row of the TreasuryDirect redemption table, exactly as rendered.
///
/// Every field holds the trimmed cell text (`"$25.00"`, `"01/2020"`, `""`),
/// so nothing is lost when the site changes how it formats a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondRecord {
    pub serial: String,
    pub series: String,
    pub denomination: String,
    pub issue_date: String,
    pub next_accrual: String,
    pub final_maturity: String,
    pub issue_price: String,
    pub interest: String,
    pub interest_rate: String,
    pub value: String,
    /// "MA" once the bond has matured.
    pub note: String,
}

impl BondRecord {
    /// Column order of the redemption table.
    pub const FIELD_NAMES: [&'static str; 11] = [
        "serial",
        "series",
        "denomination",
        "issueDate",
        "nextAccrual",
        "finalMaturity",
        "issuePrice",
        "interest",
        "interestRate",
        "value",
        "note",
    ];

    pub const FIELD_COUNT: usize = Self::FIELD_NAMES.len();

    /// Maps extracted row values onto fields by position.
    ///
    /// Anything other than exactly [`Self::FIELD_COUNT`] values is rejected
    /// with `InvalidDataReturned`, and no record is built.
    pub fn from_values(values: Vec<String>) -> Result<Self, ExtractError> {
        let found = values.len();
        let values: [String; 11] =
            values.try_into().map_err(|_| ExtractError::InvalidDataReturned {
                expected: Self::FIELD_COUNT,
                found,
            })?;

        let [
            serial,
            series,
            denomination,
            issue_date,
            next_accrual,
            final_maturity,
            issue_price,
            interest,
            interest_rate,
            value,
            note,
        ] = values.map(|v| v.trim().to_string());

        Ok(BondRecord {
            serial,
            series,
            denomination,
            issue_date,
            next_accrual,
            final_maturity,
            issue_price,
            interest,
            interest_rate,
            value,
            note,
        })
    }
}

#[cfg(test)]
impl BondRecord {
    /// Field values in column order.
    pub fn values(&self) -> [&str; 11] {
        [
            self.serial.as_str(),
            self.series.as_str(),
            self.denomination.as_str(),
            self.issue_date.as_str(),
            self.next_accrual.as_str(),
            self.final_maturity.as_str(),
            self.issue_price.as_str(),
            self.interest.as_str(),
            self.interest_rate.as_str(),
            self.value.as_str(),
            self.note.as_str(),
        ]
    }
}

impl TryFrom<Vec<String>> for BondRecord {
    type Error = ExtractError;

    fn try_from(values: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

/// Parses an SBCPrice response body into a single bond record.
pub fn parse_bond_page(html_content: &str) -> Result<BondRecord, ExtractError> {
    let document = DomNode::parse_document(html_content);
    let values = extract_row_values(&document)?;
    BondRecord::from_values(values)
}
