// src/treasury/models.rs
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::config::BondRequest;

/// Fields of the SBCPrice "Calculate" form, named as the site expects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedemptionForm {
    #[serde(rename = "Denomination")]
    pub denomination: String,
    #[serde(rename = "SerialNumber")]
    pub serial_number: String,
    #[serde(rename = "IssueDate")]
    pub issue_date: String,
    #[serde(rename = "RedemptionDate")]
    pub redemption_date: String,
    #[serde(rename = "Series")]
    pub series: String,
    #[serde(rename = "btnAdd.x")]
    pub calculate: &'static str,
    #[serde(rename = "Version")]
    pub version: &'static str,
}

impl RedemptionForm {
    pub const CALCULATE: &'static str = "Calculate";
    pub const VERSION: &'static str = "6";

    /// Builds the form for `request`, valued as of the month containing `on`.
    pub fn new(request: &BondRequest, on: NaiveDate) -> Self {
        Self {
            denomination: request.denomination.to_string(),
            serial_number: request.serial.clone(),
            issue_date: request.issue_date.clone(),
            redemption_date: format!("{:02}/{}", on.month(), on.year()),
            series: request.series.clone(),
            calculate: Self::CALCULATE,
            version: Self::VERSION,
        }
    }
}
