use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::candidate::Candidate;
use super::filer::Filer;

/// A single filed report document, carrying the period totals a committee
/// declared. `received_date` is the sort field for report lists and is
/// stored snake_case; the remaining multiword fields are stored camelCase.
#[derive(Serialize, Deserialize, Debug)]
pub struct Report {
    pub filer: Option<Filer>,
    pub candidate: Option<Candidate>,

    #[serde(rename(deserialize = "reportId"))]
    pub report_id: String,
    #[serde(rename = "type")]
    pub report_type: String,

    pub received_date: DateTime<Utc>,

    #[serde(rename(deserialize = "periodStartDate"))]
    pub period_start_date: DateTime<Utc>,
    #[serde(rename(deserialize = "periodEndDate"))]
    pub period_end_date: DateTime<Utc>,

    #[serde(rename(deserialize = "contributionsAmount"))]
    pub contributions_amount: f64,
    #[serde(rename(deserialize = "expendituresAmount"))]
    pub expenditures_amount: f64,
    #[serde(rename(deserialize = "endingBalanceAmount"))]
    pub ending_balance_amount: f64,
}
