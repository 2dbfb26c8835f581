use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::contribution::Contribution;
use super::report::Report;

/// Aggregate figures over a set of contributions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Stats {
    pub count: i64,
    pub total_amount: f64,
    pub avg_amount: f64,
}

/// Stats labelled with the entity's display name; the values of keyed
/// breakdown maps.
#[derive(Serialize, Deserialize, Debug)]
pub struct NamedStats {
    pub name: String,
    #[serde(flatten)]
    pub stats: Stats,
}

/// Echo of the effective query parameters plus engine execution metadata.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct QueryDesc {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub timed_out: bool,
    pub took: i64,
}

/// Descriptor for record lists: the query echo plus pagination and hit
/// accounting. `total` counts every match; `hits` counts returned records.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct RecordsQueryDesc {
    #[serde(flatten)]
    pub query: QueryDesc,
    pub offset: i64,
    pub limit: i64,
    pub total: i64,
    pub hits: i64,
}

/// A page of records plus the descriptor of the query that produced it.
#[derive(Serialize, Deserialize, Debug)]
pub struct Records<T> {
    pub records: Vec<T>,
    pub query: RecordsQueryDesc,
}

pub type Contributions = Records<Contribution>;
pub type Reports = Records<Report>;
