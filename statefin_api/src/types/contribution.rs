use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::candidate::Candidate;
use super::filer::Filer;

/// Donor classification recorded on a contribution.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Individual,
    Entity,
    Unknown,
}

/// A single contribution document.
///
/// Multiword ancillary fields are stored camelCase by the ingest pipeline;
/// the one-sided renames normalize them to snake_case on the way out.
/// Fields that queries touch (`contribution_date`, `amount`, `type`) are
/// stored snake_case already and need no mapping.
#[derive(Serialize, Deserialize, Debug)]
pub struct Contribution {
    pub filer: Option<Filer>,
    pub candidate: Option<Candidate>,

    #[serde(rename(deserialize = "contributionId"))]
    pub contribution_id: String,
    pub contribution_date: DateTime<Utc>,
    pub amount: f64,
    pub memo: String,
    #[serde(rename = "type")]
    pub contribution_type: EntityType,
    pub name: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub employer: String,
    pub occupation: String,
    #[serde(rename(deserialize = "jobTitle"))]
    pub job_title: String,

    /// Source-specific attributes that never feed a query; passed through
    /// untyped.
    #[serde(rename(deserialize = "addtlData"))]
    pub addtl_data: Option<serde_json::Value>,
}
