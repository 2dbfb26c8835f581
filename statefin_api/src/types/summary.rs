use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::candidate::Candidate;
use super::filer::Filer;
use super::meta::{NamedStats, QueryDesc, Stats};

/// Per-classification rollup of contribution stats. Classifications with no
/// matching documents stay at zero.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct ContributionByType {
    pub individual: Stats,
    pub entity: Stats,
    pub unknown: Stats,
}

/// Aggregate view of contributions over a date window.
///
/// `latest_at` is `None` when no document fell inside the window.
#[derive(Serialize, Deserialize, Debug)]
pub struct Summary {
    #[serde(flatten)]
    pub stats: Stats,
    pub latest_at: Option<DateTime<Utc>>,
    pub contribution_by_type: ContributionByType,
    pub query: QueryDesc,
}

/// District numbers with at least one filing, per house, ascending.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct StateDistricts {
    pub lower: Vec<String>,
    pub upper: Vec<String>,
}

/// Jurisdiction-wide summary plus the districts that appear in its filings.
#[derive(Serialize, Deserialize, Debug)]
pub struct StateSummary {
    #[serde(flatten)]
    pub summary: Summary,
    pub districts: StateDistricts,
}

/// Seat-level summary with a per-candidate breakdown keyed by candidate id.
#[derive(Serialize, Deserialize, Debug)]
pub struct DistrictSummary {
    #[serde(flatten)]
    pub summary: Summary,
    pub candidates: BTreeMap<String, NamedStats>,
}

/// Candidate-level summary: the candidate's own details, their aggregate
/// stats, and the filers contributing to them keyed by filer id.
#[derive(Serialize, Deserialize, Debug)]
pub struct CandidateSummary {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(flatten)]
    pub summary: Summary,
    pub associated_filers: BTreeMap<String, NamedStats>,
}

/// Filer-level summary with the candidate the filer supports, if any.
#[derive(Serialize, Deserialize, Debug)]
pub struct FilerSummary {
    #[serde(flatten)]
    pub filer: Filer,
    #[serde(flatten)]
    pub summary: Summary,
    pub candidate: Option<Candidate>,
}
