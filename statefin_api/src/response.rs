//! Typed mirror of the engine's raw search responses.
//!
//! The structs cover exactly the shapes the composers in [`crate::query`]
//! can request. Anything else — a missing base aggregation, a bucket with
//! the wrong sub-aggregation — fails deserialization and surfaces as
//! [`crate::Error::Decode`] instead of propagating partial data.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::{Candidate, Filer, Stats};

/// Raw response to a summary query.
#[derive(Deserialize, Debug)]
pub struct SummaryResponse {
    pub took: i64,
    pub timed_out: bool,
    pub hits: Hits<SampledEntities>,
    pub aggregations: SummaryAggs,
}

/// Raw response to a record-list query.
#[derive(Deserialize, Debug)]
pub struct RecordsResponse<T> {
    pub took: i64,
    pub timed_out: bool,
    pub hits: Hits<T>,
}

#[derive(Deserialize, Debug)]
pub struct Hits<T> {
    pub total: TotalHits,
    pub hits: Vec<Hit<T>>,
}

#[derive(Deserialize, Debug)]
pub struct Hit<T> {
    #[serde(rename = "_source")]
    pub source: T,
}

/// Total match count. With exact totals requested, `relation` is always
/// `eq`.
#[derive(Deserialize, Debug)]
pub struct TotalHits {
    pub value: i64,
    pub relation: String,
}

/// The single sampled document of a sample-mode summary. Only the embedded
/// entities are read from it.
#[derive(Deserialize, Debug)]
pub struct SampledEntities {
    pub filer: Option<Filer>,
    pub candidate: Option<Candidate>,
}

/// Aggregation results of a summary query: the three base aggregations plus
/// whichever scope extras the query merged in.
#[derive(Deserialize, Debug)]
pub struct SummaryAggs {
    pub contribution_stats: StatsAgg,
    pub contribution_by_type: TermsAgg<TypeBucket>,
    pub latest_contribution: MaxDateAgg,
    pub districts_by_house: Option<TermsAgg<HouseBucket>>,
    pub candidates: Option<TermsAgg<CandidateBucket>>,
    pub associated_filers: Option<TermsAgg<FilerBucket>>,
}

/// A `stats` aggregation result. `min`/`max`/`avg` are null when the
/// aggregation saw no documents.
#[derive(Deserialize, Debug)]
pub struct StatsAgg {
    pub count: i64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
    pub sum: f64,
}

impl From<&StatsAgg> for Stats {
    fn from(agg: &StatsAgg) -> Stats {
        Stats {
            count: agg.count,
            total_amount: agg.sum,
            avg_amount: agg.avg.unwrap_or(0.0),
        }
    }
}

/// A `max` aggregation over a date field. Both fields are absent when no
/// documents matched.
#[derive(Deserialize, Debug)]
pub struct MaxDateAgg {
    pub value: Option<f64>,
    pub value_as_string: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Debug)]
pub struct TermsAgg<B> {
    pub buckets: Vec<B>,
}

/// One classification bucket; its stats sub-aggregation is named `1` by the
/// summary query.
#[derive(Deserialize, Debug)]
pub struct TypeBucket {
    pub key: String,
    pub doc_count: i64,
    #[serde(rename = "1")]
    pub stats: StatsAgg,
}

/// One house bucket of the districts rollup, keyed `lower` or `upper`.
#[derive(Deserialize, Debug)]
pub struct HouseBucket {
    pub key: String,
    pub doc_count: i64,
    pub districts: TermsAgg<DistrictBucket>,
}

/// One district bucket; keys are the numeric district field values.
#[derive(Deserialize, Debug)]
pub struct DistrictBucket {
    pub key: i64,
    pub doc_count: i64,
}

/// One candidate bucket of the seat breakdown.
#[derive(Deserialize, Debug)]
pub struct CandidateBucket {
    pub key: String,
    pub doc_count: i64,
    pub candidate_stats: StatsAgg,
    pub candidate_name: TermsAgg<KeyBucket>,
}

/// One filer bucket of the associated-filer breakdown.
#[derive(Deserialize, Debug)]
pub struct FilerBucket {
    pub key: String,
    pub doc_count: i64,
    pub filer_stats: StatsAgg,
    pub filer_name: TermsAgg<KeyBucket>,
}

/// A bare terms bucket, used by the name sub-aggregations.
#[derive(Deserialize, Debug)]
pub struct KeyBucket {
    pub key: String,
    pub doc_count: i64,
}
