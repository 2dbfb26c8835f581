//! Typed building blocks for search-engine request bodies.
//!
//! Everything here serializes to the engine's JSON query DSL. The types
//! cover exactly the clauses the API issues (bool/filter queries, stats,
//! terms, and max aggregations, single-field sorts); nothing executes a
//! query.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// A complete `_search` request body.
///
/// Summary queries populate `aggs` and leave `sort` empty; record queries do
/// the opposite. `track_total_hits` is always set so hit totals are exact
/// rather than capped.
#[derive(Serialize, Clone, Debug)]
pub struct SearchBody {
    pub query: QueryClause,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub aggs: BTreeMap<String, Agg>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortClause>,
    pub size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    pub track_total_hits: bool,
}

impl SearchBody {
    /// Creates a body with the given filter clauses and no aggregations,
    /// sort, or pagination. Builders layer the rest on top.
    pub fn filtered(filters: Vec<Filter>) -> Self {
        SearchBody {
            query: QueryClause {
                bool: BoolClause { filter: filters },
            },
            aggs: BTreeMap::new(),
            sort: Vec::new(),
            size: 0,
            from: None,
            track_total_hits: true,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct QueryClause {
    pub bool: BoolClause,
}

/// The filter context of a bool query. Clauses are ANDed and do not score.
#[derive(Serialize, Clone, Debug)]
pub struct BoolClause {
    pub filter: Vec<Filter>,
}

/// A single filter clause. Serializes externally tagged, so
/// `Filter::term("type", "entity")` becomes `{"term": {"type": "entity"}}`.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    Term(BTreeMap<String, serde_json::Value>),
    Match(BTreeMap<String, serde_json::Value>),
    Range(BTreeMap<String, RangeBounds>),
}

impl Filter {
    /// Exact-value clause against a keyword field.
    pub fn term(field: &str, value: impl Into<serde_json::Value>) -> Self {
        let mut clause = BTreeMap::new();
        clause.insert(field.to_string(), value.into());
        Filter::Term(clause)
    }

    /// Analyzed match clause, used where the indexed field is numeric or
    /// tokenized rather than a keyword.
    pub fn matches(field: &str, value: impl Into<serde_json::Value>) -> Self {
        let mut clause = BTreeMap::new();
        clause.insert(field.to_string(), value.into());
        Filter::Match(clause)
    }

    /// Inclusive date-range clause over `field`.
    pub fn date_range(field: &str, gte: NaiveDate, lte: NaiveDate) -> Self {
        let mut clause = BTreeMap::new();
        clause.insert(field.to_string(), RangeBounds { gte, lte });
        Filter::Range(clause)
    }
}

/// Inclusive bounds of a range clause. Dates serialize as `YYYY-MM-DD`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RangeBounds {
    pub gte: NaiveDate,
    pub lte: NaiveDate,
}

/// A named aggregation: its kind plus optional nested sub-aggregations.
#[derive(Serialize, Clone, Debug)]
pub struct Agg {
    #[serde(flatten)]
    pub kind: AggKind,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub aggs: BTreeMap<String, Agg>,
}

impl Agg {
    /// `stats` over a numeric field (count, min, max, avg, sum).
    pub fn stats(field: &str) -> Self {
        Agg {
            kind: AggKind::Stats(AggField {
                field: field.to_string(),
            }),
            aggs: BTreeMap::new(),
        }
    }

    /// `max` over a field; used for latest-date lookups.
    pub fn max(field: &str) -> Self {
        Agg {
            kind: AggKind::Max(AggField {
                field: field.to_string(),
            }),
            aggs: BTreeMap::new(),
        }
    }

    /// Bucketing `terms` aggregation with the engine's default ordering
    /// (descending document count).
    pub fn terms(field: &str, size: i64) -> Self {
        Agg {
            kind: AggKind::Terms(TermsSpec {
                field: field.to_string(),
                size,
                order: None,
            }),
            aggs: BTreeMap::new(),
        }
    }

    /// Bucketing `terms` aggregation ordered by bucket key ascending.
    pub fn terms_by_key(field: &str, size: i64) -> Self {
        Agg {
            kind: AggKind::Terms(TermsSpec {
                field: field.to_string(),
                size,
                order: Some(TermsOrder { key: SortOrder::Asc }),
            }),
            aggs: BTreeMap::new(),
        }
    }

    /// Attaches a named sub-aggregation, evaluated per bucket.
    pub fn with_sub(mut self, name: &str, sub: Agg) -> Self {
        self.aggs.insert(name.to_string(), sub);
        self
    }
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub enum AggKind {
    Stats(AggField),
    Terms(TermsSpec),
    Max(AggField),
}

#[derive(Serialize, Clone, Debug)]
pub struct AggField {
    pub field: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct TermsSpec {
    pub field: String,
    pub size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<TermsOrder>,
}

/// Terms-aggregation ordering, e.g. `{"_key": "asc"}`.
#[derive(Serialize, Clone, Copy, Debug)]
pub struct TermsOrder {
    #[serde(rename = "_key")]
    pub key: SortOrder,
}

/// A single-field sort entry, e.g. `{"contribution_date": {"order": "desc"}}`.
#[derive(Serialize, Clone, Debug)]
pub struct SortClause(BTreeMap<String, SortSpec>);

impl SortClause {
    pub fn desc(field: &str) -> Self {
        let mut clause = BTreeMap::new();
        clause.insert(
            field.to_string(),
            SortSpec {
                order: SortOrder::Desc,
            },
        );
        SortClause(clause)
    }
}

#[derive(Serialize, Clone, Copy, Debug)]
pub struct SortSpec {
    pub order: SortOrder,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}
